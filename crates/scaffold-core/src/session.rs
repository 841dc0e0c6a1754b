//! Session info: the ordered snapshot of host and runtime metadata that is
//! embedded into a generated README.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Label for the Python interpreter version.
pub const PYTHON_VERSION: &str = "Python Version";
/// Label for the platform string.
pub const PLATFORM: &str = "Platform";
/// Label for the operating system family.
pub const OS: &str = "OS";
/// Label for the pointer-width architecture.
pub const ARCHITECTURE: &str = "Architecture";
/// Label for the processor identifier.
pub const PROCESSOR: &str = "Processor";
/// Label for the generation timestamp.
pub const GENERATED_ON: &str = "Generated On";
/// Label for the external R interpreter version.
pub const R_VERSION: &str = "R Version";

/// Every label a session info carries, in report order.
pub const LABELS: [&str; 7] = [
    PYTHON_VERSION,
    PLATFORM,
    OS,
    ARCHITECTURE,
    PROCESSOR,
    GENERATED_ON,
    R_VERSION,
];

/// Timestamp format used for [`GENERATED_ON`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered label → value mapping. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    entries: Vec<(String, String)>,
}

impl SessionInfo {
    /// Build from ordered pairs. Later duplicates of a label are dropped.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            if entries.iter().all(|(existing, _)| *existing != key) {
                entries.push((key, value.into()));
            }
        }
        Self { entries }
    }

    /// Look up the value for `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SessionInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_first_duplicate() {
        let info = SessionInfo::from_pairs([("B", "2"), ("A", "1"), ("B", "3")]);

        assert_eq!(info.labels().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(info.get("B"), Some("2"));
        assert_eq!(info.get("C"), None);
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let info = SessionInfo::from_pairs([("Zeta", "z"), ("Alpha", "a")]);
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"Zeta":"z","Alpha":"a"}"#);
    }
}
