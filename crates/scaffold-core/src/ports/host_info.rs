//! Host information port.
//!
//! Core owns the trait, runtime owns the `sysinfo`-backed implementation,
//! and the CLI injects it via bootstrap.

/// Port for querying static facts about the host machine.
///
/// Values may be empty when the host cannot answer; the session service
/// substitutes fallbacks so the report never carries an empty value.
pub trait HostInfoPort: Send + Sync {
    /// Human-readable platform identifier (OS, kernel release, machine).
    fn platform(&self) -> String;

    /// Operating system family name, e.g. `Linux`, `Darwin`, `Windows`.
    fn os_name(&self) -> String;

    /// Pointer-width architecture, e.g. `64bit`.
    fn architecture(&self) -> String;

    /// Processor identifier (CPU brand string where available).
    fn processor(&self) -> String;
}
