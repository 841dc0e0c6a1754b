//! Host information backed by `sysinfo`.

use std::env::consts;

use scaffold_core::HostInfoPort;
use sysinfo::System;

/// [`HostInfoPort`] implementation that queries the running machine.
///
/// CPU data is refreshed once at construction; the static OS facts are
/// read on demand.
pub struct SysinfoHost {
    cpu_brand: String,
}

impl SysinfoHost {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();
        Self { cpu_brand }
    }
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInfoPort for SysinfoHost {
    fn platform(&self) -> String {
        let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
        let mut platform = format!("{}-{}-{}", os_family(consts::OS), kernel, consts::ARCH);
        if let Some(distro) = System::name() {
            let version = System::os_version().unwrap_or_default();
            let with = format!("{distro}-{version}");
            platform.push_str("-with-");
            platform.push_str(
                with.trim_end_matches('-')
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_")
                    .as_str(),
            );
        }
        platform
    }

    fn os_name(&self) -> String {
        os_family(consts::OS).to_string()
    }

    fn architecture(&self) -> String {
        format!("{}bit", usize::BITS)
    }

    fn processor(&self) -> String {
        self.cpu_brand.clone()
    }
}

/// Map a Rust target OS to the family name Python's `platform.system()` uses.
fn os_family(target_os: &str) -> &str {
    match target_os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}
