use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_cmdline(pid: u32) -> Option<String> {
        let sysinfo_pid = Pid::from_u32(pid);
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[sysinfo_pid]),
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
        );
        let process = sys.process(sysinfo_pid)?;
        let command = process
            .cmd()
            .iter()
            .map(|s| s.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Some(command)
    }
}
