use super::PlatformExtensions;
use crate::system::process::join_cmdline;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_cmdline(pid: u32) -> Option<String> {
        // /proc/{pid}/cmdline holds argv as NUL-terminated strings
        let path = format!("/proc/{pid}/cmdline");
        let raw = std::fs::read(path).ok()?;
        Some(join_cmdline(&raw))
    }
}
