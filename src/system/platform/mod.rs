pub trait PlatformExtensions {
    fn process_cmdline(pid: u32) -> Option<String>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod portable;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use portable as platform_impl;

/// Space-separated argument vector of `pid`, `None` when it cannot be read.
pub fn process_cmdline(pid: u32) -> Option<String> {
    platform_impl::Platform::process_cmdline(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_does_not_panic_for_current_pid() {
        let pid = std::process::id();
        let _ = process_cmdline(pid);
    }

    #[test]
    fn missing_pid_has_no_cmdline() {
        assert_eq!(process_cmdline(u32::MAX - 1), None);
    }
}
