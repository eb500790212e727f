use std::fmt;

use super::platform;

pub const UNKNOWN_COMMAND: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Terminated,
}

/// Command line of the watched process, read once when monitoring starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    command: String,
}

impl CommandMetadata {
    pub fn read(pid: u32) -> Self {
        match platform::process_cmdline(pid) {
            Some(command) if !command.is_empty() => CommandMetadata { command },
            _ => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        CommandMetadata {
            command: UNKNOWN_COMMAND.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }
}

impl From<String> for CommandMetadata {
    fn from(command: String) -> Self {
        if command.is_empty() {
            Self::unknown()
        } else {
            CommandMetadata { command }
        }
    }
}

impl fmt::Display for CommandMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Joins a NUL-separated argument vector with single spaces.
pub fn join_cmdline(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .split('\0')
        .filter(|arg| !arg.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmdline_separators_become_single_spaces() {
        assert_eq!(
            join_cmdline(b"java\0-Xmx1g\0MemoryHog\0"),
            "java -Xmx1g MemoryHog"
        );
        assert_eq!(join_cmdline(b"a\0\0b"), "a b");
        assert_eq!(join_cmdline(b""), "");
    }

    #[test]
    fn unreadable_command_is_unknown() {
        let meta = CommandMetadata::read(u32::MAX - 1);
        assert_eq!(meta.as_str(), "unknown");
    }

    #[test]
    fn empty_command_is_unknown() {
        assert_eq!(CommandMetadata::from(String::new()).as_str(), "unknown");
        assert_eq!(CommandMetadata::from("sleep 60".to_string()).to_string(), "sleep 60");
    }

    #[test]
    fn current_process_command_is_readable() {
        let meta = CommandMetadata::read(std::process::id());
        assert_ne!(meta.as_str(), UNKNOWN_COMMAND);
    }
}
