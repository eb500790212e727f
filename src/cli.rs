use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;

use crate::config::{Config, load_config, load_config_from_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PidError {
    #[error("No process ID provided")]
    Missing,
    #[error("Invalid process ID provided")]
    Invalid,
}

#[derive(Debug, Parser)]
#[command(
    name = "graphit",
    version,
    about = "Graph the resident memory of a running process"
)]
pub struct Cli {
    /// Process ID to monitor
    #[arg(allow_negative_numbers = true)]
    pub pid: Option<String>,

    /// Anything after the PID is ignored.
    #[arg(hide = true, allow_negative_numbers = true)]
    pub rest: Vec<String>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sampling interval in milliseconds
    #[arg(long)]
    pub refresh_rate: Option<u64>,

    /// Write tracing spans as JSON lines to this file (needs the `trace-log` feature).
    #[arg(long)]
    pub trace_output: Option<PathBuf>,
}

/// Outcome of reading the command line when monitoring cannot start.
#[derive(Debug)]
pub enum ArgsError {
    /// `--help` or `--version`; clap prints it and exits successfully.
    Display(clap::Error),
    Pid(PidError),
}

impl Cli {
    /// Parses `args` and the PID. Any argument clap rejects counts as an
    /// invalid PID so every bad invocation exits the same way.
    pub fn try_parse_with_pid<I, T>(args: I) -> Result<(Cli, u32), ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        Err(ArgsError::Display(err))
                    }
                    _ => Err(ArgsError::Pid(PidError::Invalid)),
                };
            }
        };
        let pid = cli.pid().map_err(ArgsError::Pid)?;
        Ok((cli, pid))
    }

    pub fn pid(&self) -> Result<u32, PidError> {
        parse_pid(self.pid.as_deref())
    }

    pub fn load_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => load_config_from_path(path),
            None => load_config(),
        };

        if let Some(rate) = self.refresh_rate {
            config.general.refresh_rate_ms = rate;
        }

        config
    }
}

/// Accepts positive decimal PIDs only.
pub fn parse_pid(arg: Option<&str>) -> Result<u32, PidError> {
    let arg = arg.ok_or(PidError::Missing)?;
    match arg.trim().parse::<u32>() {
        Ok(pid) if pid > 0 => Ok(pid),
        _ => Err(PidError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pid() {
        assert_eq!(parse_pid(None), Err(PidError::Missing));
        assert_eq!(PidError::Missing.to_string(), "No process ID provided");
    }

    #[test]
    fn invalid_pids() {
        for arg in ["abc", "", "12.5", "-5", "0", "99999999999"] {
            assert_eq!(parse_pid(Some(arg)), Err(PidError::Invalid), "{arg:?}");
        }
        assert_eq!(PidError::Invalid.to_string(), "Invalid process ID provided");
    }

    #[test]
    fn valid_pid() {
        assert_eq!(parse_pid(Some("4242")), Ok(4242));
    }

    #[test]
    fn cli_accepts_negative_pid_as_value() {
        let cli = Cli::try_parse_from(["graphit", "-5"]).unwrap();
        assert_eq!(cli.pid(), Err(PidError::Invalid));
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let (cli, pid) = Cli::try_parse_with_pid(["graphit", "12", "13", "-7"]).unwrap();
        assert_eq!(pid, 12);
        assert_eq!(cli.rest, vec!["13".to_string(), "-7".to_string()]);
    }

    #[test]
    fn rejected_arguments_are_invalid_pid() {
        for args in [
            vec!["graphit", "-x"],
            vec!["graphit", "--pid"],
            vec!["graphit", "--pid", "12"],
            vec!["graphit", "--refresh-rate", "fast", "12"],
        ] {
            assert!(
                matches!(
                    Cli::try_parse_with_pid(args.clone()),
                    Err(ArgsError::Pid(PidError::Invalid))
                ),
                "{args:?}"
            );
        }
    }

    #[test]
    fn missing_pid_through_parser() {
        assert!(matches!(
            Cli::try_parse_with_pid(["graphit"]),
            Err(ArgsError::Pid(PidError::Missing))
        ));
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(matches!(
            Cli::try_parse_with_pid(["graphit", "--help"]),
            Err(ArgsError::Display(_))
        ));
    }

    #[test]
    fn refresh_rate_flag_overrides_config() {
        let cli = Cli::try_parse_from([
            "graphit",
            "--config",
            "/nonexistent/graphit.toml",
            "--refresh-rate",
            "250",
            "17",
        ])
        .unwrap();
        assert_eq!(cli.pid(), Ok(17));
        assert_eq!(cli.load_config().general.refresh_rate_ms, 250);
    }
}
