use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};
use thiserror::Error;

use super::process::ProcessState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("no process with PID {0}")]
    NotFound(u32),
    #[error("PID {0} has exited")]
    Exited(u32),
    #[error("PID {pid} reported an invalid memory value {value}")]
    InvalidValue { pid: u32, value: f64 },
}

/// Source of resident memory readings for a process.
pub trait MemoryReader {
    fn read_memory(&mut self, pid: u32) -> Result<f64, SampleError>;
}

/// Reads resident memory through sysinfo, refreshing only the watched PID.
pub struct SysinfoReader {
    sys: System,
}

impl Default for SysinfoReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoReader {
    pub fn new() -> Self {
        SysinfoReader { sys: System::new() }
    }
}

impl MemoryReader for SysinfoReader {
    fn read_memory(&mut self, pid: u32) -> Result<f64, SampleError> {
        #[cfg(feature = "trace-log")]
        let _span = tracing::debug_span!("sampler.read_memory", pid = pid).entered();

        let sysinfo_pid = Pid::from_u32(pid);
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[sysinfo_pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        let process = self
            .sys
            .process(sysinfo_pid)
            .ok_or(SampleError::NotFound(pid))?;
        // Zombies keep their PID until reaped but no longer own any memory.
        if process.status() == ProcessStatus::Zombie {
            return Err(SampleError::Exited(pid));
        }
        Ok(process.memory() as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleResult {
    Ok(f64),
    Unavailable,
}

impl SampleResult {
    pub fn state(self) -> ProcessState {
        match self {
            SampleResult::Ok(_) => ProcessState::Running,
            SampleResult::Unavailable => ProcessState::Terminated,
        }
    }
}

/// Classifies one reader call per sample. Errors are not retried and are not
/// told apart: a permission failure reads the same as an exited process.
pub struct Sampler<R> {
    reader: R,
}

impl<R: MemoryReader> Sampler<R> {
    pub fn new(reader: R) -> Self {
        Sampler { reader }
    }

    pub fn sample(&mut self, pid: u32) -> SampleResult {
        let reading = self.reader.read_memory(pid).and_then(|value| {
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(SampleError::InvalidValue { pid, value })
            }
        });

        match reading {
            Ok(value) => SampleResult::Ok(value),
            Err(_err) => {
                #[cfg(feature = "trace-log")]
                tracing::info!(pid = pid, error = %_err, "sample unavailable");
                SampleResult::Unavailable
            }
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }
}
