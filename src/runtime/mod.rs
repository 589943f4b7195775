use crate::utils::error::{Result, SmokeError};
use std::io::ErrorKind;
use std::process::Command;

/// Seam between report assembly and the real interpreter, so tests can
/// substitute canned `--version` output.
pub trait PythonProbe {
    fn version_output(&self) -> Result<String>;
}

/// Probes the system Python installation by running `<name> --version`
/// for each candidate interpreter name until one responds.
#[derive(Debug, Clone)]
pub struct SystemPython {
    candidates: Vec<String>,
}

impl SystemPython {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Default for SystemPython {
    fn default() -> Self {
        // `py` covers Windows installs that ship only the launcher.
        Self::new(vec!["python3".to_string(), "python".to_string(), "py".to_string()])
    }
}

impl PythonProbe for SystemPython {
    fn version_output(&self) -> Result<String> {
        for name in &self.candidates {
            match Command::new(name).arg("--version").output() {
                Ok(out) if out.status.success() => {
                    tracing::debug!("Found interpreter: {}", name);
                    let stdout = String::from_utf8_lossy(&out.stdout);
                    if !stdout.trim().is_empty() {
                        return Ok(stdout.into_owned());
                    }
                    // Python 2 prints its --version banner to stderr.
                    return Ok(String::from_utf8_lossy(&out.stderr).into_owned());
                }
                Ok(out) => {
                    tracing::debug!("Interpreter {} exited with {}", name, out.status);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Interpreter {} not on PATH", name);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(SmokeError::InterpreterNotFound { tried: self.candidates.clone() })
    }
}
