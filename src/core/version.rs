use crate::utils::error::{Result, SmokeError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| {
        Regex::new(r"^(?:Python\s+)?(\d+)\.(\d+)\.(\d+)").expect("version regex is valid")
    })
}

/// An interpreter version truncated to major.minor.patch.
///
/// Pre-release and build suffixes (`3.13.0rc1`, `3.12.4+local`) are
/// discarded on parse; only the three numeric components survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Parses the version out of what an interpreter reports, either a
    /// bare token (`3.12.4`) or a `--version` banner (`Python 3.12.4`).
    pub fn parse(output: &str) -> Result<Self> {
        let trimmed = output.trim();
        let caps = version_re().captures(trimmed).ok_or_else(|| {
            SmokeError::VersionParseError { output: trimmed.to_string() }
        })?;

        let component = |i: usize| -> Result<u32> {
            caps[i].parse().map_err(|_| SmokeError::VersionParseError {
                output: trimmed.to_string(),
            })
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
