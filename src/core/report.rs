use crate::core::version::RuntimeVersion;
use crate::runtime::PythonProbe;
use crate::utils::error::Result;

/// Fixed first line of output, kept byte-identical to the original script.
pub const BANNER: &str = "Running example Python CLI from usefull-scripts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeReport {
    pub version: RuntimeVersion,
}

impl SmokeReport {
    /// Asks the probe for the interpreter's version output and builds the
    /// report from it.
    pub fn probe<P: PythonProbe>(probe: &P) -> Result<Self> {
        let output = probe.version_output()?;
        let version = RuntimeVersion::parse(&output)?;
        Ok(Self { version })
    }

    /// Renders the two report lines, without a trailing newline.
    pub fn render(&self) -> String {
        format!("{}\nPython: {}", BANNER, self.version)
    }
}
