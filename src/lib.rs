pub mod core;
pub mod runtime;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::report::{SmokeReport, BANNER};
pub use crate::core::version::RuntimeVersion;
pub use crate::runtime::{PythonProbe, SystemPython};
pub use crate::utils::error::{Result, SmokeError};
