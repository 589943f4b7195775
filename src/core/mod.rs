pub mod report;
pub mod version;

pub use crate::utils::error::Result;
