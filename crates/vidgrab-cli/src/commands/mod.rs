//! CLI command implementations

pub mod download;
pub mod inspect;
pub mod json_output;
pub mod platforms;
pub mod tone;
