//! vidgrab CLI library.
//!
//! This crate provides the pieces behind the `vidgrab` binary: configuration
//! loading, the synthetic media source, file persistence, and the command
//! implementations.

pub mod commands;
pub mod config;
pub mod frame;
pub mod save;
pub mod source;

pub use config::Config;
pub use source::{FetchedMedia, MediaSource, SourceError, SyntheticSource};
