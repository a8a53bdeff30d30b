//! vidgrab request library
//!
//! This crate models what the download form collects and checks: a URL, an
//! output format, and a quality label. Validation is deliberately shallow:
//! the URL must be syntactically valid and its host must be on the platform
//! allow-list. Nothing here performs network I/O.
//!
//! # Example
//!
//! ```
//! use vidgrab_request::{DownloadRequest, MediaFormat, Platform};
//!
//! let request = DownloadRequest::new(
//!     "https://youtu.be/dQw4w9WgXcQ",
//!     MediaFormat::Mp3,
//!     "320kbps",
//! )
//! .unwrap();
//!
//! assert_eq!(request.platform(), Platform::YouTube);
//! assert_eq!(request.payload().v_quality, "320");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Request validation errors
//! - [`format`]: Output formats and quality labels
//! - [`platform`]: Supported platform allow-list
//! - [`url`]: Syntactic URL parsing
//! - [`request`]: The validated request and backend payload
//! - [`filename`]: Suggested filenames

pub mod error;
pub mod filename;
pub mod format;
pub mod platform;
pub mod request;
pub mod url;

// Re-export commonly used types at the crate root
pub use error::{RequestError, RequestResult};
pub use filename::{extract_video_id, suggest_filename};
pub use format::{quality_api_value, MediaFormat};
pub use platform::Platform;
pub use request::{DownloadPayload, DownloadRequest};
pub use url::{is_valid_url, ParsedUrl};
