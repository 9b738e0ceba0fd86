//! Collaborator boundary: upload-and-analyze HTTP client plus a development
//! stand-in fixture.

pub mod http;
pub mod mock;

pub use http::{AnalyzeClient, ClientError};
