//! Custom extractors for Axum handlers.
//!
//! Each extractor rejects with [`AppError`](crate::errors::AppError), so a
//! malformed request gets the same JSON error body as any other failure.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
