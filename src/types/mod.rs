//! Request types for the VsesvitAI API.
//!
//! Responses are returned as untyped JSON; only the inputs that need shaping
//! (query strings, create payloads, uploads) are modelled here.

mod projects;
mod query;
mod smart_tables;
mod upload;

pub use projects::CreateProjectRequest;
pub use query::ListQuery;
pub use smart_tables::CreateSmartTableRequest;
pub use upload::UploadFile;
