//! VsesvitAI Client Library
//!
//! An async Rust client for the VsesvitAI content-generation API: articles,
//! projects, landings, knowledge bases, smart tables, authors, audiences and
//! the current user account.
//!
//! # Features
//!
//! - **Typed errors**: every failed call maps to one [`VsesvitError`] variant,
//!   with messages that name the resource the call addressed
//! - **Binary downloads**: article, landing and smart table exports as raw
//!   bytes or written straight to disk
//! - **Uploads**: multipart upload of smart table input files
//! - **Observability**: `tracing` spans per request and key redaction helpers
//! - **Async/Await**: built on Tokio and `reqwest`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vsesvit_client::{ListQuery, VsesvitClient, VsesvitError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VsesvitClient::from_env()?;
//!
//!     let me = client.user().me().await?;
//!     println!("Balance: {}", me["balance"]);
//!
//!     match client.articles().get(11505).await {
//!         Ok(article) => println!("{article}"),
//!         Err(VsesvitError::ResourceNotFound { message, .. }) => eprintln!("{message}"),
//!         Err(other) => return Err(other.into()),
//!     }
//!
//!     let path = client.articles().download_to(11505, "pdf", "article.pdf").await?;
//!     println!("Saved to {}", path.display());
//!
//!     let projects = client.projects().list(ListQuery::new().page(1).limit(10)).await?;
//!     println!("{projects}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{ApiRequest, ApiResponse, VsesvitClient, VsesvitClientBuilder};
pub use config::VsesvitConfig;
pub use errors::{ErrorKind, VsesvitError, VsesvitResult};
pub use types::{CreateProjectRequest, CreateSmartTableRequest, ListQuery, UploadFile};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
