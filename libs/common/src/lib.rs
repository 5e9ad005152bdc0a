//! Common library for the conference application
//!
//! This crate provides the functionality shared by the conference services:
//! the records served by the remote REST API, the client used to fetch them
//! and the errors raised along the way.
//!
//! ```rust,no_run
//! use common::{DirectoryProvider, HttpProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProviderConfig::from_env()?;
//!     let provider = HttpProvider::new(&config)?;
//!     let users = provider.fetch_users().await?;
//!     println!("Fetched {} users", users.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod provider;

pub use error::{ProviderError, ProviderResult};
pub use models::{RawMeeting, User};
pub use provider::{DirectoryProvider, HttpProvider, ProviderConfig};
