//! Client-side data access for the danmaku comment/application service.
//!
//! The crate bootstraps an authenticated HTTP client through the OAuth2
//! client-credentials grant, resolves the Application identity carried in
//! the token, and performs the CRUD-style calls the service exposes for
//! Application and Post resources. The implementation is organized into:
//!
//! - `error`: crate error enum and the service's wire error object
//! - `config`: environment-driven connection settings
//! - `id`: opaque 24-hex entity identifiers
//! - `auth`: client-credentials token exchange
//! - `http`: shared request path with tracing middleware
//! - `client`: the resolved [`AppClient`] context
//! - `model`: Application and Post entities with their accessors
//!
//! The main entry point is [`AppClient::start`], which returns the handle
//! every accessor operation hangs off.
//!
//! ```no_run
//! use danmaku_client::{AppClient, Config, Post};
//!
//! # async fn run() -> Result<(), danmaku_client::Error> {
//! let client = AppClient::start(&Config::from_env()?).await?;
//!
//! let mut post = Post {
//!     uri: "/video/42".to_string(),
//!     ..Post::default()
//! };
//! client.save_post(&mut post).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod id;
pub mod model;

pub use client::{APPLICATION_SCOPE, AppClient};
pub use config::Config;
pub use error::{Error, RemoteError};
pub use id::ObjectId;
pub use model::{Application, Post};
