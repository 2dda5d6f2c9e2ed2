//! HTTP plumbing shared by every accessor operation.

mod client;

pub(crate) use client::{api_call, wrap};
pub use client::REQUEST_TIMEOUT;

pub use reqwest::Method;
