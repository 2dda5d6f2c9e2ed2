//! Wire entities and their accessor operations.
//!
//! Entities are plain serde structs mirroring the service's JSON. The
//! operations live as methods on [`AppClient`](crate::client::AppClient),
//! next to the entity they act on.

mod application;
mod post;

pub use application::Application;
pub use post::{Post, SECRET_LEN};
