//! Post entity and its accessors.

use rand::Rng;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::AppClient;
use crate::error::{Error, RemoteError};
use crate::http::api_call;
use crate::id::ObjectId;

/// Length of a generated post secret.
pub const SECRET_LEN: usize = 8;

const SECRET_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Remote Post resource, always scoped under the client's Application.
///
/// `id == None` means the post has not been created yet;
/// [`save_post`](AppClient::save_post) then creates it and the decoded
/// response carries the server-assigned identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<ObjectId>,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub allow: bool,
    #[serde(default)]
    pub member: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RemoteError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Uniform random lowercase-alphanumeric secret. A per-post shared
/// secret, not a security credential, so `thread_rng` is enough.
fn generate_secret() -> String {
    let mut rng = rand::thread_rng();
    (0..SECRET_LEN)
        .map(|_| SECRET_ALPHABET[rng.gen_range(0..SECRET_ALPHABET.len())] as char)
        .collect()
}

impl AppClient {
    /// Creates or updates a post.
    ///
    /// An empty `secret` is filled with a generated one before the post
    /// is serialized. `POST {origin}/{app_id}/post/` creates
    /// (`post.id == None`); `POST {origin}/{app_id}/post/{id}/` updates.
    /// The decoded response overwrites the receiver before the embedded
    /// `errors` array is inspected, so after a successful call the
    /// receiver carries the server-assigned `_id`, `owner_id` and any
    /// normalized fields.
    ///
    /// # Errors
    /// Transport failures propagate as [`Error::HttpMiddleware`]; a 5xx
    /// status or a non-empty embedded `errors` array becomes
    /// [`Error::Remote`]; a body that is not Post JSON becomes
    /// [`Error::Serialization`].
    pub async fn save_post(&self, post: &mut Post) -> Result<(), Error> {
        if post.secret.is_empty() {
            post.secret = generate_secret();
        }

        let payload = serde_json::to_string(post)?;
        let url = match &post.id {
            Some(id) => format!(
                "{}/{}/post/{}/",
                self.application_origin, self.application_id, id
            ),
            None => format!("{}/{}/post/", self.application_origin, self.application_id),
        };
        let (status, body) = api_call(&self.http, Method::POST, &url, Some(payload)).await?;

        if status >= 500 {
            return Err(RemoteError::status("Post: Status code error", status).into());
        }

        *post = serde_json::from_str(&body)?;
        if let Some(first) = post.errors.first() {
            return Err(first.clone().into());
        }
        Ok(())
    }

    /// Fetches a post by `post.id` via `GET {origin}/{app_id}/{id}/` and
    /// decodes the response into the receiver.
    ///
    /// Fails with a validation error before any network call when the id
    /// is missing.
    ///
    /// # Errors
    /// [`Error::InvalidParams`] when `post.id` is `None`; otherwise the
    /// same taxonomy as [`save_post`](AppClient::save_post).
    pub async fn get_post(&self, post: &mut Post) -> Result<(), Error> {
        let Some(id) = post.id.clone() else {
            return Err(Error::InvalidParams("ID is required".to_string()));
        };

        let url = format!("{}/{}/{}/", self.application_origin, self.application_id, id);
        let (status, body) = api_call(&self.http, Method::GET, &url, None).await?;

        if status >= 500 {
            return Err(RemoteError::status("Post: Status code error", status).into());
        }

        *post = serde_json::from_str(&body)?;
        if let Some(first) = post.errors.first() {
            return Err(first.clone().into());
        }
        Ok(())
    }
}
