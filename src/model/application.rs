//! Application entity and its accessors.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::AppClient;
use crate::error::{Error, RemoteError};
use crate::http::api_call;
use crate::id::ObjectId;

/// Remote Application resource, the tenant context Posts live under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RemoteError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl AppClient {
    /// Refreshes `self.application` from `GET {origin}/{app_id}/`.
    ///
    /// The decoded body replaces the stored Application before the
    /// embedded `errors` array is inspected, so on an application-level
    /// failure the stored value already reflects the response.
    ///
    /// # Errors
    /// Transport failures propagate as [`Error::HttpMiddleware`]; a 5xx
    /// status or a non-empty embedded `errors` array becomes
    /// [`Error::Remote`]; a body that is not Application JSON becomes
    /// [`Error::Serialization`].
    pub async fn fetch_application(&mut self) -> Result<(), Error> {
        let url = format!("{}/{}/", self.application_origin, self.application_id);
        let (status, body) = api_call(&self.http, Method::GET, &url, None).await?;

        if status >= 500 {
            return Err(RemoteError::status("Application: Status code error", status).into());
        }

        self.application = serde_json::from_str(&body)?;
        if self.application.id.is_none() {
            // Responses may omit _id; the token-resolved identity stands.
            self.application.id = Some(self.application_id.clone());
        }

        if let Some(first) = self.application.errors.first() {
            return Err(first.clone().into());
        }
        Ok(())
    }

    /// Pushes `self.application` to the service via
    /// `POST {origin}/{app_id}/`.
    ///
    /// The response is decoded into a scratch value and only inspected
    /// for embedded errors; unlike
    /// [`fetch_application`](AppClient::fetch_application) the stored
    /// Application is never touched.
    ///
    /// # Errors
    /// Same taxonomy as [`fetch_application`](AppClient::fetch_application).
    pub async fn update_application(&self) -> Result<(), Error> {
        let payload = serde_json::to_string(&self.application)?;
        let url = format!("{}/{}/", self.application_origin, self.application_id);
        let (status, body) = api_call(&self.http, Method::POST, &url, Some(payload)).await?;

        if status >= 500 {
            return Err(RemoteError::status("Application: Status code error", status).into());
        }

        let decoded: Application = serde_json::from_str(&body)?;
        if let Some(first) = decoded.errors.first() {
            return Err(first.clone().into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_renamed_id_and_missing_optionals() {
        let app: Application =
            serde_json::from_str(r#"{"_id":"5b2c9f1e4a8d3c0012ab34cd"}"#).unwrap();
        assert_eq!(app.id.unwrap().as_hex(), "5b2c9f1e4a8d3c0012ab34cd");
        assert!(app.errors.is_empty());
        assert_eq!(app.status_code, None);
    }

    #[test]
    fn serializes_without_empty_fields() {
        let app = Application {
            id: Some(ObjectId::parse("5b2c9f1e4a8d3c0012ab34cd").unwrap()),
            ..Application::default()
        };
        let json = serde_json::to_string(&app).unwrap();
        assert_eq!(json, r#"{"_id":"5b2c9f1e4a8d3c0012ab34cd"}"#);
    }

    #[test]
    fn embedded_errors_decode() {
        let app: Application = serde_json::from_str(
            r#"{"errors":[{"message":"forbidden","status_code":403}],"status_code":403}"#,
        )
        .unwrap();
        assert_eq!(app.errors[0].message, "forbidden");
        assert_eq!(app.errors[0].status_code, Some(403));
        assert_eq!(app.status_code, Some(403));
    }
}
