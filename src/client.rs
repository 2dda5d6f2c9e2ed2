//! Resolved service context.
//!
//! `AppClient` is the execution context every accessor operation runs
//! under: the authenticated HTTP client, the application origin, and the
//! Application identity resolved from the token. Hosts hold the handle
//! and pass it around rather than going through process-wide state, so
//! tests and multi-tenant processes can run several side by side. Post
//! operations cannot run before bootstrap because they only exist on the
//! handle.

use reqwest_middleware::ClientWithMiddleware;
use tracing::info;

use crate::auth;
use crate::config::Config;
use crate::error::Error;
use crate::http;
use crate::id::ObjectId;
use crate::model::Application;

/// Permission scope requested during the client-credentials exchange.
pub const APPLICATION_SCOPE: &str = "danmaku:all";

/// Authenticated client scoped to one resolved Application.
#[derive(Debug)]
pub struct AppClient {
    pub(crate) http: ClientWithMiddleware,
    pub(crate) application_origin: String,
    pub(crate) application_id: ObjectId,
    /// Server-side view of the Application, hydrated at bootstrap and
    /// refreshed in place by
    /// [`fetch_application`](AppClient::fetch_application).
    pub application: Application,
}

impl AppClient {
    /// Bootstraps the client: exchanges client credentials for the
    /// `danmaku:all` scope, resolves the Application identity from the
    /// token's `application_id` claim, and hydrates the Application from
    /// the remote service.
    ///
    /// Every later operation depends on the returned handle, so a failure
    /// here (token exchange, hydration transport error, or an
    /// application-level error in the hydration response) leaves the host
    /// without a usable client; whether that aborts the process is the
    /// host's call.
    ///
    /// # Errors
    /// Any failure obtaining the token ([`Error::TokenExchange`]), an
    /// `application_id` claim that is not a valid identifier
    /// ([`Error::InvalidId`]), or any error from the hydration call.
    pub async fn start(config: &Config) -> Result<Self, Error> {
        let (client, claims) =
            auth::obtain_credentialed_client(config, &[APPLICATION_SCOPE]).await?;
        let application_id = ObjectId::parse(claims.application_id)?;

        let mut this = Self::with_client(client, &config.application_origin, application_id);
        this.fetch_application().await?;
        info!(application_id = %this.application_id, "application resolved");
        Ok(this)
    }

    /// Builds a client around an already-authenticated reqwest client.
    ///
    /// This is the seam [`start`](AppClient::start) goes through after the
    /// token exchange; it also lets hosts and tests supply their own
    /// authentication. The supplied client should carry the request
    /// timeout it wants enforced.
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        application_origin: &str,
        application_id: ObjectId,
    ) -> Self {
        Self {
            http: http::wrap(client),
            application_origin: application_origin.trim_end_matches('/').to_string(),
            application_id: application_id.clone(),
            application: Application {
                id: Some(application_id),
                ..Application::default()
            },
        }
    }

    /// Identity of the Application this client acts as.
    #[must_use]
    pub const fn application_id(&self) -> &ObjectId {
        &self.application_id
    }

    #[must_use]
    pub fn application_origin(&self) -> &str {
        &self.application_origin
    }
}
