//! Client-credentials authentication.
//!
//! The service authenticates this process as an OAuth2 client (no end
//! user). The token response carries a custom `application_id` claim
//! naming the Application the credentials belong to; everything downstream
//! is scoped by that identity. The exchange happens once, at
//! [`AppClient::start`](crate::client::AppClient::start) time, and the
//! resulting bearer token is baked into the returned reqwest client.

use oauth2::{
    Client, ClientId, ClientSecret, EndpointNotSet, EndpointSet, ExtraTokenFields, Scope,
    StandardRevocableToken, StandardTokenResponse, TokenResponse, TokenUrl,
    basic::{
        BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
        BasicTokenType,
    },
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::http::REQUEST_TIMEOUT;

/// Custom claims the token endpoint returns alongside the standard fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identity of the Application these credentials act as
    /// (24-character hex).
    pub application_id: String,
}

impl ExtraTokenFields for TokenClaims {}

type ClaimsTokenResponse = StandardTokenResponse<TokenClaims, BasicTokenType>;

type OAuthClient<HasToken = EndpointSet> = Client<
    BasicErrorResponse,
    ClaimsTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    HasToken,
>;

/// Exchanges client credentials for the given scopes and returns a reqwest
/// client that sends the bearer token on every request, plus the token's
/// custom claims.
///
/// The returned client carries the 20-second request timeout every
/// accessor operation relies on.
///
/// # Errors
/// Fails with [`Error::MissingConfig`] when the token URL is malformed,
/// [`Error::TokenExchange`] when the exchange itself is rejected, and
/// [`Error::Http`] when a client cannot be built.
pub async fn obtain_credentialed_client(
    config: &Config,
    scopes: &[&str],
) -> Result<(reqwest::Client, TokenClaims), Error> {
    let token_url = TokenUrl::new(config.token_url.clone())
        .map_err(|e| Error::MissingConfig(format!("token url: {e}")))?;

    let oauth: OAuthClient = OAuthClient::<EndpointNotSet>::new(ClientId::new(
        config.client_id.clone(),
    ))
    .set_client_secret(ClientSecret::new(config.client_secret.clone()))
    .set_token_uri(token_url);

    // The exchange uses its own unauthenticated client; redirects stay
    // disabled so the token endpoint cannot bounce credentials elsewhere.
    let exchange_http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let mut exchange = oauth.exchange_client_credentials();
    for scope in scopes {
        exchange = exchange.add_scope(Scope::new((*scope).to_string()));
    }

    let token = exchange
        .request_async(&exchange_http)
        .await
        .map_err(|e| Error::TokenExchange(e.to_string()))?;

    let claims = token.extra_fields().clone();
    debug!(application_id = %claims.application_id, "client credentials obtained");

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.access_token().secret()))
        .map_err(|e| Error::TokenExchange(format!("token is not a valid header value: {e}")))?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer);

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok((client, claims))
}
