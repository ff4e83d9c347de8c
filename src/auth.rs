//! Token-caching authentication against the gateway.
//!
//! The gateway hands out short-lived bearer tokens in exchange for the REST
//! API key and secret. [`Authenticator`] owns the credentials and exactly one
//! cached token, and transparently refreshes it when absent or expired. The
//! whole check-expiry/refresh/read sequence runs under one async mutex, so
//! concurrent callers that observe an expired token collapse into a single
//! issuance call and all wait on its result.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::Mutex;
use url::Url;

use crate::errors::{IamportError, Result};
use crate::transport;
use crate::types::TokenPayload;

const URL_GET_TOKEN: &str = "/users/getToken";

const IMP_KEY: &str = "imp_key";
const IMP_SECRET: &str = "imp_secret";

const ERR_API_URL_MISSING: &str = "REST API URL is missing";
const ERR_API_KEY_MISSING: &str = "REST API Key is missing";
const ERR_API_SECRET_MISSING: &str = "REST API Secret is missing";

/// A bearer token together with its absolute expiry instant.
///
/// Replaced wholesale on every refresh, never partially updated.
#[derive(Debug)]
struct CachedToken {
    token: String,
    expired_at: DateTime<Utc>,
}

impl CachedToken {
    /// A token expiring exactly now counts as expired.
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expired_at
    }
}

/// Holds the API credentials and the cached bearer token.
///
/// Construction performs an eager first fetch, so a bad key or secret fails
/// fast instead of on the first real call. The token is refreshed reactively:
/// the call that finds it expired pays the latency of one issuance round trip
/// before its own request proceeds. There are no background timers and no
/// early-refresh margin.
#[derive(Debug)]
pub struct Authenticator {
    api_url: String,
    client: Client,
    rest_api_key: String,
    rest_api_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl Authenticator {
    /// Creates an authenticator and fetches the first token.
    ///
    /// Fails with [`IamportError::Config`] if `api_url`, `rest_api_key` or
    /// `rest_api_secret` is empty (checked in that order), with
    /// [`IamportError::UrlParse`] if `api_url` is not a valid absolute URL,
    /// or with the issuance error if the eager fetch fails. The authenticator
    /// is never left half-initialized.
    pub async fn new(
        api_url: impl Into<String>,
        client: Client,
        rest_api_key: impl Into<String>,
        rest_api_secret: impl Into<String>,
    ) -> Result<Self> {
        let api_url = api_url.into();
        let rest_api_key = rest_api_key.into();
        let rest_api_secret = rest_api_secret.into();

        if api_url.is_empty() {
            return Err(IamportError::Config(ERR_API_URL_MISSING.to_string()));
        }

        Url::parse(&api_url)?;

        if rest_api_key.is_empty() {
            return Err(IamportError::Config(ERR_API_KEY_MISSING.to_string()));
        }

        if rest_api_secret.is_empty() {
            return Err(IamportError::Config(ERR_API_SECRET_MISSING.to_string()));
        }

        let auth = Self {
            api_url,
            client,
            rest_api_key,
            rest_api_secret,
            cached: Mutex::new(None),
        };

        auth.refresh().await?;

        Ok(auth)
    }

    /// Returns a valid bearer token, refreshing first when the cache is
    /// empty or the cached expiry is not strictly in the future.
    ///
    /// A failed refresh propagates as an error; callers never receive an
    /// empty token. The lock is held across the refresh, so under concurrent
    /// use at most one issuance call is in flight at a time.
    pub async fn token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(current) = cached.as_ref() {
            if current.is_valid_at(Utc::now()) {
                return Ok(current.token.clone());
            }
        }

        let fresh = self.request_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);

        Ok(token)
    }

    /// Forces a token refresh regardless of the cached expiry.
    ///
    /// On failure the previously cached token, if any, is left in place.
    pub async fn refresh(&self) -> Result<()> {
        let mut cached = self.cached.lock().await;
        *cached = Some(self.request_token().await?);

        Ok(())
    }

    /// One synchronous issuance round trip. `POST /users/getToken`.
    async fn request_token(&self) -> Result<CachedToken> {
        let url = format!("{}{}", self.api_url, URL_GET_TOKEN);
        let form = [
            (IMP_KEY, self.rest_api_key.as_str()),
            (IMP_SECRET, self.rest_api_secret.as_str()),
        ];

        let payload: TokenPayload = transport::post_form(&self.client, None, &url, &form).await?;

        let expired_at = DateTime::from_timestamp(payload.expired_at, 0).ok_or_else(|| {
            IamportError::Decode(format!(
                "expired_at {} is not a valid Unix timestamp",
                payload.expired_at
            ))
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%expired_at, "issued new access token");

        Ok(CachedToken {
            token: payload.access_token,
            expired_at,
        })
    }

    /// Base URL of the gateway, as supplied at construction.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The HTTP client shared by all endpoint callers.
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token_body(token: &str, expired_at: i64) -> serde_json::Value {
        serde_json::json!({
            "code": 0,
            "message": null,
            "response": {
                "access_token": token,
                "expired_at": expired_at,
                "now": Utc::now().timestamp()
            }
        })
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_in_order() {
        let client = Client::new();

        let err = Authenticator::new("", client.clone(), "key", "secret")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "configuration error: REST API URL is missing");

        let err = Authenticator::new("https://api.example.test", client.clone(), "", "secret")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "configuration error: REST API Key is missing");

        let err = Authenticator::new("https://api.example.test", client.clone(), "key", "")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: REST API Secret is missing"
        );

        // An empty URL wins even when every field is empty
        let err = Authenticator::new("", client, "", "").await.unwrap_err();
        assert_eq!(err.to_string(), "configuration error: REST API URL is missing");
    }

    #[tokio::test]
    async fn test_malformed_url_rejected_before_any_call() {
        let err = Authenticator::new("not a url", Client::new(), "k1", "s1")
            .await
            .unwrap_err();

        assert!(matches!(err, IamportError::UrlParse(_)));
    }

    #[tokio::test]
    async fn test_construction_fetches_eagerly() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .and(body_string_contains("imp_key=k1"))
            .and(body_string_contains("imp_secret=s1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("tok-A", Utc::now().timestamp() + 3600)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let auth = Authenticator::new(server.uri(), Client::new(), "k1", "s1")
            .await
            .unwrap();

        // Cached token served without another round trip
        assert_eq!(auth.token().await.unwrap(), "tok-A");
        assert_eq!(auth.token().await.unwrap(), "tok-A");
    }

    #[tokio::test]
    async fn test_construction_fails_on_gateway_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": -1,
                "message": "인증에 실패하였습니다",
                "response": null
            })))
            .mount(&server)
            .await;

        let err = Authenticator::new(server.uri(), Client::new(), "bad", "creds")
            .await
            .unwrap_err();

        assert!(matches!(err, IamportError::Gateway { code: -1, .. }));
    }

    #[tokio::test]
    async fn test_expired_token_triggers_refresh() {
        let server = MockServer::start().await;
        let now = Utc::now().timestamp();

        // First issuance hands out a token that is already expired; the
        // strict comparison treats expiry-at-now as expired too.
        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-A", now)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-B", now + 3600)))
            .mount(&server)
            .await;

        let auth = Authenticator::new(server.uri(), Client::new(), "k1", "s1")
            .await
            .unwrap();

        assert_eq!(auth.token().await.unwrap(), "tok-B");
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_propagates() {
        let server = MockServer::start().await;
        let now = Utc::now().timestamp();

        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-A", now - 10)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 1,
                "message": "token issuance disabled",
                "response": null
            })))
            .mount(&server)
            .await;

        let auth = Authenticator::new(server.uri(), Client::new(), "k1", "s1")
            .await
            .unwrap();

        // The cached token is expired, the refresh fails, and the error
        // surfaces instead of an empty token.
        let err = auth.token().await.unwrap_err();
        assert!(matches!(err, IamportError::Gateway { code: 1, .. }));
    }
}
