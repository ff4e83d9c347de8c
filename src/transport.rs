//! Shared HTTP plumbing for the gateway endpoints.
//!
//! Every endpoint caller goes through these helpers: they attach the bearer
//! token, map coarse HTTP status codes to errors, and decode the uniform
//! response envelope. The gateway expects the raw token in the `Authorization`
//! header, without a `Bearer ` prefix.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{IamportError, Result};
use crate::types::Envelope;

pub(crate) const HEADER_AUTHORIZATION: &str = "Authorization";

/// GET with an optional query string.
pub(crate) async fn get<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let mut request = client.get(url).header(HEADER_AUTHORIZATION, token);

    if !query.is_empty() {
        request = request.query(query);
    }

    execute(request).await
}

/// DELETE with an optional query string.
pub(crate) async fn delete<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let mut request = client.delete(url).header(HEADER_AUTHORIZATION, token);

    if !query.is_empty() {
        request = request.query(query);
    }

    execute(request).await
}

/// POST with a form-encoded body.
///
/// Token issuance itself goes through here with `token: None`, since no
/// token exists yet at that point.
pub(crate) async fn post_form<T: DeserializeOwned, B: Serialize + ?Sized>(
    client: &Client,
    token: Option<&str>,
    url: &str,
    body: &B,
) -> Result<T> {
    let mut request = client.post(url).form(body);

    if let Some(token) = token {
        request = request.header(HEADER_AUTHORIZATION, token);
    }

    execute(request).await
}

/// POST with a JSON body.
pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    client: &Client,
    token: &str,
    url: &str,
    body: &B,
) -> Result<T> {
    execute(client.post(url).header(HEADER_AUTHORIZATION, token).json(body)).await
}

/// PUT with a JSON body.
pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    client: &Client,
    token: &str,
    url: &str,
    body: &B,
) -> Result<T> {
    execute(client.put(url).header(HEADER_AUTHORIZATION, token).json(body)).await
}

/// Sends the request, maps the HTTP status, and unwraps the envelope.
async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let response = check_status(response)?;

    let body = response.bytes().await?;
    let envelope: Envelope<T> = serde_json::from_slice(&body)?;

    envelope.into_result()
}

/// Maps non-200 statuses to the coarse transport error categories.
///
/// The gateway embeds application-level failures inside a 200 body, so
/// anything other than 200 is a transport-level problem.
fn check_status(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = %response.url(), "gateway returned 401");
            Err(IamportError::Unauthorized)
        }
        StatusCode::NOT_FOUND => Err(IamportError::NotFound),
        status => Err(IamportError::UnexpectedStatus(status.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Payment;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_sends_raw_token_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/payments/imp_1"))
            .and(header(HEADER_AUTHORIZATION, "tok-A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "message": null,
                "response": {"imp_uid": "imp_1", "amount": 100.0, "status": "paid"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let url = format!("{}/payments/imp_1", server.uri());
        let payment: Payment = get(&client, "tok-A", &url, &[]).await.unwrap();

        assert_eq!(payment.imp_uid, "imp_1");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/unauthorized"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Client::new();

        let err = get::<Payment>(&client, "t", &format!("{}/unauthorized", server.uri()), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, IamportError::Unauthorized));

        let err = get::<Payment>(&client, "t", &format!("{}/missing", server.uri()), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, IamportError::NotFound));

        let err = get::<Payment>(&client, "t", &format!("{}/broken", server.uri()), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, IamportError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = Client::new();
        let err = get::<Payment>(&client, "t", &format!("{}/garbled", server.uri()), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, IamportError::Json(_)));
    }
}
