//! Identity certification endpoints.

use crate::auth::Authenticator;
use crate::errors::Result;
use crate::transport;
use crate::types::Certification;

const URL_CERTIFICATIONS: &str = "/certifications";

/// Looks up a completed identity certification.
///
/// `GET /certifications/{imp_uid}`
pub async fn by_imp_uid(auth: &Authenticator, imp_uid: &str) -> Result<Certification> {
    let token = auth.token().await?;
    let url = format!("{}{}/{}", auth.api_url(), URL_CERTIFICATIONS, imp_uid);

    transport::get(auth.http_client(), &token, &url, &[]).await
}

/// Deletes a certification record ahead of its retention deadline.
///
/// `DELETE /certifications/{imp_uid}`
pub async fn delete(auth: &Authenticator, imp_uid: &str) -> Result<Certification> {
    let token = auth.token().await?;
    let url = format!("{}{}/{}", auth.api_url(), URL_CERTIFICATIONS, imp_uid);

    transport::delete(auth.http_client(), &token, &url, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_auth(server: &MockServer) -> Authenticator {
        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "message": null,
                "response": {
                    "access_token": "tok-A",
                    "expired_at": chrono::Utc::now().timestamp() + 3600
                }
            })))
            .mount(server)
            .await;

        Authenticator::new(server.uri(), Client::new(), "k1", "s1")
            .await
            .unwrap()
    }

    fn certification_body() -> serde_json::Value {
        serde_json::json!({
            "code": 0,
            "message": null,
            "response": {
                "imp_uid": "imp_cert_1",
                "name": "홍길동",
                "gender": "male",
                "birthday": "1990-01-01",
                "certified": true,
                "certified_at": 1700000000
            }
        })
    }

    #[tokio::test]
    async fn test_lookup_by_imp_uid() {
        let server = MockServer::start().await;
        let auth = mock_auth(&server).await;

        Mock::given(method("GET"))
            .and(path("/certifications/imp_cert_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(certification_body()))
            .expect(1)
            .mount(&server)
            .await;

        let cert = by_imp_uid(&auth, "imp_cert_1").await.unwrap();
        assert_eq!(cert.name.as_deref(), Some("홍길동"));
        assert!(cert.certified);
    }

    #[tokio::test]
    async fn test_delete_uses_delete_method() {
        let server = MockServer::start().await;
        let auth = mock_auth(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/certifications/imp_cert_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(certification_body()))
            .expect(1)
            .mount(&server)
            .await;

        let cert = delete(&auth, "imp_cert_1").await.unwrap();
        assert_eq!(cert.imp_uid, "imp_cert_1");
    }
}
