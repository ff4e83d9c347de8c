//! Billing-key (non-authenticated) payment endpoints.
//!
//! These calls charge raw card details or a stored billing key without the
//! payment window. Onetime and again are form-encoded, schedule and
//! unschedule take JSON bodies, matching the gateway's expectations.

use crate::auth::Authenticator;
use crate::errors::Result;
use crate::transport;
use crate::types::{
    AgainRequest, OnetimeRequest, Payment, Schedule, ScheduleRequest, UnscheduleRequest,
};

const URL_SUBSCRIBE: &str = "/subscribe";
const URL_PAYMENTS: &str = "/payments";
const URL_ONETIME: &str = "/onetime";
const URL_AGAIN: &str = "/again";
const URL_SCHEDULE: &str = "/schedule";
const URL_UNSCHEDULE: &str = "/unschedule";

/// Pays with raw card details in one call, optionally storing a billing key.
///
/// `POST /subscribe/payments/onetime`
pub async fn onetime(auth: &Authenticator, request: &OnetimeRequest) -> Result<Payment> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_PAYMENTS,
        URL_ONETIME
    );

    transport::post_form(auth.http_client(), Some(&token), &url, request).await
}

/// Charges a previously stored billing key.
///
/// `POST /subscribe/payments/again`
pub async fn again(auth: &Authenticator, request: &AgainRequest) -> Result<Payment> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_PAYMENTS,
        URL_AGAIN
    );

    transport::post_form(auth.http_client(), Some(&token), &url, request).await
}

/// Registers future charges against a billing key.
///
/// `POST /subscribe/payments/schedule`
pub async fn schedule(auth: &Authenticator, request: &ScheduleRequest) -> Result<Vec<Schedule>> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_PAYMENTS,
        URL_SCHEDULE
    );

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Revokes pending scheduled charges.
///
/// `POST /subscribe/payments/unschedule`
pub async fn unschedule(auth: &Authenticator, request: &UnscheduleRequest) -> Result<Vec<Schedule>> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_PAYMENTS,
        URL_UNSCHEDULE
    );

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Looks up a scheduled charge by its merchant order id.
///
/// `GET /subscribe/payments/schedule/{merchant_uid}`
pub async fn schedule_by_merchant_uid(
    auth: &Authenticator,
    merchant_uid: &str,
) -> Result<Schedule> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}{}/{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_PAYMENTS,
        URL_SCHEDULE,
        merchant_uid
    );

    transport::get(auth.http_client(), &token, &url, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use wiremock::matchers::{body_string_contains, header, method, path};
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

    fn paid_body(merchant_uid: &str) -> serde_json::Value {
        serde_json::json!({
            "code": 0,
            "message": null,
            "response": {
                "imp_uid": "imp_1",
                "merchant_uid": merchant_uid,
                "amount": 1000.0,
                "status": "paid"
            }
        })
    }

    #[tokio::test]
    async fn test_onetime_sends_form_encoded_body() {
        let server = MockServer::start().await;
        let auth = mock_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/subscribe/payments/onetime"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("merchant_uid=order-1"))
            .and(body_string_contains("card_number=1234-1234-1234-1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(paid_body("order-1")))
            .expect(1)
            .mount(&server)
            .await;

        let request = OnetimeRequest {
            merchant_uid: "order-1".to_string(),
            amount: 1000.0,
            card_number: "1234-1234-1234-1234".to_string(),
            expiry: "2027-12".to_string(),
            birth: "900101".to_string(),
            ..Default::default()
        };

        let payment = onetime(&auth, &request).await.unwrap();
        assert_eq!(payment.status, "paid");
    }

    #[tokio::test]
    async fn test_again_sends_form_encoded_body() {
        let server = MockServer::start().await;
        let auth = mock_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/subscribe/payments/again"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("customer_uid=cust-1"))
            .and(body_string_contains("merchant_uid=order-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(paid_body("order-2")))
            .expect(1)
            .mount(&server)
            .await;

        let request = AgainRequest {
            customer_uid: "cust-1".to_string(),
            merchant_uid: "order-2".to_string(),
            amount: 1000.0,
            name: "monthly plan".to_string(),
            ..Default::default()
        };

        let payment = again(&auth, &request).await.unwrap();
        assert_eq!(payment.merchant_uid, "order-2");
    }

    #[tokio::test]
    async fn test_schedule_lookup_by_merchant_uid() {
        let server = MockServer::start().await;
        let auth = mock_auth(&server).await;

        Mock::given(method("GET"))
            .and(path("/subscribe/payments/schedule/order-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "message": null,
                "response": {
                    "customer_uid": "cust-1",
                    "merchant_uid": "order-9",
                    "amount": 5000.0,
                    "schedule_at": chrono::Utc::now().timestamp() + 86400,
                    "schedule_status": "scheduled"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let schedule = schedule_by_merchant_uid(&auth, "order-9").await.unwrap();
        assert_eq!(schedule.customer_uid, "cust-1");
        assert_eq!(schedule.schedule_status, "scheduled");
    }
}
