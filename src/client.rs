//! The `Iamport` facade.
//!
//! One entry object holding the credentials and exposing every gateway
//! operation as a method. Parameters are validated here, before any token is
//! requested or network call is made; the per-endpoint modules stay thin.

use chrono::{DateTime, Months, Utc};
use reqwest::Client;

use crate::auth::Authenticator;
use crate::certification;
use crate::customer;
use crate::errors::{IamportError, Result};
use crate::escrow;
use crate::payment;
use crate::subscribe;
use crate::types::{
    AgainRequest, CancelRequest, Certification, CustomerBillingKey, EscrowLogis,
    EscrowLogisRequest, InsertBillingKeyRequest, OnetimeRequest, Payment, PaymentBalance,
    PaymentPage, PaymentStatus, Prepare, PrepareRequest, Schedule, SchedulePage, ScheduleRequest,
    ScheduleStatus, Sorting, UnscheduleRequest,
};

/// Production base URL of the gateway.
pub const DEFAULT_URL: &str = "https://api.iamport.kr";

const ERR_MUST_EXIST_IMP_UID: &str = "imp_uid must exist";
const ERR_MUST_EXIST_MERCHANT_UID: &str = "merchant_uid must exist";
const ERR_MUST_EXIST_IMP_UID_OR_MERCHANT_UID: &str = "imp_uid or merchant_uid must exist";
const ERR_MUST_EXIST_CUSTOMER_UID: &str = "customer_uid must exist";
const ERR_INVALID_PAGE: &str = "page must be 0 or more";
const ERR_INVALID_LIMIT: &str = "limit must be 0 or more";
const ERR_INVALID_AMOUNT: &str = "amount must be 0 or more";
const ERR_INVALID_FROM: &str = "'from' cannot be later than 'to'";
const ERR_INVALID_TO: &str = "'to' cannot be more than 3 months after 'from'";
const ERR_EMPTY_SCHEDULES: &str = "at least one schedule entry must exist";

/// Client for the I'mport payment gateway.
///
/// Construction exchanges the REST API key and secret for a bearer token, so
/// it fails fast on bad credentials. The token is cached and refreshed
/// transparently by the owned [`Authenticator`]; see that type for the
/// expiry and concurrency contract.
pub struct Iamport {
    auth: Authenticator,
}

impl Iamport {
    /// Creates a client with a default HTTP client.
    ///
    /// Use [`DEFAULT_URL`] as `api_url` for production.
    pub async fn new(
        api_url: impl Into<String>,
        rest_api_key: impl Into<String>,
        rest_api_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_client(api_url, Client::new(), rest_api_key, rest_api_secret).await
    }

    /// Creates a client with a caller-supplied `reqwest::Client`, for
    /// timeouts, proxies or connection pooling settings.
    pub async fn with_client(
        api_url: impl Into<String>,
        client: Client,
        rest_api_key: impl Into<String>,
        rest_api_secret: impl Into<String>,
    ) -> Result<Self> {
        let auth = Authenticator::new(api_url, client, rest_api_key, rest_api_secret).await?;

        Ok(Self { auth })
    }

    /// The underlying authenticator, for callers that drive the endpoint
    /// modules directly.
    pub fn auth(&self) -> &Authenticator {
        &self.auth
    }

    /// Looks up a payment by gateway transaction id.
    pub async fn payment(&self, imp_uid: &str) -> Result<Payment> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        payment::by_imp_uid(&self.auth, imp_uid).await
    }

    /// Looks up several payments by gateway transaction ids.
    pub async fn payments(&self, imp_uids: &[String]) -> Result<Vec<Payment>> {
        if imp_uids.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        payment::by_imp_uids(&self.auth, imp_uids).await
    }

    /// Finds the first payment for a merchant order id.
    pub async fn payment_by_merchant_uid(
        &self,
        merchant_uid: &str,
        status: Option<PaymentStatus>,
        sorting: Option<Sorting>,
    ) -> Result<Payment> {
        if merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        payment::by_merchant_uid(&self.auth, merchant_uid, status, sorting).await
    }

    /// Finds every payment for a merchant order id, paged.
    pub async fn payments_by_merchant_uid(
        &self,
        merchant_uid: &str,
        status: Option<PaymentStatus>,
        sorting: Option<Sorting>,
        page: i32,
    ) -> Result<PaymentPage> {
        if merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        if page < 0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_PAGE.to_string()));
        }

        payment::find_all_by_merchant_uid(&self.auth, merchant_uid, status, sorting, page).await
    }

    /// Lists payments by status within a time window.
    ///
    /// When both bounds are given, `from` must not be later than `to` and the
    /// window must not exceed 3 months; the gateway rejects wider ranges.
    pub async fn payments_by_status(
        &self,
        status: PaymentStatus,
        page: i32,
        limit: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        sorting: Option<Sorting>,
    ) -> Result<PaymentPage> {
        if page < 0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_PAGE.to_string()));
        }

        if limit < 0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_LIMIT.to_string()));
        }

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(IamportError::InvalidParam(ERR_INVALID_FROM.to_string()));
            }

            match from.checked_add_months(Months::new(3)) {
                Some(window_end) if window_end >= to => {}
                _ => return Err(IamportError::InvalidParam(ERR_INVALID_TO.to_string())),
            }
        }

        payment::by_status(
            &self.auth,
            status,
            page,
            limit,
            from.map(|t| t.timestamp()),
            to.map(|t| t.timestamp()),
            sorting,
        )
        .await
    }

    /// Per-method amount breakdown for a payment.
    pub async fn payment_balance(&self, imp_uid: &str) -> Result<PaymentBalance> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        payment::balance_by_imp_uid(&self.auth, imp_uid).await
    }

    /// Cancels a payment, fully or partially.
    pub async fn cancel_payment(&self, request: &CancelRequest) -> Result<Payment> {
        let has_imp_uid = request.imp_uid.as_deref().is_some_and(|u| !u.is_empty());
        let has_merchant_uid = request
            .merchant_uid
            .as_deref()
            .is_some_and(|u| !u.is_empty());
        if !has_imp_uid && !has_merchant_uid {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_IMP_UID_OR_MERCHANT_UID.to_string(),
            ));
        }

        if request.amount.is_some_and(|a| a < 0.0) {
            return Err(IamportError::InvalidParam(ERR_INVALID_AMOUNT.to_string()));
        }

        payment::cancel(&self.auth, request).await
    }

    /// Pre-registers the expected amount for a merchant order.
    pub async fn prepare_payment(&self, merchant_uid: &str, amount: f64) -> Result<Prepare> {
        if merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        if amount < 0.0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_AMOUNT.to_string()));
        }

        let request = PrepareRequest {
            merchant_uid: merchant_uid.to_string(),
            amount,
        };

        payment::prepare(&self.auth, &request).await
    }

    /// Reads back a pre-registered amount.
    pub async fn prepared_payment(&self, merchant_uid: &str) -> Result<Prepare> {
        if merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        payment::prepare_by_merchant_uid(&self.auth, merchant_uid).await
    }

    /// Pays with raw card details in one call.
    pub async fn onetime_payment(&self, request: &OnetimeRequest) -> Result<Payment> {
        if request.merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        if request.amount < 0.0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_AMOUNT.to_string()));
        }

        subscribe::onetime(&self.auth, request).await
    }

    /// Charges a stored billing key.
    pub async fn again_payment(&self, request: &AgainRequest) -> Result<Payment> {
        if request.customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        if request.merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        if request.amount < 0.0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_AMOUNT.to_string()));
        }

        subscribe::again(&self.auth, request).await
    }

    /// Registers future charges against a billing key.
    pub async fn schedule_payments(&self, request: &ScheduleRequest) -> Result<Vec<Schedule>> {
        if request.customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        if request.schedules.is_empty() {
            return Err(IamportError::InvalidParam(ERR_EMPTY_SCHEDULES.to_string()));
        }

        subscribe::schedule(&self.auth, request).await
    }

    /// Looks up a scheduled charge by merchant order id.
    pub async fn scheduled_payment(&self, merchant_uid: &str) -> Result<Schedule> {
        if merchant_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_MERCHANT_UID.to_string(),
            ));
        }

        subscribe::schedule_by_merchant_uid(&self.auth, merchant_uid).await
    }

    /// Revokes pending scheduled charges.
    pub async fn unschedule_payments(&self, request: &UnscheduleRequest) -> Result<Vec<Schedule>> {
        if request.customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        subscribe::unschedule(&self.auth, request).await
    }

    /// Looks up one billing key.
    pub async fn billing_key(&self, customer_uid: &str) -> Result<CustomerBillingKey> {
        if customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        customer::billing_key(&self.auth, customer_uid).await
    }

    /// Looks up several billing keys in one call.
    pub async fn billing_keys(&self, customer_uids: &[String]) -> Result<Vec<CustomerBillingKey>> {
        if customer_uids.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        customer::billing_keys(&self.auth, customer_uids).await
    }

    /// Stores a billing key for later charging.
    pub async fn insert_billing_key(
        &self,
        customer_uid: &str,
        request: &InsertBillingKeyRequest,
    ) -> Result<CustomerBillingKey> {
        if customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        customer::insert_billing_key(&self.auth, customer_uid, request).await
    }

    /// Deletes a billing key.
    pub async fn delete_billing_key(
        &self,
        customer_uid: &str,
        reason: Option<&str>,
        requester: Option<&str>,
    ) -> Result<CustomerBillingKey> {
        if customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        customer::delete_billing_key(&self.auth, customer_uid, reason, requester).await
    }

    /// Lists payments made with a billing key.
    pub async fn customer_payments(&self, customer_uid: &str, page: i32) -> Result<PaymentPage> {
        if customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        if page < 0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_PAGE.to_string()));
        }

        customer::payments(&self.auth, customer_uid, page).await
    }

    /// Lists scheduled charges for a billing key.
    pub async fn customer_schedules(
        &self,
        customer_uid: &str,
        page: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        schedule_status: Option<ScheduleStatus>,
    ) -> Result<SchedulePage> {
        if customer_uid.is_empty() {
            return Err(IamportError::InvalidParam(
                ERR_MUST_EXIST_CUSTOMER_UID.to_string(),
            ));
        }

        if page < 0 {
            return Err(IamportError::InvalidParam(ERR_INVALID_PAGE.to_string()));
        }

        customer::schedules(
            &self.auth,
            customer_uid,
            page,
            from.map(|t| t.timestamp()),
            to.map(|t| t.timestamp()),
            schedule_status,
        )
        .await
    }

    /// Looks up an identity certification.
    pub async fn certification(&self, imp_uid: &str) -> Result<Certification> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        certification::by_imp_uid(&self.auth, imp_uid).await
    }

    /// Deletes a certification record.
    pub async fn delete_certification(&self, imp_uid: &str) -> Result<Certification> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        certification::delete(&self.auth, imp_uid).await
    }

    /// Registers escrow shipment details.
    pub async fn register_escrow_logis(
        &self,
        imp_uid: &str,
        request: &EscrowLogisRequest,
    ) -> Result<EscrowLogis> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        escrow::register_logis(&self.auth, imp_uid, request).await
    }

    /// Corrects escrow shipment details.
    pub async fn update_escrow_logis(
        &self,
        imp_uid: &str,
        request: &EscrowLogisRequest,
    ) -> Result<EscrowLogis> {
        if imp_uid.is_empty() {
            return Err(IamportError::InvalidParam(ERR_MUST_EXIST_IMP_UID.to_string()));
        }

        escrow::update_logis(&self.auth, imp_uid, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> Iamport {
        Mock::given(method("POST"))
            .and(path("/users/getToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "message": null,
                "response": {
                    "access_token": "tok-A",
                    "expired_at": Utc::now().timestamp() + 3600
                }
            })))
            .mount(server)
            .await;

        Iamport::new(server.uri(), "k1", "s1").await.unwrap()
    }

    fn assert_invalid_param(result: Result<impl std::fmt::Debug>, message: &str) {
        match result {
            Err(IamportError::InvalidParam(m)) => assert_eq!(m, message),
            other => panic!("expected InvalidParam({message}), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_uids_rejected_before_any_call() {
        let server = MockServer::start().await;
        let client = mock_client(&server).await;

        assert_invalid_param(client.payment("").await, ERR_MUST_EXIST_IMP_UID);
        assert_invalid_param(client.payments(&[]).await, ERR_MUST_EXIST_IMP_UID);
        assert_invalid_param(
            client.payment_by_merchant_uid("", None, None).await,
            ERR_MUST_EXIST_MERCHANT_UID,
        );
        assert_invalid_param(client.billing_key("").await, ERR_MUST_EXIST_CUSTOMER_UID);
        assert_invalid_param(
            client.scheduled_payment("").await,
            ERR_MUST_EXIST_MERCHANT_UID,
        );
        assert_invalid_param(client.certification("").await, ERR_MUST_EXIST_IMP_UID);

        // Only the construction-time token call reached the server
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_requires_an_identifier() {
        let server = MockServer::start().await;
        let client = mock_client(&server).await;

        let request = CancelRequest::default();
        assert_invalid_param(
            client.cancel_payment(&request).await,
            ERR_MUST_EXIST_IMP_UID_OR_MERCHANT_UID,
        );

        let request = CancelRequest {
            imp_uid: Some("imp_1".to_string()),
            amount: Some(-1.0),
            ..Default::default()
        };
        assert_invalid_param(client.cancel_payment(&request).await, ERR_INVALID_AMOUNT);
    }

    #[tokio::test]
    async fn test_status_window_validation() {
        let server = MockServer::start().await;
        let client = mock_client(&server).await;

        let now = Utc::now();

        let result = client
            .payments_by_status(PaymentStatus::Paid, 0, 0, Some(now), Some(now - Duration::days(1)), None)
            .await;
        assert_invalid_param(result, ERR_INVALID_FROM);

        let result = client
            .payments_by_status(
                PaymentStatus::Paid,
                0,
                0,
                Some(now),
                Some(now + Duration::days(120)),
                None,
            )
            .await;
        assert_invalid_param(result, ERR_INVALID_TO);

        let result = client
            .payments_by_status(PaymentStatus::Paid, -1, 0, None, None, None)
            .await;
        assert_invalid_param(result, ERR_INVALID_PAGE);
    }

    #[tokio::test]
    async fn test_schedule_requires_entries() {
        let server = MockServer::start().await;
        let client = mock_client(&server).await;

        let request = ScheduleRequest {
            customer_uid: "cust-1".to_string(),
            schedules: vec![],
            ..Default::default()
        };

        assert_invalid_param(client.schedule_payments(&request).await, ERR_EMPTY_SCHEDULES);
    }
}
