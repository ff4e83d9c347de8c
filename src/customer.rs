//! Billing-key management endpoints.
//!
//! Billing keys are stored against a merchant-chosen `customer_uid` and later
//! charged through the subscribe payment endpoints.

use crate::auth::Authenticator;
use crate::errors::Result;
use crate::transport;
use crate::types::{
    CustomerBillingKey, InsertBillingKeyRequest, PaymentPage, SchedulePage, ScheduleStatus,
};

const URL_SUBSCRIBE: &str = "/subscribe";
const URL_CUSTOMERS: &str = "/customers";
const URL_PAYMENTS: &str = "/payments";
const URL_SCHEDULES: &str = "/schedules";

const PARAM_CUSTOMER_UIDS: &str = "customer_uid[]";
const PARAM_REASON: &str = "reason";
const PARAM_REQUESTER: &str = "requester";
const PARAM_PAGE: &str = "page";
const PARAM_FROM: &str = "from";
const PARAM_TO: &str = "to";
const PARAM_SCHEDULE_STATUS: &str = "schedule-status";

/// Looks up several billing keys in one call.
///
/// `GET /subscribe/customers?customer_uid[]=...`
pub async fn billing_keys(
    auth: &Authenticator,
    customer_uids: &[String],
) -> Result<Vec<CustomerBillingKey>> {
    let token = auth.token().await?;
    let url = format!("{}{}{}", auth.api_url(), URL_SUBSCRIBE, URL_CUSTOMERS);

    let query: Vec<(&str, String)> = customer_uids
        .iter()
        .map(|uid| (PARAM_CUSTOMER_UIDS, uid.clone()))
        .collect();

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Looks up one billing key.
///
/// `GET /subscribe/customers/{customer_uid}`
pub async fn billing_key(auth: &Authenticator, customer_uid: &str) -> Result<CustomerBillingKey> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_CUSTOMERS,
        customer_uid
    );

    transport::get(auth.http_client(), &token, &url, &[]).await
}

/// Stores a billing key for later charging.
///
/// `POST /subscribe/customers/{customer_uid}`
pub async fn insert_billing_key(
    auth: &Authenticator,
    customer_uid: &str,
    request: &InsertBillingKeyRequest,
) -> Result<CustomerBillingKey> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_CUSTOMERS,
        customer_uid
    );

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Deletes a billing key.
///
/// `DELETE /subscribe/customers/{customer_uid}`
pub async fn delete_billing_key(
    auth: &Authenticator,
    customer_uid: &str,
    reason: Option<&str>,
    requester: Option<&str>,
) -> Result<CustomerBillingKey> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_CUSTOMERS,
        customer_uid
    );

    let mut query = Vec::new();
    if let Some(reason) = reason {
        query.push((PARAM_REASON, reason.to_string()));
    }
    if let Some(requester) = requester {
        query.push((PARAM_REQUESTER, requester.to_string()));
    }

    transport::delete(auth.http_client(), &token, &url, &query).await
}

/// Lists payments made with a billing key, paged.
///
/// `GET /subscribe/customers/{customer_uid}/payments`
pub async fn payments(
    auth: &Authenticator,
    customer_uid: &str,
    page: i32,
) -> Result<PaymentPage> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_CUSTOMERS,
        customer_uid,
        URL_PAYMENTS
    );

    let mut query = Vec::new();
    if page > 0 {
        query.push((PARAM_PAGE, page.to_string()));
    }

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Lists scheduled charges for a billing key, paged.
///
/// `from` and `to` are Unix epoch seconds bounding `schedule_at`.
///
/// `GET /subscribe/customers/{customer_uid}/schedules`
pub async fn schedules(
    auth: &Authenticator,
    customer_uid: &str,
    page: i32,
    from: Option<i64>,
    to: Option<i64>,
    schedule_status: Option<ScheduleStatus>,
) -> Result<SchedulePage> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}{}",
        auth.api_url(),
        URL_SUBSCRIBE,
        URL_CUSTOMERS,
        customer_uid,
        URL_SCHEDULES
    );

    let mut query = Vec::new();
    if page > 0 {
        query.push((PARAM_PAGE, page.to_string()));
    }
    if let Some(from) = from {
        query.push((PARAM_FROM, from.to_string()));
    }
    if let Some(to) = to {
        query.push((PARAM_TO, to.to_string()));
    }
    if let Some(status) = schedule_status {
        query.push((PARAM_SCHEDULE_STATUS, status.as_str().to_string()));
    }

    transport::get(auth.http_client(), &token, &url, &query).await
}
