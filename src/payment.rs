//! Payment lookup, cancellation and pre-registration endpoints.
//!
//! Each caller obtains a token from the [`Authenticator`], builds the request
//! URL, and decodes the response envelope into its typed payload.

use crate::auth::Authenticator;
use crate::errors::Result;
use crate::transport;
use crate::types::{
    CancelRequest, Payment, PaymentBalance, PaymentPage, PaymentStatus, Prepare, PrepareRequest,
    Sorting,
};

const URL_PAYMENTS: &str = "/payments";
const URL_FIND: &str = "/find";
const URL_FIND_ALL: &str = "/findAll";
const URL_BALANCE: &str = "/balance";
const URL_STATUS: &str = "/status";
const URL_CANCEL: &str = "/cancel";
const URL_PREPARE: &str = "/prepare";

const PARAM_IMP_UIDS: &str = "imp_uid[]";
const PARAM_SORTING: &str = "sorting";
const PARAM_PAGE: &str = "page";
const PARAM_LIMIT: &str = "limit";
const PARAM_FROM: &str = "from";
const PARAM_TO: &str = "to";

/// Looks up one payment by its gateway transaction id.
///
/// `GET /payments/{imp_uid}`
pub async fn by_imp_uid(auth: &Authenticator, imp_uid: &str) -> Result<Payment> {
    let token = auth.token().await?;
    let url = format!("{}{}/{}", auth.api_url(), URL_PAYMENTS, imp_uid);

    transport::get(auth.http_client(), &token, &url, &[]).await
}

/// Looks up up to 100 payments in one call.
///
/// `GET /payments?imp_uid[]=...&imp_uid[]=...`
pub async fn by_imp_uids(auth: &Authenticator, imp_uids: &[String]) -> Result<Vec<Payment>> {
    let token = auth.token().await?;
    let url = format!("{}{}", auth.api_url(), URL_PAYMENTS);

    let query: Vec<(&str, String)> = imp_uids
        .iter()
        .map(|uid| (PARAM_IMP_UIDS, uid.clone()))
        .collect();

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Finds the first payment for a merchant order id.
///
/// When several payments share the `merchant_uid`, the sort order decides
/// which one comes back; narrow with `status` to get the latest record in
/// that state.
///
/// `GET /payments/find/{merchant_uid}/{payment_status}`
pub async fn by_merchant_uid(
    auth: &Authenticator,
    merchant_uid: &str,
    status: Option<PaymentStatus>,
    sorting: Option<Sorting>,
) -> Result<Payment> {
    let token = auth.token().await?;

    let mut url = format!(
        "{}{}{}/{}/",
        auth.api_url(),
        URL_PAYMENTS,
        URL_FIND,
        merchant_uid
    );
    if let Some(status) = status {
        url.push_str(status.as_str());
    }

    let mut query = Vec::new();
    if let Some(sorting) = sorting {
        query.push((PARAM_SORTING, sorting.as_str().to_string()));
    }

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Finds every payment for a merchant order id, paged.
///
/// `GET /payments/findAll/{merchant_uid}/{payment_status}`
pub async fn find_all_by_merchant_uid(
    auth: &Authenticator,
    merchant_uid: &str,
    status: Option<PaymentStatus>,
    sorting: Option<Sorting>,
    page: i32,
) -> Result<PaymentPage> {
    let token = auth.token().await?;

    let mut url = format!(
        "{}{}{}/{}/",
        auth.api_url(),
        URL_PAYMENTS,
        URL_FIND_ALL,
        merchant_uid
    );
    if let Some(status) = status {
        url.push_str(status.as_str());
    }

    let mut query = Vec::new();
    if let Some(sorting) = sorting {
        query.push((PARAM_SORTING, sorting.as_str().to_string()));
    }
    if page > 0 {
        query.push((PARAM_PAGE, page.to_string()));
    }

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Lists payments by status within a time window, 20 per page.
///
/// `from` and `to` are Unix epoch seconds; the gateway accepts at most a
/// 90-day window and defaults to the most recent 90 days when both are
/// omitted.
///
/// `GET /payments/status/{payment_status}`
pub async fn by_status(
    auth: &Authenticator,
    status: PaymentStatus,
    page: i32,
    limit: i32,
    from: Option<i64>,
    to: Option<i64>,
    sorting: Option<Sorting>,
) -> Result<PaymentPage> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}",
        auth.api_url(),
        URL_PAYMENTS,
        URL_STATUS,
        status.as_str()
    );

    let mut query = Vec::new();
    if page > 0 {
        query.push((PARAM_PAGE, page.to_string()));
    }
    if limit > 0 {
        query.push((PARAM_LIMIT, limit.to_string()));
    }
    if let Some(from) = from {
        query.push((PARAM_FROM, from.to_string()));
    }
    if let Some(to) = to {
        query.push((PARAM_TO, to.to_string()));
    }
    if let Some(sorting) = sorting {
        query.push((PARAM_SORTING, sorting.as_str().to_string()));
    }

    transport::get(auth.http_client(), &token, &url, &query).await
}

/// Per-method amount breakdown for a payment.
///
/// `GET /payments/{imp_uid}/balance`
pub async fn balance_by_imp_uid(auth: &Authenticator, imp_uid: &str) -> Result<PaymentBalance> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}/{}{}",
        auth.api_url(),
        URL_PAYMENTS,
        imp_uid,
        URL_BALANCE
    );

    transport::get(auth.http_client(), &token, &url, &[]).await
}

/// Cancels a payment, fully or partially.
///
/// `POST /payments/cancel`
pub async fn cancel(auth: &Authenticator, request: &CancelRequest) -> Result<Payment> {
    let token = auth.token().await?;
    let url = format!("{}{}{}", auth.api_url(), URL_PAYMENTS, URL_CANCEL);

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Pre-registers the expected amount for a merchant order.
///
/// `POST /payments/prepare`
pub async fn prepare(auth: &Authenticator, request: &PrepareRequest) -> Result<Prepare> {
    let token = auth.token().await?;
    let url = format!("{}{}{}", auth.api_url(), URL_PAYMENTS, URL_PREPARE);

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Reads back a pre-registered amount.
///
/// `GET /payments/prepare/{merchant_uid}`
pub async fn prepare_by_merchant_uid(auth: &Authenticator, merchant_uid: &str) -> Result<Prepare> {
    let token = auth.token().await?;
    let url = format!(
        "{}{}{}/{}",
        auth.api_url(),
        URL_PAYMENTS,
        URL_PREPARE,
        merchant_uid
    );

    transport::get(auth.http_client(), &token, &url, &[]).await
}
