//! Escrow logistics endpoints.
//!
//! Escrow payments settle only after the shipment is confirmed; these calls
//! attach (or correct) the carrier invoice for an escrow transaction.

use crate::auth::Authenticator;
use crate::errors::Result;
use crate::transport;
use crate::types::{EscrowLogis, EscrowLogisRequest};

const URL_ESCROWS: &str = "/escrows";
const URL_LOGIS: &str = "/logis";

/// Registers shipment details for an escrow payment.
///
/// `POST /escrows/logis/{imp_uid}`
pub async fn register_logis(
    auth: &Authenticator,
    imp_uid: &str,
    request: &EscrowLogisRequest,
) -> Result<EscrowLogis> {
    let token = auth.token().await?;
    let url = logis_url(auth, imp_uid);

    transport::post_json(auth.http_client(), &token, &url, request).await
}

/// Corrects previously registered shipment details.
///
/// `PUT /escrows/logis/{imp_uid}`
pub async fn update_logis(
    auth: &Authenticator,
    imp_uid: &str,
    request: &EscrowLogisRequest,
) -> Result<EscrowLogis> {
    let token = auth.token().await?;
    let url = logis_url(auth, imp_uid);

    transport::put_json(auth.http_client(), &token, &url, request).await
}

fn logis_url(auth: &Authenticator, imp_uid: &str) -> String {
    format!("{}{}{}/{}", auth.api_url(), URL_ESCROWS, URL_LOGIS, imp_uid)
}
