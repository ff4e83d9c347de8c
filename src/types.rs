//! Core type definitions for the I'mport gateway API.
//!
//! This module contains the response envelope, the token payload consumed by
//! the authentication core, and the typed request/response bodies used by the
//! endpoint callers.

use serde::{Deserialize, Serialize};

use crate::errors::{IamportError, Result};

/// Application-level success code embedded in every response envelope.
pub const CODE_OK: i32 = 0;

/// The gateway's uniform response wrapper.
///
/// Every endpoint, including token issuance, answers HTTP 200 with a JSON body
/// of this shape. Success is signalled by `code == 0`; any other code carries
/// the vendor's message text and no usable payload.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Application-level status code (`0` on success)
    pub code: i32,

    /// Vendor message, usually set only on failure
    #[serde(default)]
    pub message: Option<String>,

    /// The typed payload, present on success
    #[serde(default)]
    pub response: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into its payload.
    ///
    /// A non-zero code becomes [`IamportError::Gateway`] with the vendor
    /// message verbatim. A zero code with a null payload is a decode error;
    /// callers never observe a successful result without a value.
    pub fn into_result(self) -> Result<T> {
        if self.code != CODE_OK {
            return Err(IamportError::Gateway {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        self.response.ok_or_else(|| {
            IamportError::Decode("envelope code is 0 but response payload is null".to_string())
        })
    }
}

/// Payload of `POST /users/getToken`.
///
/// `expired_at` is an absolute Unix epoch second count, not a relative
/// duration.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenPayload {
    /// The bearer token presented on every subsequent call
    pub access_token: String,

    /// Absolute expiry instant, Unix epoch seconds
    pub expired_at: i64,

    /// Server clock at issuance, Unix epoch seconds
    #[serde(default)]
    pub now: Option<i64>,
}

/// Payment status filter for lookup endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Every status
    All,
    /// Payment window opened but not paid
    Ready,
    /// Paid
    Paid,
    /// Cancelled
    Canceled,
    /// Failed
    Failed,
}

impl PaymentStatus {
    /// Query-string value understood by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::All => "all",
            PaymentStatus::Ready => "ready",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Sort order for paged payment lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorting {
    /// Payment-window open time, newest first
    StartedDesc,
    /// Payment-window open time, oldest first
    StartedAsc,
    /// Paid time, newest first
    PaidDesc,
    /// Paid time, oldest first
    PaidAsc,
    /// Last-updated time, newest first
    UpdatedDesc,
    /// Last-updated time, oldest first
    UpdatedAsc,
}

impl Sorting {
    /// Query-string value understood by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            Sorting::StartedDesc => "-started",
            Sorting::StartedAsc => "started",
            Sorting::PaidDesc => "-paid",
            Sorting::PaidAsc => "paid",
            Sorting::UpdatedDesc => "-updated",
            Sorting::UpdatedAsc => "updated",
        }
    }
}

/// Schedule status filter for scheduled-payment lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// Scheduled and not yet executed
    Scheduled,
    /// Executed
    Executed,
    /// Revoked before execution
    Revoked,
}

impl ScheduleStatus {
    /// Query-string value understood by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::Executed => "executed",
            ScheduleStatus::Revoked => "revoked",
        }
    }
}

/// A single payment record.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Payment {
    /// I'mport transaction id
    pub imp_uid: String,

    /// Merchant order id
    #[serde(default)]
    pub merchant_uid: String,

    /// Payment method (`card`, `vbank`, `trans`, ...)
    #[serde(default)]
    pub pay_method: Option<String>,

    /// Sales channel (`pc`, `mobile`, `api`)
    #[serde(default)]
    pub channel: Option<String>,

    /// PG provider code
    #[serde(default)]
    pub pg_provider: Option<String>,

    /// PG transaction id
    #[serde(default)]
    pub pg_tid: Option<String>,

    /// Whether the payment is under escrow
    #[serde(default)]
    pub escrow: bool,

    /// Card approval number
    #[serde(default)]
    pub apply_num: Option<String>,

    /// Card issuer code
    #[serde(default)]
    pub card_code: Option<String>,

    /// Card issuer name
    #[serde(default)]
    pub card_name: Option<String>,

    /// Installment months, 0 for a lump sum
    #[serde(default)]
    pub card_quota: i32,

    /// Masked card number
    #[serde(default)]
    pub card_number: Option<String>,

    /// Bank code, for bank-transfer payments
    #[serde(default)]
    pub bank_code: Option<String>,

    /// Bank name, for bank-transfer payments
    #[serde(default)]
    pub bank_name: Option<String>,

    /// Virtual-account bank code
    #[serde(default)]
    pub vbank_code: Option<String>,

    /// Virtual-account bank name
    #[serde(default)]
    pub vbank_name: Option<String>,

    /// Virtual-account number
    #[serde(default)]
    pub vbank_num: Option<String>,

    /// Virtual-account holder name
    #[serde(default)]
    pub vbank_holder: Option<String>,

    /// Virtual-account deposit deadline, Unix epoch seconds
    #[serde(default)]
    pub vbank_date: i64,

    /// Virtual-account issuance time, Unix epoch seconds
    #[serde(default)]
    pub vbank_issued_at: i64,

    /// Order name
    #[serde(default)]
    pub name: Option<String>,

    /// Paid amount
    #[serde(default)]
    pub amount: f64,

    /// Cumulative cancelled amount
    #[serde(default)]
    pub cancel_amount: f64,

    /// Currency code (`KRW`, `USD`, ...)
    #[serde(default)]
    pub currency: Option<String>,

    /// Buyer name
    #[serde(default)]
    pub buyer_name: Option<String>,

    /// Buyer email
    #[serde(default)]
    pub buyer_email: Option<String>,

    /// Buyer phone number
    #[serde(default)]
    pub buyer_tel: Option<String>,

    /// Buyer address
    #[serde(default)]
    pub buyer_addr: Option<String>,

    /// Buyer postcode
    #[serde(default)]
    pub buyer_postcode: Option<String>,

    /// Merchant-defined opaque data echoed back by the gateway
    #[serde(default)]
    pub custom_data: Option<String>,

    /// User agent of the payment window
    #[serde(default)]
    pub user_agent: Option<String>,

    /// `ready`, `paid`, `canceled` or `failed`
    #[serde(default)]
    pub status: String,

    /// Payment-window open time, Unix epoch seconds
    #[serde(default)]
    pub started_at: i64,

    /// Paid time, Unix epoch seconds
    #[serde(default)]
    pub paid_at: i64,

    /// Failure time, Unix epoch seconds
    #[serde(default)]
    pub failed_at: i64,

    /// Cancellation time, Unix epoch seconds
    #[serde(default)]
    pub cancelled_at: i64,

    /// Failure reason reported by the provider
    #[serde(default)]
    pub fail_reason: Option<String>,

    /// Cancellation reason
    #[serde(default)]
    pub cancel_reason: Option<String>,

    /// Receipt URL
    #[serde(default)]
    pub receipt_url: Option<String>,

    /// Per-cancellation breakdown, newest first
    #[serde(default)]
    pub cancel_history: Vec<CancelHistory>,

    /// Receipt URLs of partial cancellations
    #[serde(default)]
    pub cancel_receipt_urls: Vec<String>,

    /// Whether a cash receipt was issued
    #[serde(default)]
    pub cash_receipt_issued: bool,

    /// Billing key owner, when the payment was made with a stored key
    #[serde(default)]
    pub customer_uid: Option<String>,

    /// How the billing key was used (`issue`, `payment`, ...)
    #[serde(default)]
    pub customer_uid_usage: Option<String>,
}

/// One cancellation entry inside [`Payment::cancel_history`].
#[derive(Deserialize, Debug, Clone)]
pub struct CancelHistory {
    /// PG transaction id of the cancellation
    #[serde(default)]
    pub pg_tid: Option<String>,

    /// Cancelled amount
    #[serde(default)]
    pub amount: f64,

    /// Cancellation time, Unix epoch seconds
    #[serde(default)]
    pub cancelled_at: i64,

    /// Cancellation reason
    #[serde(default)]
    pub reason: Option<String>,

    /// Receipt URL of the cancellation
    #[serde(default)]
    pub receipt_url: Option<String>,
}

/// A page of payments, as returned by the list endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PaymentPage {
    /// Total records matching the query
    #[serde(default)]
    pub total: i32,

    /// Previous page number, 0 when on the first page
    #[serde(default)]
    pub previous: i32,

    /// Next page number, 0 when on the last page
    #[serde(default)]
    pub next: i32,

    /// Payments on this page
    #[serde(default)]
    pub list: Vec<Payment>,
}

/// Per-method amount breakdown of a payment.
#[derive(Deserialize, Debug, Clone)]
pub struct PaymentBalance {
    /// Total balance amount
    #[serde(default)]
    pub amount: f64,

    /// Portion settled to the franchisee
    #[serde(default)]
    pub franchisee: f64,
}

/// Pre-registered payment amount for a merchant order.
#[derive(Deserialize, Debug, Clone)]
pub struct Prepare {
    /// Merchant order id
    pub merchant_uid: String,

    /// Registered amount; the gateway blocks payments that differ from it
    pub amount: f64,
}

/// Body of `POST /payments/cancel`.
///
/// Either `imp_uid` or `merchant_uid` must identify the payment.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CancelRequest {
    /// I'mport transaction id of the payment to cancel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imp_uid: Option<String>,

    /// Merchant order id of the payment to cancel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_uid: Option<String>,

    /// Amount to cancel; omit for a full cancellation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Tax-free portion of the cancelled amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<f64>,

    /// Expected remaining cancellable amount, checked by the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<f64>,

    /// Cancellation reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Refund account holder (virtual-account refunds only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_holder: Option<String>,

    /// Refund bank code (virtual-account refunds only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_bank: Option<String>,

    /// Refund account number (virtual-account refunds only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_account: Option<String>,
}

/// Body of `POST /payments/prepare`.
#[derive(Serialize, Debug, Clone)]
pub struct PrepareRequest {
    /// Merchant order id
    pub merchant_uid: String,

    /// Expected payment amount
    pub amount: f64,
}

/// An identity certification record.
#[derive(Deserialize, Debug, Clone)]
pub struct Certification {
    /// I'mport certification id
    pub imp_uid: String,

    /// Merchant-side certification id
    #[serde(default)]
    pub merchant_uid: Option<String>,

    /// PG transaction id
    #[serde(default)]
    pub pg_tid: Option<String>,

    /// PG provider code
    #[serde(default)]
    pub pg_provider: Option<String>,

    /// Certified person's name
    #[serde(default)]
    pub name: Option<String>,

    /// `male` or `female`
    #[serde(default)]
    pub gender: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birthday: Option<String>,

    /// Whether the person is a foreign national
    #[serde(default)]
    pub foreigner: bool,

    /// Certified phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Mobile carrier (`SKT`, `KT`, `LGT`, ...)
    #[serde(default)]
    pub carrier: Option<String>,

    /// Whether the certification completed
    #[serde(default)]
    pub certified: bool,

    /// Certification time, Unix epoch seconds
    #[serde(default)]
    pub certified_at: i64,

    /// CI: stable key identifying the person across sites
    #[serde(default)]
    pub unique_key: Option<String>,

    /// DI: key identifying the person within this site
    #[serde(default)]
    pub unique_in_site: Option<String>,

    /// Originating page URL
    #[serde(default)]
    pub origin: Option<String>,
}

/// Body of `POST /subscribe/payments/onetime`.
///
/// Pays with raw card details in a single call. When `customer_uid` is set the
/// gateway stores the billing key used for the payment for later reuse.
#[derive(Serialize, Debug, Clone, Default)]
pub struct OnetimeRequest {
    /// Merchant order id; must be unique per payment
    pub merchant_uid: String,

    /// Amount to charge
    pub amount: f64,

    /// Card number, `XXXX-XXXX-XXXX-XXXX`
    pub card_number: String,

    /// Card expiry, `YYYY-MM`
    pub expiry: String,

    /// Birth date `YYMMDD`, or business registration number
    pub birth: String,

    /// First two digits of the card password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,

    /// Billing key id to store on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_uid: Option<String>,

    /// PG provider override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,

    /// Order name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tax-free portion of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<f64>,

    /// Installment months, 0 for a lump sum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_quota: Option<i32>,

    /// Buyer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,

    /// Buyer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,

    /// Buyer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,

    /// Buyer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_addr: Option<String>,

    /// Buyer postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_postcode: Option<String>,

    /// Merchant-defined opaque data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,

    /// Webhook override for this payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

/// Body of `POST /subscribe/payments/again`.
///
/// Charges a previously stored billing key.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AgainRequest {
    /// Billing key id registered via onetime or billing-key insert
    pub customer_uid: String,

    /// Merchant order id; must be unique per payment
    pub merchant_uid: String,

    /// Amount to charge
    pub amount: f64,

    /// Order name
    pub name: String,

    /// Tax-free portion of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<f64>,

    /// Buyer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,

    /// Buyer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,

    /// Buyer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,

    /// Buyer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_addr: Option<String>,

    /// Buyer postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_postcode: Option<String>,

    /// Merchant-defined opaque data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,

    /// Webhook override for this payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

/// One scheduled charge inside a [`ScheduleRequest`].
#[derive(Serialize, Debug, Clone, Default)]
pub struct ScheduleEntry {
    /// Merchant order id; must be unique per payment
    pub merchant_uid: String,

    /// Execution time, Unix epoch seconds
    pub schedule_at: i64,

    /// Amount to charge
    pub amount: f64,

    /// Tax-free portion of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<f64>,

    /// Order name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Buyer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,

    /// Buyer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,

    /// Buyer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,

    /// Buyer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_addr: Option<String>,

    /// Buyer postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_postcode: Option<String>,

    /// Merchant-defined opaque data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,

    /// Webhook override for this charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

/// Body of `POST /subscribe/payments/schedule`.
///
/// Card fields are optional; when present the gateway (re)registers the
/// billing key before scheduling.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Billing key id to charge
    pub customer_uid: String,

    /// When set, the billing key is only accepted if a payment of exactly
    /// this amount succeeds first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checking_amount: Option<f64>,

    /// Card number, when registering the key in the same call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,

    /// Card expiry, `YYYY-MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,

    /// Birth date `YYMMDD`, or business registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,

    /// First two digits of the card password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,

    /// PG provider override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,

    /// Charges to register
    pub schedules: Vec<ScheduleEntry>,
}

/// Body of `POST /subscribe/payments/unschedule`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UnscheduleRequest {
    /// Billing key id whose schedules to revoke
    pub customer_uid: String,

    /// Orders to revoke; omit to revoke every pending schedule for the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_uid: Option<Vec<String>>,
}

/// A scheduled payment record.
#[derive(Deserialize, Debug, Clone)]
pub struct Schedule {
    /// Billing key id
    pub customer_uid: String,

    /// Merchant order id of the scheduled charge
    #[serde(default)]
    pub merchant_uid: String,

    /// Set once the schedule has executed
    #[serde(default)]
    pub imp_uid: Option<String>,

    /// Amount to charge
    #[serde(default)]
    pub amount: f64,

    /// Execution time, Unix epoch seconds
    #[serde(default)]
    pub schedule_at: i64,

    /// Actual execution time, Unix epoch seconds
    #[serde(default)]
    pub executed_at: i64,

    /// Revocation time, Unix epoch seconds
    #[serde(default)]
    pub revoked_at: i64,

    /// `scheduled`, `executed` or `revoked`
    #[serde(default)]
    pub schedule_status: String,

    /// Payment status of the executed charge, when any
    #[serde(default)]
    pub payment_status: Option<String>,

    /// Failure reason of the executed charge
    #[serde(default)]
    pub fail_reason: Option<String>,
}

/// A page of scheduled payments.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SchedulePage {
    /// Total records matching the query
    #[serde(default)]
    pub total: i32,

    /// Previous page number, 0 when on the first page
    #[serde(default)]
    pub previous: i32,

    /// Next page number, 0 when on the last page
    #[serde(default)]
    pub next: i32,

    /// Schedules on this page
    #[serde(default)]
    pub list: Vec<Schedule>,
}

/// A stored billing key and its owner details.
#[derive(Deserialize, Debug, Clone)]
pub struct CustomerBillingKey {
    /// Merchant-chosen billing key id
    pub customer_uid: String,

    /// PG provider the key is stored with
    #[serde(default)]
    pub pg_provider: Option<String>,

    /// Card issuer name
    #[serde(default)]
    pub card_name: Option<String>,

    /// Card issuer code
    #[serde(default)]
    pub card_code: Option<String>,

    /// Masked card number
    #[serde(default)]
    pub card_number: Option<String>,

    /// Customer name
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Customer phone number
    #[serde(default)]
    pub customer_tel: Option<String>,

    /// Customer email
    #[serde(default)]
    pub customer_email: Option<String>,

    /// Customer address
    #[serde(default)]
    pub customer_addr: Option<String>,

    /// Customer postcode
    #[serde(default)]
    pub customer_postcode: Option<String>,

    /// Unix epoch seconds the key was stored
    #[serde(default)]
    pub inserted: i64,

    /// Unix epoch seconds the key was last updated
    #[serde(default)]
    pub updated: i64,
}

/// Body of `POST /subscribe/customers/{customer_uid}`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct InsertBillingKeyRequest {
    /// Card number, `XXXX-XXXX-XXXX-XXXX`
    pub card_number: String,

    /// Card expiry, `YYYY-MM`
    pub expiry: String,

    /// Birth date `YYMMDD`, or business registration number
    pub birth: String,

    /// First two digits of the card password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,

    /// PG provider override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,

    /// Customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Customer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tel: Option<String>,

    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Customer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_addr: Option<String>,

    /// Customer postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_postcode: Option<String>,
}

/// Sender or receiver party in an escrow logistics registration.
#[derive(Serialize, Debug, Clone, Default)]
pub struct EscrowParty {
    /// Party name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Party phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,

    /// Party address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,

    /// Party postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// Carrier and invoice details of an escrow shipment.
#[derive(Serialize, Debug, Clone)]
pub struct EscrowLogisInfo {
    /// Carrier company code
    pub company: String,

    /// Tracking / invoice number
    pub invoice: String,

    /// Shipping date, `YYYY-MM-DD`
    pub sent_at: String,
}

/// Body of `POST`/`PUT /escrows/logis/{imp_uid}`.
#[derive(Serialize, Debug, Clone)]
pub struct EscrowLogisRequest {
    /// Shipping party
    pub sender: EscrowParty,

    /// Receiving party
    pub receiver: EscrowParty,

    /// Carrier and invoice details
    pub logis: EscrowLogisInfo,
}

/// Registered escrow logistics record.
#[derive(Deserialize, Debug, Clone)]
pub struct EscrowLogis {
    /// Carrier company code
    pub company: String,

    /// Tracking / invoice number
    pub invoice: String,

    /// Shipping time, Unix epoch seconds
    #[serde(default)]
    pub sent_at: i64,

    /// Registration time, Unix epoch seconds
    #[serde(default)]
    pub applied_at: i64,

    /// Receiver summary, as echoed by the gateway
    #[serde(default)]
    pub receiver: Option<String>,
}
