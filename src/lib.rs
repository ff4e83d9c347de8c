//! # iamport
//!
//! A Rust client for the I'mport (iamport) payment gateway REST API.
//!
//! I'mport fronts dozens of Korean payment providers behind one REST API:
//! payment lookup and cancellation, billing-key (subscription) payments,
//! identity certification, and escrow logistics. This crate wraps those
//! endpoints behind a typed facade and handles bearer-token authentication
//! transparently.
//!
//! ## Features
//!
//! - **Cached authentication**: one token fetch up front, transparent
//!   refresh on expiry, single-flight under concurrent use
//! - **Typed envelopes**: the gateway's `{code, message, response}` wrapper
//!   is decoded once, centrally; vendor errors surface with their message text
//! - **Full endpoint coverage**: payments, billing keys, schedules,
//!   certifications and escrow logistics
//! - **Bring your own client**: inject a configured `reqwest::Client` for
//!   timeouts or proxies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iamport::{Iamport, DEFAULT_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Iamport::new(DEFAULT_URL, "REST_API_KEY", "REST_API_SECRET").await?;
//!
//! let payment = client.payment("imp_448280090638").await?;
//! println!("{} paid {}", payment.merchant_uid, payment.amount);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! The gateway issues short-lived bearer tokens from `POST /users/getToken`
//! in exchange for the REST API key and secret. Construction performs the
//! first fetch eagerly, so bad credentials fail at startup rather than on the
//! first call. Every subsequent request reuses the cached token until its
//! expiry instant has passed, then refreshes before proceeding. A failed
//! refresh is returned as an error, never as an empty token.
//!
//! Note the gateway expects the raw token in the `Authorization` header,
//! without a `Bearer ` prefix.
//!
//! ## Error Handling
//!
//! All operations return [`errors::Result`]. Transport-level failures map to
//! coarse categories (401 unauthorized, 404 not found, other statuses), while
//! application-level failures embedded in a 200 body surface as
//! [`errors::IamportError::Gateway`] carrying the vendor's message verbatim.
//! A call never yields both an empty payload and no error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod certification;
pub mod client;
pub mod customer;
pub mod errors;
pub mod escrow;
pub mod payment;
pub mod subscribe;
mod transport;
pub mod types;

// Re-export commonly used items
pub use auth::Authenticator;
pub use client::{Iamport, DEFAULT_URL};
pub use errors::{IamportError, Result};
pub use types::{
    AgainRequest, CancelRequest, Certification, CustomerBillingKey, EscrowLogis,
    EscrowLogisRequest, OnetimeRequest, Payment, PaymentPage, PaymentStatus, Prepare,
    Schedule, ScheduleRequest, ScheduleStatus, Sorting, UnscheduleRequest,
};
