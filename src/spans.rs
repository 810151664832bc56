//! Span creation helpers for gas oracle operations.
//!
//! Telemetry is kept out of the request logic: each instrumented operation
//! has a span helper here, and the operation attaches it with
//! [`tracing::Instrument`] so the span stays correct across `.await` points.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Request logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use tracing::{Level, Span};

/// Create span for one gas oracle request/response cycle.
///
/// `endpoint` must already have the credential redacted.
///
/// Parent: caller's span, if any
/// Children: none (reqwest does not emit spans)
#[inline]
pub(crate) fn fetch_gas_oracle(endpoint: &str) -> Span {
    tracing::span!(Level::INFO, "gas_oracle.fetch_gas_oracle", endpoint = %endpoint)
}

/// Create span for decoding an oracle response body.
///
/// Parent: fetch_gas_oracle span
#[inline]
pub(crate) fn parse_gas_oracle_response(body_len: usize) -> Span {
    tracing::debug_span!("gas_oracle.parse_gas_oracle_response", body_len = body_len)
}
