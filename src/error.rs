//! Shared error-code contract.
//!
//! Every error that can reach an HTTP client carries a stable machine-readable
//! code and a retry hint alongside its `Display` message.

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
