//! Error types for domain validation

use thiserror::Error;

/// Errors raised when constructing domain value objects.
///
/// These fire before any network call is issued: an invalid donation
/// amount or hour count never reaches the API client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Donation amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("Volunteer hours must be greater than zero")]
    ZeroHours,
}
