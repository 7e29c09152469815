//! Error type shared by the subscription command and query handlers.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::subscription::SubscriptionError;
use crate::ports::GatewayError;

/// Failure of a subscription use case.
///
/// `Validation` errors are raised before the gateway is called; `Gateway`
/// errors come back from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubscriptionCommandError {
    #[error(transparent)]
    Validation(#[from] SubscriptionError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl SubscriptionCommandError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionCommandError::Validation(e) => e.code(),
            SubscriptionCommandError::Gateway(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SubscriptionId;

    #[test]
    fn validation_keeps_domain_code() {
        let err: SubscriptionCommandError = SubscriptionError::EmptyUpdate.into();
        assert_eq!(err.code(), ErrorCode::EmptyUpdate);
        assert_eq!(err.to_string(), "No fields to update");
    }

    #[test]
    fn gateway_keeps_gateway_code() {
        let err: SubscriptionCommandError = GatewayError::NotFound(SubscriptionId::new()).into();
        assert_eq!(err.code(), ErrorCode::SubscriptionNotFound);
    }
}
