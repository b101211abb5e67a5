//! Error types for port operations.

use marquee_domain::AccountId;

/// Collaborator-side failures with context for debugging.
///
/// The engine never constructs, retries, or compensates one of these; it
/// propagates whatever the collaborator signalled.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The collaborator could not be reached or errored internally.
    #[error("{service} unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    /// The collaborator refused the operation for this account.
    #[error("{service} declined account {account}: {message}")]
    Declined {
        service: &'static str,
        account: AccountId,
        message: String,
    },
}

impl BookingError {
    /// Create an Unavailable error with service context.
    pub fn unavailable(service: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            service,
            message: message.to_string(),
        }
    }

    /// Create a Declined error with service and account context.
    pub fn declined(service: &'static str, account: AccountId, message: impl ToString) -> Self {
        Self::Declined {
            service,
            account,
            message: message.to_string(),
        }
    }
}
