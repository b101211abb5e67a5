//! Collaborator port traits (payment gateway, seat reservation).
//!
//! Both ports are synchronous: a purchase runs to completion on the
//! caller's thread, and the two calls it makes are ordered (seats first,
//! then payment). Implementations must be `Send + Sync` so one use case
//! can serve concurrent purchases from multiple threads.

use marquee_domain::AccountId;

use super::error::BookingError;

/// Charges a cinema account.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentPort: Send + Sync {
    /// Charge `amount` to the account.
    fn make_payment(&self, account: AccountId, amount: u32) -> Result<(), BookingError>;
}

/// Reserves seats for a cinema account.
#[cfg_attr(test, mockall::automock)]
pub trait SeatReservationPort: Send + Sync {
    /// Reserve `seat_count` seats for the account.
    fn reserve_seats(&self, account: AccountId, seat_count: u32) -> Result<(), BookingError>;
}
