//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Payment collection (the cinema's payment gateway)
//! - Seat reservation (the cinema's seat booking system)
//!
//! Both are injected at construction and substituted in tests; the engine
//! never implements them.

mod error;
mod external;

pub use error::BookingError;
pub use external::{PaymentPort, SeatReservationPort};

// Test-only mocks (only available during test builds)
#[cfg(test)]
pub use external::{MockPaymentPort, MockSeatReservationPort};
