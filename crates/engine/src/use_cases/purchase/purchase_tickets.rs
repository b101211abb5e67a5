//! Purchase tickets use case - the top-level purchase transaction.

use std::sync::Arc;

use thiserror::Error;

use marquee_domain::{PurchaseTotals, TicketRequest};

use crate::infrastructure::ports::{BookingError, PaymentPort, SeatReservationPort};

use super::rulebook::{self, PurchaseLimits, PurchaseRejection};

/// Why a purchase did not complete.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request failed the rulebook; neither collaborator was called.
    /// `Display` passes the rejection message through verbatim.
    #[error(transparent)]
    Rejected(#[from] PurchaseRejection),

    /// A collaborator failed after validation. The error is propagated
    /// unchanged; nothing is retried or compensated.
    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Validates a purchase request, aggregates it, and drives the two
/// collaborator ports.
///
/// Dispatch order is fixed and observable: seats are reserved first, then
/// payment is taken. A rejected request touches neither port.
pub struct PurchaseTickets {
    seat_reservation: Arc<dyn SeatReservationPort>,
    payment: Arc<dyn PaymentPort>,
    limits: PurchaseLimits,
}

impl PurchaseTickets {
    /// A use case with the default purchase limits.
    pub fn new(
        seat_reservation: Arc<dyn SeatReservationPort>,
        payment: Arc<dyn PaymentPort>,
    ) -> Self {
        Self::with_limits(seat_reservation, payment, PurchaseLimits::default())
    }

    /// A use case with custom purchase limits.
    pub fn with_limits(
        seat_reservation: Arc<dyn SeatReservationPort>,
        payment: Arc<dyn PaymentPort>,
        limits: PurchaseLimits,
    ) -> Self {
        Self {
            seat_reservation,
            payment,
            limits,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// # Arguments
    /// * `account_id` - The raw account identifier, if one was supplied
    /// * `requests` - The raw request batch, in submission order
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::Rejected`] when the rulebook refuses the
    /// request (no collaborator is called), or [`PurchaseError::Booking`]
    /// when a collaborator fails mid-dispatch.
    pub fn execute(
        &self,
        account_id: Option<i64>,
        requests: &[Option<TicketRequest>],
    ) -> Result<(), PurchaseError> {
        let order =
            rulebook::validate(account_id, requests, &self.limits).map_err(|rejection| {
                tracing::debug!(%rejection, "purchase rejected");
                rejection
            })?;

        let totals = PurchaseTotals::from_lines(&order.lines);

        self.seat_reservation
            .reserve_seats(order.account, totals.seats)?;
        self.payment.make_payment(order.account, totals.cost)?;

        tracing::info!(
            account = %order.account,
            cost = totals.cost,
            seats = totals.seats,
            "ticket purchase dispatched"
        );

        Ok(())
    }
}
