//! The purchase validation rulebook.
//!
//! A purchase request is checked against a fixed sequence of business
//! rules; the first failing rule determines the rejection, and exactly one
//! rejection is produced per failed call. The rule order is part of the
//! observable contract (callers and their tests depend on which message a
//! doubly-invalid request produces), so it is spelled out here:
//!
//! 1. account id present and strictly positive
//! 2. request batch present and non-empty
//! 3. no missing entry in the batch
//! 4. every entry names a ticket type
//! 5. every named ticket type is recognized
//! 6. every quantity is strictly positive
//! 7. child or infant tickets require at least one adult ticket
//! 8. infant tickets cannot outnumber adult tickets
//! 9. the summed ticket count stays within the purchase limit
//!
//! Rules 3-6 sweep the entries in position order (the first offending
//! entry wins); rules 7-9 run on the per-category sums across all entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marquee_domain::{AccountId, OrderLine, TicketCounts, TicketRequest, TicketType};

/// Why a purchase request was rejected.
///
/// The `Display` strings are part of the observable contract and are
/// asserted verbatim by callers; do not reword them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseRejection {
    #[error("Invalid Account Id")]
    InvalidAccountId,

    #[error("Ticket request cannot be null or empty")]
    EmptyOrder,

    #[error("Ticket request cannot be null")]
    MissingLine,

    #[error("Ticket type cannot be null")]
    MissingTicketType,

    #[error("Ticket type not defined")]
    UnknownTicketType,

    #[error("Ticket count should be greater than 0")]
    NonPositiveTicketCount,

    #[error("Child or infant tickets cannot be purchased without adult tickets")]
    NoAccompanyingAdult,

    #[error("Infant tickets cannot be more than adult tickets")]
    TooManyInfants,

    #[error("Maximum allowed tickets exceeded")]
    TicketLimitExceeded,
}

fn default_max_tickets_per_purchase() -> u32 {
    20
}

/// Tunable purchase limits.
///
/// One knob exists: the maximum number of tickets (all categories summed)
/// a single purchase may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLimits {
    #[serde(default = "default_max_tickets_per_purchase")]
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: default_max_tickets_per_purchase(),
        }
    }
}

/// A purchase request that passed every rule.
///
/// Downstream stages consume only this: the account is promoted to a
/// validated [`AccountId`] and every line to a typed [`OrderLine`], so
/// aggregation and dispatch never re-inspect raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub account: AccountId,
    pub lines: Vec<OrderLine>,
}

/// Run the rulebook over a raw purchase request.
///
/// # Errors
///
/// Returns the [`PurchaseRejection`] of the first failing rule.
pub fn validate(
    account_id: Option<i64>,
    requests: &[Option<TicketRequest>],
    limits: &PurchaseLimits,
) -> Result<ValidOrder, PurchaseRejection> {
    // Rule 1 runs before any batch-structure rule: an absent account with
    // a malformed batch still rejects on the account.
    let account = account_id
        .and_then(|id| AccountId::new(id).ok())
        .ok_or(PurchaseRejection::InvalidAccountId)?;

    if requests.is_empty() {
        return Err(PurchaseRejection::EmptyOrder);
    }

    let mut lines = Vec::with_capacity(requests.len());
    for entry in requests {
        let request = entry.as_ref().ok_or(PurchaseRejection::MissingLine)?;
        let name = request
            .ticket_type()
            .ok_or(PurchaseRejection::MissingTicketType)?;
        let ticket_type = name
            .parse::<TicketType>()
            .map_err(|_| PurchaseRejection::UnknownTicketType)?;
        let quantity = u32::try_from(request.quantity())
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(PurchaseRejection::NonPositiveTicketCount)?;
        lines.push(OrderLine::new(ticket_type, quantity));
    }

    // The batch-level rules see summed counts across all lines, so a
    // category split over several lines behaves like a single merged line.
    let counts = TicketCounts::tally(&lines);
    if counts.adults == 0 && counts.children + counts.infants > 0 {
        return Err(PurchaseRejection::NoAccompanyingAdult);
    }
    if counts.infants > counts.adults {
        return Err(PurchaseRejection::TooManyInfants);
    }
    if counts.total() > u64::from(limits.max_tickets_per_purchase) {
        return Err(PurchaseRejection::TicketLimitExceeded);
    }

    Ok(ValidOrder { account, lines })
}
