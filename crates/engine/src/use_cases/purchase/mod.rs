//! The ticket purchase transaction.
//!
//! `rulebook` decides whether a raw purchase request is acceptable;
//! `purchase_tickets` aggregates accepted requests and drives the two
//! collaborator ports in a fixed order.

pub mod purchase_tickets;
pub mod rulebook;

pub use purchase_tickets::{PurchaseError, PurchaseTickets};
pub use rulebook::{PurchaseLimits, PurchaseRejection, ValidOrder};
