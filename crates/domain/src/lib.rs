//! Marquee domain types.
//!
//! Pure domain values for cinema ticket purchases: the ticket type
//! enumeration with its fixed prices, the account identifier, and the
//! value objects the purchase pipeline computes with. No IO and no
//! orchestration live here; those belong to `marquee-engine`.

pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::AccountId;
pub use value_objects::{OrderLine, PurchaseTotals, TicketCounts, TicketRequest, TicketType};
