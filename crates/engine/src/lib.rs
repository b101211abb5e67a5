//! Marquee Engine library.
//!
//! This crate orchestrates cinema ticket purchases on top of the pure
//! domain types in `marquee-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Purchase orchestration (rulebook, totals, dispatch)
//! - `infrastructure/` - Collaborator port traits and telemetry bootstrap
//!
//! The engine holds no state of its own: a purchase runs through the
//! rulebook and out to the injected collaborator ports within a single
//! synchronous call.

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::purchase::{PurchaseError, PurchaseLimits, PurchaseRejection, PurchaseTickets};
