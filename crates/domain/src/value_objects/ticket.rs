//! Ticket type enumeration and the raw purchase request line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A cinema ticket type with its fixed unit price.
///
/// The price is part of the variant, not configuration: adult tickets cost
/// 20, child tickets 10, and infant tickets are free (infants travel on an
/// adult's lap and take no seat of their own).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Unit price of one ticket of this type.
    pub fn price(self) -> u32 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    /// Whether one ticket of this type occupies a seat.
    pub fn reserves_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// All recognized ticket types.
    pub fn all() -> &'static [TicketType] {
        &[TicketType::Adult, TicketType::Child, TicketType::Infant]
    }

    /// Wire name of this type, as submitted by front-ends.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            other => Err(DomainError::parse(format!("Unknown ticket type: {other}"))),
        }
    }
}

/// One line of a purchase request as received at the boundary.
///
/// Nothing here is validated yet: the ticket type is the raw wire string
/// (absent or unrecognized values are rejected by the rulebook, not by
/// construction) and the quantity may be zero or negative. The rulebook
/// promotes lines that pass every rule into [`super::OrderLine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    ticket_type: Option<String>,
    quantity: i32,
}

impl TicketRequest {
    /// A well-formed request line for a recognized ticket type.
    pub fn new(ticket_type: TicketType, quantity: i32) -> Self {
        Self {
            ticket_type: Some(ticket_type.as_str().to_string()),
            quantity,
        }
    }

    /// A request line from raw boundary data, missing fields and all.
    pub fn raw(ticket_type: Option<String>, quantity: i32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Raw wire name of the requested ticket type, if one was supplied.
    pub fn ticket_type(&self) -> Option<&str> {
        self.ticket_type.as_deref()
    }

    /// Requested number of tickets, as submitted.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
