//! Validated order lines and the pure aggregations computed from them.

use serde::{Deserialize, Serialize};

use super::ticket::TicketType;

/// A validated purchase line: ticket type and a strictly positive quantity.
///
/// Only the rulebook constructs these, from raw
/// [`super::TicketRequest`] lines that passed every per-entry rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub ticket_type: TicketType,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Total price of this line (unit price × quantity).
    pub fn total_price(&self) -> u32 {
        self.ticket_type.price() * self.quantity
    }

    /// Seats this line reserves. Infant lines reserve none.
    pub fn seats(&self) -> u32 {
        if self.ticket_type.reserves_seat() {
            self.quantity
        } else {
            0
        }
    }
}

/// Per-category ticket tally across all lines of an order.
///
/// The same category may appear in several lines; the tally is additive,
/// so a split batch and a merged batch are indistinguishable to every rule
/// computed from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketCounts {
    /// Sum quantities per category across all lines.
    pub fn tally(lines: &[OrderLine]) -> Self {
        let mut counts = TicketCounts::default();
        for line in lines {
            let quantity = u64::from(line.quantity);
            match line.ticket_type {
                TicketType::Adult => counts.adults += quantity,
                TicketType::Child => counts.children += quantity,
                TicketType::Infant => counts.infants += quantity,
            }
        }
        counts
    }

    /// Total tickets across all categories.
    pub fn total(&self) -> u64 {
        self.adults + self.children + self.infants
    }
}

/// The aggregation result a purchase dispatches with: what to charge and
/// how many seats to reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    pub cost: u32,
    pub seats: u32,
}

impl PurchaseTotals {
    /// Fold validated lines into totals.
    ///
    /// Cost sums unit price × quantity over every line; seats sum the
    /// quantities of seat-reserving lines only, so infants are charged
    /// nothing and occupy nothing.
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        let cost = lines.iter().map(OrderLine::total_price).sum();
        let seats = lines.iter().map(OrderLine::seats).sum();
        Self { cost, seats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_price_multiplies_unit_price() {
        assert_eq!(OrderLine::new(TicketType::Adult, 3).total_price(), 60);
        assert_eq!(OrderLine::new(TicketType::Child, 5).total_price(), 50);
        assert_eq!(OrderLine::new(TicketType::Infant, 4).total_price(), 0);
    }

    #[test]
    fn infant_lines_reserve_no_seats() {
        assert_eq!(OrderLine::new(TicketType::Adult, 3).seats(), 3);
        assert_eq!(OrderLine::new(TicketType::Child, 5).seats(), 5);
        assert_eq!(OrderLine::new(TicketType::Infant, 4).seats(), 0);
    }

    #[test]
    fn tally_sums_per_category() {
        let lines = [
            OrderLine::new(TicketType::Adult, 6),
            OrderLine::new(TicketType::Child, 5),
            OrderLine::new(TicketType::Infant, 2),
        ];
        let counts = TicketCounts::tally(&lines);
        assert_eq!(counts.adults, 6);
        assert_eq!(counts.children, 5);
        assert_eq!(counts.infants, 2);
        assert_eq!(counts.total(), 13);
    }

    #[test]
    fn tally_is_additive_across_repeated_categories() {
        let split = [
            OrderLine::new(TicketType::Adult, 2),
            OrderLine::new(TicketType::Child, 1),
            OrderLine::new(TicketType::Adult, 3),
        ];
        let merged = [
            OrderLine::new(TicketType::Adult, 5),
            OrderLine::new(TicketType::Child, 1),
        ];
        assert_eq!(TicketCounts::tally(&split), TicketCounts::tally(&merged));
    }

    #[test]
    fn tally_of_empty_order_is_zero() {
        assert_eq!(TicketCounts::tally(&[]).total(), 0);
    }

    #[test]
    fn totals_charge_everything_and_seat_non_infants() {
        let lines = [
            OrderLine::new(TicketType::Adult, 6),
            OrderLine::new(TicketType::Child, 5),
            OrderLine::new(TicketType::Infant, 2),
        ];
        let totals = PurchaseTotals::from_lines(&lines);
        assert_eq!(totals.cost, 170);
        assert_eq!(totals.seats, 11);
    }

    #[test]
    fn totals_ignore_infants_in_both_cost_and_seats() {
        let without_infants = [OrderLine::new(TicketType::Adult, 1)];
        let with_infants = [
            OrderLine::new(TicketType::Adult, 1),
            OrderLine::new(TicketType::Infant, 1),
        ];
        assert_eq!(
            PurchaseTotals::from_lines(&without_infants),
            PurchaseTotals::from_lines(&with_infants)
        );
    }

    #[test]
    fn totals_are_additive_across_split_lines() {
        let split = [
            OrderLine::new(TicketType::Adult, 2),
            OrderLine::new(TicketType::Adult, 4),
        ];
        let merged = [OrderLine::new(TicketType::Adult, 6)];
        assert_eq!(
            PurchaseTotals::from_lines(&split),
            PurchaseTotals::from_lines(&merged)
        );
    }
}
