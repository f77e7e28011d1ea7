use crate::{
    format,
    raffle_types::{Raffle, Ticket},
};
use fuels::types::Identity;

pub const SOLD_OUT_MESSAGE: &str = "No more tickets available";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RaffleStatus {
    Active,
    Finalized,
}

impl RaffleStatus {
    pub fn label(self) -> &'static str {
        match self {
            RaffleStatus::Active => "ACTIVE",
            RaffleStatus::Finalized => "FINALIZED",
        }
    }
}

pub fn raffle_status(raffle: &Raffle) -> RaffleStatus {
    if raffle.is_finished {
        RaffleStatus::Finalized
    } else {
        RaffleStatus::Active
    }
}

/// What the buy area of the detail view offers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuyControl {
    /// Quantity editor plus buy button.
    Quantity,
    /// Raffle is still active but every ticket is sold.
    SoldOut,
    /// Finished raffles sell nothing.
    Hidden,
}

pub fn buy_control(raffle: &Raffle) -> BuyControl {
    if raffle.is_finished {
        BuyControl::Hidden
    } else if raffle.num_tickets == raffle.max_tickets {
        BuyControl::SoldOut
    } else {
        BuyControl::Quantity
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimPrizeView {
    Button,
    ClaimedNote,
    Hidden,
}

pub fn claim_prize_view(raffle: &Raffle, viewer: &Identity) -> ClaimPrizeView {
    if !raffle.is_finished {
        return ClaimPrizeView::Hidden;
    }
    if raffle.winner_claimed {
        return ClaimPrizeView::ClaimedNote;
    }
    if raffle.winner == *viewer {
        return ClaimPrizeView::Button;
    }
    ClaimPrizeView::Hidden
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimRevenueView {
    /// Button labeled with the claimable amount in base units.
    Button { amount_base: u64 },
    ClaimedNote,
    Hidden,
}

pub fn claim_revenue_view(raffle: &Raffle, viewer: &Identity) -> ClaimRevenueView {
    if !raffle.is_finished {
        return ClaimRevenueView::Hidden;
    }
    if raffle.owner_claimed {
        return ClaimRevenueView::ClaimedNote;
    }
    if raffle.owner == *viewer {
        return ClaimRevenueView::Button {
            amount_base: revenue_base_units(raffle),
        };
    }
    ClaimRevenueView::Hidden
}

/// Ticket sales the raffle owner can claim once finished.
pub fn revenue_base_units(raffle: &Raffle) -> u64 {
    raffle.price.saturating_mul(raffle.num_tickets)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketRow {
    pub owner: String,
    pub count: u64,
    pub winner: bool,
}

impl TicketRow {
    pub fn winner_marker(&self) -> &'static str {
        if self.winner { "Yes" } else { "-" }
    }
}

pub fn ticket_rows(raffle: &Raffle, tickets: &[Ticket]) -> Vec<TicketRow> {
    tickets
        .iter()
        .map(|ticket| TicketRow {
            owner: format::short_address(&identity_hex(&ticket.owner)),
            count: ticket.num_tickets,
            winner: raffle.is_finished && ticket.owner == raffle.winner,
        })
        .collect()
}

/// One raffle as rendered in the listing grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleCard {
    pub token_contract: fuels::types::ContractId,
    pub token_id: u64,
    pub title: String,
    pub status: RaffleStatus,
    pub price_display: f64,
    pub tickets_sold: u64,
    pub max_tickets: u64,
    pub end_date: String,
    pub image_url: Option<String>,
}

pub fn raffle_card(raffle: &Raffle, symbol: &str, image_url: Option<String>) -> RaffleCard {
    RaffleCard {
        token_contract: raffle.token_contract,
        token_id: raffle.token_id,
        title: format!("{} #{}", symbol, raffle.token_id),
        status: raffle_status(raffle),
        price_display: format::display_units(raffle.price),
        tickets_sold: raffle.num_tickets,
        max_tickets: raffle.max_tickets,
        end_date: format::end_date_string(raffle.creation_date, raffle.duration_in_days),
        image_url,
    }
}

/// Stable listing order, independent of fetch completion order.
pub fn sort_cards(cards: &mut [RaffleCard]) {
    cards.sort_by(|a, b| {
        (a.token_contract, a.token_id).cmp(&(b.token_contract, b.token_id))
    });
}

pub fn identity_hex(identity: &Identity) -> String {
    match identity {
        Identity::Address(addr) => format!("0x{}", hex::encode(*addr)),
        Identity::ContractId(cid) => format!("0x{}", hex::encode(*cid)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;
    use crate::test_helpers::{address_identity, sample_raffle, sample_ticket};

    #[test]
    fn buy_control__sold_out_raffle_stays_active_but_closes_sales() {
        // given
        let mut raffle = sample_raffle();
        raffle.num_tickets = raffle.max_tickets;

        // when / then
        assert_eq!(raffle_status(&raffle), RaffleStatus::Active);
        assert_eq!(buy_control(&raffle), BuyControl::SoldOut);
    }

    #[test]
    fn buy_control__finished_raffle_hides_the_buy_area() {
        // given
        let mut raffle = sample_raffle();
        raffle.is_finished = true;

        // when / then
        assert_eq!(buy_control(&raffle), BuyControl::Hidden);
    }

    #[test]
    fn claim_prize_view__winner_of_finished_raffle_sees_the_button() {
        // given
        let viewer = address_identity(0x11);
        let mut raffle = sample_raffle();
        raffle.is_finished = true;
        raffle.winner = viewer.clone();

        // when / then
        assert_eq!(claim_prize_view(&raffle, &viewer), ClaimPrizeView::Button);
    }

    #[test]
    fn claim_prize_view__already_claimed_prize_renders_a_note() {
        // given
        let viewer = address_identity(0x11);
        let mut raffle = sample_raffle();
        raffle.is_finished = true;
        raffle.winner = viewer.clone();
        raffle.winner_claimed = true;

        // when / then
        assert_eq!(
            claim_prize_view(&raffle, &viewer),
            ClaimPrizeView::ClaimedNote
        );
    }

    #[test]
    fn claim_prize_view__hidden_while_raffle_is_running() {
        // given
        let viewer = address_identity(0x11);
        let raffle = sample_raffle();

        // when / then
        assert_eq!(claim_prize_view(&raffle, &viewer), ClaimPrizeView::Hidden);
    }

    #[test]
    fn claim_revenue_view__owner_sees_button_with_ticket_revenue() {
        // given
        let owner = address_identity(0xAA);
        let mut raffle = sample_raffle();
        raffle.is_finished = true;

        // when
        let view = claim_revenue_view(&raffle, &owner);

        // then
        assert_eq!(
            view,
            ClaimRevenueView::Button {
                amount_base: raffle.price * raffle.num_tickets
            }
        );
    }

    #[test]
    fn claim_revenue_view__non_owner_sees_nothing() {
        // given
        let stranger = address_identity(0x22);
        let mut raffle = sample_raffle();
        raffle.is_finished = true;

        // when / then
        assert_eq!(
            claim_revenue_view(&raffle, &stranger),
            ClaimRevenueView::Hidden
        );
    }

    #[test]
    fn ticket_rows__marks_the_winner_once_finished() {
        // given
        let winner = address_identity(0x33);
        let other = address_identity(0x44);
        let mut raffle = sample_raffle();
        raffle.is_finished = true;
        raffle.winner = winner.clone();
        let tickets = vec![sample_ticket(winner, 2), sample_ticket(other, 5)];

        // when
        let rows = ticket_rows(&raffle, &tickets);

        // then
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].winner_marker(), "Yes");
        assert_eq!(rows[1].winner_marker(), "-");
        assert_eq!(rows[1].count, 5);
    }

    #[test]
    fn sort_cards__orders_by_contract_then_token_id() {
        // given
        let mut a = sample_raffle();
        a.token_id = 9;
        let mut b = sample_raffle();
        b.token_id = 2;
        let mut cards = vec![
            raffle_card(&a, "NFT", None),
            raffle_card(&b, "NFT", None),
        ];

        // when
        sort_cards(&mut cards);

        // then
        assert_eq!(cards[0].token_id, 2);
        assert_eq!(cards[1].token_id, 9);
    }
}
