#![allow(non_snake_case)]

use open_raffles::{
    format,
    test_helpers::{address_identity, sample_raffle, sample_ticket, token_contract},
    views::{
        BuyControl, ClaimPrizeView, ClaimRevenueView, RaffleStatus, buy_control,
        claim_prize_view, claim_revenue_view, raffle_card, raffle_status, sort_cards,
        ticket_rows,
    },
};

#[test]
fn raffle_flow__selling_out_closes_sales_but_keeps_the_raffle_active() {
    // given
    let mut raffle = sample_raffle();
    assert_eq!(buy_control(&raffle), BuyControl::Quantity);

    // when: the remaining tickets sell
    raffle.num_tickets = raffle.max_tickets;

    // then
    assert_eq!(raffle_status(&raffle), RaffleStatus::Active);
    assert_eq!(buy_control(&raffle), BuyControl::SoldOut);
}

#[test]
fn raffle_flow__execution_unlocks_claims_for_winner_and_owner_only() {
    // given
    let winner = address_identity(0x11);
    let owner = address_identity(0xAA);
    let stranger = address_identity(0x22);
    let mut raffle = sample_raffle();

    // when: the raffle gets executed
    raffle.is_finished = true;
    raffle.winner = winner.clone();

    // then
    assert_eq!(buy_control(&raffle), BuyControl::Hidden);
    assert_eq!(claim_prize_view(&raffle, &winner), ClaimPrizeView::Button);
    assert_eq!(claim_prize_view(&raffle, &stranger), ClaimPrizeView::Hidden);
    assert_eq!(
        claim_revenue_view(&raffle, &owner),
        ClaimRevenueView::Button {
            amount_base: raffle.price * raffle.num_tickets
        }
    );
    assert_eq!(
        claim_revenue_view(&raffle, &stranger),
        ClaimRevenueView::Hidden
    );
}

#[test]
fn raffle_flow__both_claims_settle_into_notes() {
    // given
    let winner = address_identity(0x11);
    let owner = address_identity(0xAA);
    let mut raffle = sample_raffle();
    raffle.is_finished = true;
    raffle.winner = winner.clone();

    // when
    raffle.winner_claimed = true;
    raffle.owner_claimed = true;

    // then
    assert_eq!(
        claim_prize_view(&raffle, &winner),
        ClaimPrizeView::ClaimedNote
    );
    assert_eq!(
        claim_revenue_view(&raffle, &owner),
        ClaimRevenueView::ClaimedNote
    );
}

#[test]
fn raffle_flow__ticket_table_tracks_buyers_until_a_winner_is_drawn() {
    // given
    let alice = address_identity(0x11);
    let bob = address_identity(0x22);
    let mut raffle = sample_raffle();
    let tickets = vec![sample_ticket(alice.clone(), 2), sample_ticket(bob, 1)];

    // when: still running, nobody is marked
    let running = ticket_rows(&raffle, &tickets);

    // then
    assert!(running.iter().all(|row| row.winner_marker() == "-"));

    // when: execution picks alice
    raffle.is_finished = true;
    raffle.winner = alice;
    let finished = ticket_rows(&raffle, &tickets);

    // then
    assert_eq!(finished[0].winner_marker(), "Yes");
    assert_eq!(finished[1].winner_marker(), "-");
}

#[test]
fn listing__cards_render_symbol_price_and_progress() {
    // given
    let raffle = sample_raffle();

    // when
    let card = raffle_card(&raffle, "PUNK", Some("https://ipfs.io/ipfs/QmX/1.png".into()));

    // then
    assert_eq!(card.title, "PUNK #1");
    assert_eq!(card.price_display, format::display_units(raffle.price));
    assert_eq!(card.tickets_sold, 3);
    assert_eq!(card.max_tickets, 10);
    assert_eq!(card.image_url.as_deref(), Some("https://ipfs.io/ipfs/QmX/1.png"));
}

#[test]
fn listing__sort_is_stable_across_contracts_and_token_ids() {
    // given: raffles from two collections, fetched out of order
    let mut late = sample_raffle();
    late.token_contract = token_contract(0x09);
    late.token_id = 1;
    let mut second = sample_raffle();
    second.token_id = 5;
    let first = sample_raffle();
    let mut cards = vec![
        raffle_card(&late, "B", None),
        raffle_card(&second, "A", None),
        raffle_card(&first, "A", None),
    ];

    // when
    sort_cards(&mut cards);

    // then
    assert_eq!(cards[0].token_id, 1);
    assert_eq!(cards[1].token_id, 5);
    assert_eq!(cards[2].token_contract, token_contract(0x09));
}
