use crate::raffle_types::{AuthorizedContract, Raffle, Ticket};
use fuels::types::{Address, ContractId, Identity};

pub fn address_identity(fill: u8) -> Identity {
    Identity::Address(Address::new([fill; 32]))
}

pub fn token_contract(fill: u8) -> ContractId {
    ContractId::new([fill; 32])
}

/// A running raffle: 3 of 10 tickets sold at 0.25 coins each.
pub fn sample_raffle() -> Raffle {
    Raffle {
        token_contract: token_contract(0x07),
        token_id: 1,
        price: 250_000_000,
        num_tickets: 3,
        max_tickets: 10,
        creation_date: 1_609_459_200,
        duration_in_days: 7,
        owner: address_identity(0xAA),
        winner: Identity::Address(Address::zeroed()),
        is_finished: false,
        owner_claimed: false,
        winner_claimed: false,
    }
}

pub fn sample_ticket(owner: Identity, num_tickets: u64) -> Ticket {
    Ticket { owner, num_tickets }
}

pub fn sample_authorized_contract(fill: u8, symbol: &str) -> AuthorizedContract {
    AuthorizedContract {
        instance: token_contract(fill),
        symbol: symbol.to_string(),
    }
}
