use fuels::prelude::{
    ContractId,
    WalletUnlocked,
};

pub mod deployment;

pub mod format;

pub mod metadata;

pub mod views;

pub mod wallets;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub mod raffle_types {
    use fuels::macros::abigen;

    abigen!(Contract(
        name = "RaffleRegistry",
        abi = "abi/open-raffles-abi.json"
    ));
}

pub mod nft_types {
    use fuels::macros::abigen;

    abigen!(Contract(name = "NftCollection", abi = "abi/nft-abi.json"));
}

pub fn registry_instance(
    id: &ContractId,
    wallet: WalletUnlocked,
) -> raffle_types::RaffleRegistry<WalletUnlocked> {
    raffle_types::RaffleRegistry::new(*id, wallet)
}

pub fn nft_instance(
    id: &ContractId,
    wallet: WalletUnlocked,
) -> nft_types::NftCollection<WalletUnlocked> {
    nft_types::NftCollection::new(*id, wallet)
}
