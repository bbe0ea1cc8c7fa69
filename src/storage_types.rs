use soroban_sdk::{contracttype, Address, String};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// User balances and token ownership must outlive idle periods.
pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Collection settings fixed at initialization. `price` and `base_uri` are
/// only the starting values; admins may change them later.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    /// SEP-41 token used for deposits, withdrawals and mint payments.
    pub payment_token: Address,
    pub price: i128,
    pub base_uri: String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance
    Owner,
    Config,
    Admins,
    Price,
    BaseUri,
    NextTokenId,
    Treasury,

    // Persistent
    Admin(Address),
    UserBalance(Address),
    TokenOwner(u32),
    NftBalance(Address),
}
