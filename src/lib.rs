#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

mod access;
mod catalog;
mod error;
mod events;
mod ledger;
mod mint;
mod storage_types;

pub use error::Error;
pub use storage_types::CollectionConfig;

#[contract]
pub struct MyNft721;

#[contractimpl]
impl MyNft721 {
    /// Initialize the collection with its owner and configuration. Only can be called once.
    ///
    /// # Arguments
    /// * `owner` - Immutable owner; always treated as an admin
    /// * `config` - Name, symbol, payment token and the starting price and base URI
    pub fn initialize(e: Env, owner: Address, config: CollectionConfig) -> Result<(), Error> {
        owner.require_auth();
        if access::has_owner(&e) {
            return Err(Error::AlreadyInitialized);
        }

        catalog::write_price(&e, config.price)?;
        catalog::write_uri(&e, &config.base_uri)?;
        catalog::write_config(&e, &config);
        access::write_owner(&e, &owner);
        access::bump_instance(&e);

        events::initialized(&e, owner, config.payment_token);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, Error> {
        access::read_owner(&e)
    }

    /// Grant admin rights to `admin`. Only the owner may call this; adding
    /// an existing admin is a no-op.
    pub fn add_admin(e: Env, caller: Address, admin: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&e, &caller)?;
        access::bump_instance(&e);

        if access::write_admin(&e, &admin) {
            events::admin_added(&e, caller, admin);
        }
        Ok(())
    }

    pub fn is_admin(e: Env, who: Address) -> bool {
        access::is_admin(&e, &who)
    }

    /// Explicitly added admins, in the order they were added. The owner is not listed.
    pub fn admins(e: Env) -> Vec<Address> {
        access::read_admins(&e)
    }

    pub fn set_price(e: Env, caller: Address, price: i128) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&e, &caller)?;
        access::bump_instance(&e);

        catalog::write_price(&e, price)?;
        events::price_set(&e, caller, price);
        Ok(())
    }

    pub fn get_price(e: Env) -> i128 {
        catalog::read_price(&e)
    }

    pub fn set_uri(e: Env, caller: Address, uri: String) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&e, &caller)?;
        access::bump_instance(&e);

        catalog::write_uri(&e, &uri)?;
        events::uri_set(&e, caller, uri);
        Ok(())
    }

    pub fn get_uri(e: Env) -> String {
        catalog::read_uri(&e)
    }

    /// Move `amount` of the payment token from `caller` into their ledger entry.
    pub fn deposit(e: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        access::read_owner(&e)?;
        ledger::check_amount(amount)?;
        access::bump_instance(&e);

        let balance = ledger::credit(&e, &caller, amount)?;
        ledger::receive(&e, &caller, amount)?;

        events::deposited(&e, caller, amount, balance);
        Ok(())
    }

    /// Pay `amount` out of the caller's own ledger entry. The entry is
    /// debited before the token transfer is made.
    pub fn withdraw(e: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        access::read_owner(&e)?;
        ledger::check_amount(amount)?;
        access::bump_instance(&e);

        let balance = ledger::debit(&e, &caller, amount)?;
        ledger::send(&e, &caller, amount)?;

        events::withdrawn(&e, caller, amount, balance);
        Ok(())
    }

    pub fn user_balances(e: Env, user: Address) -> i128 {
        ledger::read_balance(&e, &user)
    }

    pub fn balance_of(e: Env, user: Address) -> i128 {
        ledger::read_balance(&e, &user)
    }

    /// Mint revenue held by the contract, separate from user entries.
    pub fn treasury(e: Env) -> i128 {
        ledger::read_treasury(&e)
    }

    pub fn withdraw_treasury(
        e: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&e, &caller)?;
        ledger::check_amount(amount)?;
        access::bump_instance(&e);

        let remaining = ledger::debit_treasury(&e, amount)?;
        ledger::send(&e, &to, amount)?;

        events::treasury_withdrawn(&e, to, amount, remaining);
        Ok(())
    }

    /// Mint the next token to `caller` against `payment`, which must cover
    /// the current price. Returns the new token id.
    pub fn mint_nft(e: Env, caller: Address, payment: i128) -> Result<u32, Error> {
        caller.require_auth();
        access::read_owner(&e)?;
        ledger::check_amount(payment)?;

        let price = catalog::read_price(&e);
        if payment < price {
            log!(&e, "Payment below price", payment, price);
            return Err(Error::PriceNotMet);
        }

        access::bump_instance(&e);
        let token_id = mint::mint_to(&e, &caller)?;
        ledger::credit_treasury(&e, payment)?;
        ledger::receive(&e, &caller, payment)?;

        events::minted(&e, caller, token_id, payment);
        Ok(token_id)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, Error> {
        mint::read_token_owner(&e, token_id)
    }

    pub fn token_uri(e: Env, token_id: u32) -> Result<String, Error> {
        mint::token_uri(&e, token_id)
    }

    pub fn total_supply(e: Env) -> u32 {
        mint::read_next_token_id(&e)
    }

    /// Number of tokens held by `owner`.
    pub fn nft_balance(e: Env, owner: Address) -> u32 {
        mint::read_nft_balance(&e, &owner)
    }

    pub fn name(e: Env) -> Result<String, Error> {
        Ok(catalog::read_config(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, Error> {
        Ok(catalog::read_config(&e)?.symbol)
    }

    pub fn payment_token(e: Env) -> Result<Address, Error> {
        Ok(catalog::read_config(&e)?.payment_token)
    }
}
