//! Custody accounting for the payment token.
//!
//! User entries and the treasury are kept apart: deposits and withdrawals
//! move user entries, mint payments only ever touch the treasury. Every
//! outbound transfer happens after the matching debit has been written.

use soroban_sdk::{log, token, Address, Env};

use crate::access::bump_entry;
use crate::catalog;
use crate::error::Error;
use crate::storage_types::DataKey;

pub fn check_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn read_balance(e: &Env, who: &Address) -> i128 {
    let key = DataKey::UserBalance(who.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            bump_entry(e, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, who: &Address, amount: i128) {
    let key = DataKey::UserBalance(who.clone());
    e.storage().persistent().set(&key, &amount);
    bump_entry(e, &key);
}

pub fn credit(e: &Env, who: &Address, amount: i128) -> Result<i128, Error> {
    let balance = read_balance(e, who)
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;
    write_balance(e, who, balance);
    Ok(balance)
}

pub fn debit(e: &Env, who: &Address, amount: i128) -> Result<i128, Error> {
    let current = read_balance(e, who);
    if current < amount {
        log!(e, "Insufficient balance", who.clone(), current, amount);
        return Err(Error::InsufficientBalance);
    }
    let balance = current
        .checked_sub(amount)
        .ok_or(Error::ArithmeticError)?;
    write_balance(e, who, balance);
    Ok(balance)
}

pub fn read_treasury(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Treasury).unwrap_or(0)
}

pub fn credit_treasury(e: &Env, amount: i128) -> Result<i128, Error> {
    let treasury = read_treasury(e)
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;
    e.storage().instance().set(&DataKey::Treasury, &treasury);
    Ok(treasury)
}

pub fn debit_treasury(e: &Env, amount: i128) -> Result<i128, Error> {
    let current = read_treasury(e);
    if current < amount {
        log!(e, "Insufficient treasury", current, amount);
        return Err(Error::InsufficientBalance);
    }
    let treasury = current
        .checked_sub(amount)
        .ok_or(Error::ArithmeticError)?;
    e.storage().instance().set(&DataKey::Treasury, &treasury);
    Ok(treasury)
}

/// Pulls `amount` of the payment token from `from` into contract custody.
pub fn receive(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let config = catalog::read_config(e)?;
    token::Client::new(e, &config.payment_token).transfer(
        from,
        &e.current_contract_address(),
        &amount,
    );
    Ok(())
}

/// Pays `amount` of the payment token out of contract custody to `to`.
pub fn send(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let config = catalog::read_config(e)?;
    token::Client::new(e, &config.payment_token).transfer(
        &e.current_contract_address(),
        to,
        &amount,
    );
    Ok(())
}
