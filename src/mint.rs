use soroban_sdk::{Address, Env, String};

use crate::access::bump_entry;
use crate::catalog::{self, MAX_URI_LEN};
use crate::error::Error;
use crate::storage_types::DataKey;

// u32::MAX has ten decimal digits.
const MAX_ID_DIGITS: usize = 10;

/// Ids are handed out from 0 with no gaps, so the next id is also the supply.
pub fn read_next_token_id(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0)
}

pub fn read_token_owner(e: &Env, token_id: u32) -> Result<Address, Error> {
    let key = DataKey::TokenOwner(token_id);
    let owner = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_entry(e, &key);
    Ok(owner)
}

pub fn read_nft_balance(e: &Env, owner: &Address) -> u32 {
    let key = DataKey::NftBalance(owner.clone());
    match e.storage().persistent().get::<_, u32>(&key) {
        Some(held) => {
            bump_entry(e, &key);
            held
        }
        None => 0,
    }
}

/// Assigns the next id to `to` and returns it.
pub fn mint_to(e: &Env, to: &Address) -> Result<u32, Error> {
    let token_id = read_next_token_id(e);
    let next = token_id.checked_add(1).ok_or(Error::ArithmeticError)?;
    let held = read_nft_balance(e, to)
        .checked_add(1)
        .ok_or(Error::ArithmeticError)?;

    let owner_key = DataKey::TokenOwner(token_id);
    let held_key = DataKey::NftBalance(to.clone());
    e.storage().persistent().set(&owner_key, to);
    e.storage().persistent().set(&held_key, &held);
    bump_entry(e, &owner_key);
    bump_entry(e, &held_key);
    e.storage().instance().set(&DataKey::NextTokenId, &next);

    Ok(token_id)
}

/// Base URI followed by the decimal token id.
pub fn token_uri(e: &Env, token_id: u32) -> Result<String, Error> {
    read_token_owner(e, token_id)?;

    // write_uri caps the base at MAX_URI_LEN, so it always fits in buf.
    let base = catalog::read_uri(e);
    let base_len = base.len() as usize;

    let mut buf = [0u8; MAX_URI_LEN as usize + MAX_ID_DIGITS];
    base.copy_into_slice(&mut buf[..base_len]);

    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut start = MAX_ID_DIGITS;
    let mut n = token_id;
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let tail = &digits[start..];
    let end = base_len + tail.len();
    buf[base_len..end].copy_from_slice(tail);

    Ok(String::from_bytes(e, &buf[..end]))
}
