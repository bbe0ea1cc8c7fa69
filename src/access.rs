use soroban_sdk::{log, Address, Env, Vec};

use crate::error::Error;
use crate::storage_types::{
    DataKey, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};

/// Keeps the contract instance (config, owner, price, counters) live.
pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extends a persistent entry that is known to exist.
pub fn bump_entry(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn read_owner(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
    e.storage()
        .instance()
        .set(&DataKey::Admins, &Vec::<Address>::new(e));
}

/// The owner counts as an admin whether or not it was ever added explicitly.
pub fn is_admin(e: &Env, who: &Address) -> bool {
    match e.storage().instance().get::<_, Address>(&DataKey::Owner) {
        Some(owner) if owner == *who => true,
        _ => {
            let key = DataKey::Admin(who.clone());
            match e.storage().persistent().get::<_, bool>(&key) {
                Some(flag) => {
                    bump_entry(e, &key);
                    flag
                }
                None => false,
            }
        }
    }
}

pub fn read_admins(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::Admins)
        .unwrap_or_else(|| Vec::new(e))
}

/// Returns `false` when `admin` was already in the set.
pub fn write_admin(e: &Env, admin: &Address) -> bool {
    let key = DataKey::Admin(admin.clone());
    if e.storage().persistent().has(&key) {
        return false;
    }
    e.storage().persistent().set(&key, &true);
    bump_entry(e, &key);

    let mut admins = read_admins(e);
    admins.push_back(admin.clone());
    e.storage().instance().set(&DataKey::Admins, &admins);
    true
}

pub fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    let owner = read_owner(e)?;
    if owner != *caller {
        log!(e, "Caller is not admin: owner only", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    read_owner(e)?;
    if !is_admin(e, caller) {
        log!(e, "Caller is not admin", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(())
}
