use soroban_sdk::{Env, String};

use crate::error::Error;
use crate::storage_types::{CollectionConfig, DataKey};

/// Longest base URI accepted, in bytes.
pub const MAX_URI_LEN: u32 = 256;

pub fn read_config(e: &Env) -> Result<CollectionConfig, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(e: &Env, config: &CollectionConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_price(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Price).unwrap_or(0)
}

pub fn write_price(e: &Env, price: i128) -> Result<(), Error> {
    if price < 0 {
        return Err(Error::InvalidAmount);
    }
    e.storage().instance().set(&DataKey::Price, &price);
    Ok(())
}

pub fn read_uri(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&DataKey::BaseUri)
        .unwrap_or_else(|| String::from_str(e, ""))
}

pub fn write_uri(e: &Env, uri: &String) -> Result<(), Error> {
    if uri.len() > MAX_URI_LEN {
        return Err(Error::UriTooLong);
    }
    e.storage().instance().set(&DataKey::BaseUri, uri);
    Ok(())
}
