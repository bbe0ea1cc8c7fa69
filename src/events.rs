use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const CONTRACT: Symbol = symbol_short!("nft721");

pub fn initialized(e: &Env, owner: Address, payment_token: Address) {
    e.events()
        .publish((CONTRACT, symbol_short!("init")), (owner, payment_token));
}

pub fn admin_added(e: &Env, by: Address, admin: Address) {
    e.events()
        .publish((CONTRACT, symbol_short!("admin"), by), admin);
}

pub fn price_set(e: &Env, by: Address, price: i128) {
    e.events()
        .publish((CONTRACT, symbol_short!("price"), by), price);
}

pub fn uri_set(e: &Env, by: Address, uri: String) {
    e.events().publish((CONTRACT, symbol_short!("uri"), by), uri);
}

pub fn deposited(e: &Env, user: Address, amount: i128, balance: i128) {
    e.events()
        .publish((CONTRACT, symbol_short!("deposit"), user), (amount, balance));
}

pub fn withdrawn(e: &Env, user: Address, amount: i128, balance: i128) {
    e.events()
        .publish((CONTRACT, symbol_short!("withdraw"), user), (amount, balance));
}

pub fn minted(e: &Env, to: Address, token_id: u32, payment: i128) {
    e.events()
        .publish((CONTRACT, symbol_short!("mint"), to), (token_id, payment));
}

pub fn treasury_withdrawn(e: &Env, to: Address, amount: i128, remaining: i128) {
    e.events().publish(
        (CONTRACT, symbol_short!("treasury"), to),
        (amount, remaining),
    );
}
