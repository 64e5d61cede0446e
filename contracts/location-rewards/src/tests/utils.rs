#![cfg(test)]

extern crate std;

use soroban_sdk::{contract, contractimpl, symbol_short, testutils::Ledger, Address, Env, String};

pub fn forward(env: &Env, secs: u64) {
    env.ledger().with_mut(|ledger| {
        ledger.timestamp += secs;
    });
}

#[contract]
pub struct MockHouseData;

#[contractimpl]
impl MockHouseData {
    pub fn set_membership(env: Env, member: Address, location: String, member_of: bool) {
        env.storage()
            .persistent()
            .set(&(symbol_short!("member"), member, location), &member_of);
    }

    pub fn get_membership(env: Env, member: Address, location: String) -> bool {
        env.storage()
            .persistent()
            .get(&(symbol_short!("member"), member, location))
            .unwrap_or(false)
    }

    pub fn set_multiplier(env: Env, member: Address, location: String, bps: u32) {
        env.storage()
            .persistent()
            .set(&(symbol_short!("mult"), member, location), &bps);
    }

    pub fn get_multiplier(env: Env, member: Address, location: String) -> u32 {
        env.storage()
            .persistent()
            .get(&(symbol_short!("mult"), member, location))
            .unwrap_or(0)
    }
}

#[contract]
pub struct MockPassOracle;

#[contractimpl]
impl MockPassOracle {
    pub fn set_verified(env: Env, who: Address, verified: bool) {
        env.storage().persistent().set(&who, &verified);
    }

    pub fn is_verified(env: Env, who: Address) -> bool {
        env.storage().persistent().get(&who).unwrap_or(false)
    }
}
