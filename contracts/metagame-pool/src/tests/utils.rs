#![cfg(test)]

extern crate std;

use soroban_sdk::{contract, contractimpl, testutils::Ledger, Address, Env};

pub fn forward(env: &Env, secs: u64) {
    env.ledger().with_mut(|ledger| {
        ledger.timestamp += secs;
    });
}

#[contract]
pub struct MockPermissions;

#[contractimpl]
impl MockPermissions {
    pub fn grant_role(env: Env, role: u32, who: Address) {
        env.storage().persistent().set(&(role, who), &true);
    }

    pub fn has_role(env: Env, role: u32, who: Address) -> bool {
        env.storage().persistent().get(&(role, who)).unwrap_or(false)
    }
}
