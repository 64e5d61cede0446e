use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    errors::Errors,
    types::{Checkpoint, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

fn extend_persistent_ttl(env: &Env, key: &Storage) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .extend_ttl::<Storage>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_permissions(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Permissions)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotInitialized))
}
pub fn set_permissions(env: &Env, permissions: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Permissions, permissions);
}

pub fn get_pool_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::PoolToken)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotInitialized))
}
pub fn set_pool_token(env: &Env, token: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::PoolToken, token);
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<Storage, i128>(&Storage::TotalStaked)
        .unwrap_or(0)
}
pub fn set_total_staked(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set::<Storage, i128>(&Storage::TotalStaked, &total);
}

pub fn get_checkpoints(env: &Env, staker: &Address) -> Vec<Checkpoint> {
    env.storage()
        .persistent()
        .get::<Storage, Vec<Checkpoint>>(&Storage::Checkpoints(staker.clone()))
        .unwrap_or_else(|| Vec::new(env))
}
pub fn set_checkpoints(env: &Env, staker: &Address, checkpoints: &Vec<Checkpoint>) {
    let key = Storage::Checkpoints(staker.clone());

    env.storage()
        .persistent()
        .set::<Storage, Vec<Checkpoint>>(&key, checkpoints);

    extend_persistent_ttl(env, &key);
}

pub fn get_allowance(env: &Env, staker: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get::<Storage, i128>(&Storage::Allowance(staker.clone(), spender.clone()))
        .unwrap_or(0)
}
pub fn set_allowance(env: &Env, staker: &Address, spender: &Address, amount: i128) {
    let key = Storage::Allowance(staker.clone(), spender.clone());

    env.storage().persistent().set::<Storage, i128>(&key, &amount);

    extend_persistent_ttl(env, &key);
}
