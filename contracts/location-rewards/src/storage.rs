use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::Errors,
    types::{Position, RewardsConfig, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_config(env: &Env) -> RewardsConfig {
    env.storage()
        .instance()
        .get::<Storage, RewardsConfig>(&Storage::Config)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotInitialized))
}
pub fn set_config(env: &Env, config: &RewardsConfig) {
    env.storage()
        .instance()
        .set::<Storage, RewardsConfig>(&Storage::Config, config);
}

pub fn get_position(env: &Env, member: &Address) -> Position {
    env.storage()
        .persistent()
        .get::<Storage, Position>(&Storage::Position(member.clone()))
        .unwrap_or(Position {
            staked: 0,
            paid_per_token: 0,
            accrued: 0,
        })
}
pub fn set_position(env: &Env, member: &Address, position: &Position) {
    let key = Storage::Position(member.clone());
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .set::<Storage, Position>(&key, position);

    env.storage()
        .persistent()
        .extend_ttl::<Storage>(&key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}
