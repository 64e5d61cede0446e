use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::{
    errors::Errors,
    types::{CupConfig, Score, Storage},
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

pub fn get_config(env: &Env) -> CupConfig {
    env.storage()
        .instance()
        .get::<Storage, CupConfig>(&Storage::Config)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotInitialized))
}
pub fn set_config(env: &Env, config: &CupConfig) {
    env.storage()
        .instance()
        .set::<Storage, CupConfig>(&Storage::Config, config);
}

pub fn get_location_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<Storage, u32>(&Storage::LocationCount)
        .unwrap_or(0)
}
pub fn set_location_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set::<Storage, u32>(&Storage::LocationCount, &count);
}

pub fn get_award_tiers(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get::<Storage, Vec<u32>>(&Storage::AwardTiers)
        .unwrap_or_else(|| Vec::new(env))
}
pub fn set_award_tiers(env: &Env, tiers: &Vec<u32>) {
    env.storage()
        .instance()
        .set::<Storage, Vec<u32>>(&Storage::AwardTiers, tiers);
}

pub fn get_location_id(env: &Env, name: &String) -> Option<u32> {
    env.storage()
        .persistent()
        .get::<Storage, u32>(&Storage::LocationId(name.clone()))
}
pub fn set_location_id(env: &Env, name: &String, id: u32) {
    let key = Storage::LocationId(name.clone());

    env.storage().persistent().set::<Storage, u32>(&key, &id);

    extend_persistent_ttl(env, &key);
}

pub fn get_location_name(env: &Env, id: u32) -> Option<String> {
    env.storage()
        .persistent()
        .get::<Storage, String>(&Storage::LocationName(id))
}
pub fn set_location_name(env: &Env, id: u32, name: &String) {
    let key = Storage::LocationName(id);

    env.storage().persistent().set::<Storage, String>(&key, name);

    extend_persistent_ttl(env, &key);
}

pub fn get_location_staker(env: &Env, id: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get::<Storage, Address>(&Storage::LocationStaker(id))
}
pub fn set_location_staker(env: &Env, id: u32, staker: &Address) {
    let key = Storage::LocationStaker(id);

    env.storage().persistent().set::<Storage, Address>(&key, staker);

    extend_persistent_ttl(env, &key);
}

pub fn get_score(env: &Env, epoch: u64, id: u32) -> Option<Score> {
    env.storage()
        .persistent()
        .get::<Storage, Score>(&Storage::Score(epoch, id))
}
pub fn set_score(env: &Env, epoch: u64, id: u32, score: &Score) {
    let key = Storage::Score(epoch, id);

    env.storage().persistent().set::<Storage, Score>(&key, score);

    extend_persistent_ttl(env, &key);
}
