#![no_std]

use soroban_sdk::{contract, contractclient, Address, Env, String, Vec};

mod contract_admin;
mod contract_cup;
mod errors;
mod storage;
mod tests;
mod types;

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;
pub const TIER_DENOMINATOR: i128 = 1000;

pub const ROLE_GLOBAL_ADMIN: u32 = 1;
pub const ROLE_SYSTEMS_ADMIN: u32 = 2;
pub const ROLE_TRANSFER_ADMIN: u32 = 3;
pub const ROLE_ANY: u32 = 4;

#[contract]
pub struct Contract;

#[contractclient(name = "PermissionsClient")]
pub trait Permissions {
    fn has_role(env: Env, role: u32, who: Address) -> bool;
}

#[contractclient(name = "LocationRewardsClient")]
pub trait LocationRewards {
    fn manager(env: Env) -> Address;

    fn location(env: Env) -> String;

    fn set_reward_duration(env: Env, duration: u64);

    fn notify_reward_amount(env: Env, amount: i128);

    fn recover_token(env: Env, token: Address, to: Address, amount: i128);
}

pub trait CupTrait {
    fn add_location(env: Env, caller: Address, name: String, staker: Address);

    fn get_location_rewards_staker(env: Env, name: String) -> Option<Address>;

    fn location_count(env: Env) -> u32;

    fn location_name(env: Env, id: u32) -> String;

    fn report_location_scores(
        env: Env,
        caller: Address,
        epoch: u64,
        scores: Vec<u64>,
        locations: Vec<String>,
    );

    fn get_location_score_and_order(env: Env, epoch: u64, location: String) -> (u64, u32);

    fn assign_award_tiers(env: Env, caller: Address, tiers: Vec<u32>);

    fn distribute_rewards(env: Env, caller: Address);

    fn current_epoch(env: Env) -> u64;

    fn next_epoch(env: Env) -> u64;

    fn award_tiers(env: Env) -> Vec<u32>;
}

pub trait AdminTrait {
    fn set_epoch_duration(env: Env, caller: Address, duration: u64);

    fn set_treasury(env: Env, caller: Address, treasury: Address);

    fn set_data_view(env: Env, caller: Address, data_view: Address);

    fn treasury(env: Env) -> Address;

    fn data_view(env: Env) -> Address;

    fn recover_token(env: Env, caller: Address, token: Address, amount: i128);

    fn recover_token_from_location(
        env: Env,
        caller: Address,
        location: String,
        token: Address,
        amount: i128,
    );
}
