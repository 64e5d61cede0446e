#![no_std]

use soroban_sdk::{contract, contractclient, Address, Env, String};

mod contract_rewards;
mod errors;
mod storage;
mod tests;
mod types;

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;
pub const SCALAR_7: i128 = 1_0000000;
pub const DEFAULT_REWARD_DURATION: u64 = 60 * 60 * 24 * 7;

#[contract]
pub struct Contract;

#[contractclient(name = "HouseDataClient")]
pub trait HouseData {
    fn get_membership(env: Env, member: Address, location: String) -> bool;

    fn get_multiplier(env: Env, member: Address, location: String) -> u32;
}

#[contractclient(name = "PassOracleClient")]
pub trait PassOracle {
    fn is_verified(env: Env, who: Address) -> bool;
}

pub trait RewardsTrait {
    fn stake(env: Env, member: Address, amount: i128);

    fn withdraw(env: Env, member: Address, amount: i128);

    fn claim(env: Env, member: Address) -> i128;

    fn earned(env: Env, member: Address) -> i128;

    fn reward_per_token(env: Env) -> i128;

    fn staked(env: Env, member: Address) -> i128;

    fn total_staked(env: Env) -> i128;

    fn reward_rate(env: Env) -> i128;

    fn period_finish(env: Env) -> u64;

    fn manager(env: Env) -> Address;

    fn location(env: Env) -> String;

    fn member_multiplier(env: Env, member: Address) -> u32;

    fn set_reward_duration(env: Env, duration: u64);

    fn notify_reward_amount(env: Env, amount: i128);

    fn recover_token(env: Env, token: Address, to: Address, amount: i128);
}
