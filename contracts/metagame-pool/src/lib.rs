#![no_std]

use soroban_sdk::{contract, contractclient, Address, Env, Vec};

mod contract_pool;
mod errors;
mod storage;
mod tests;
mod types;

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

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

pub trait PoolTrait {
    fn stake(env: Env, staker: Address, amount: i128);

    fn stake_for(env: Env, funder: Address, staker: Address, amount: i128);

    fn unstake(env: Env, staker: Address, amount: i128);

    fn approve(env: Env, staker: Address, spender: Address, amount: i128);

    fn spend(env: Env, spender: Address, staker: Address, receiver: Address, amount: i128);

    fn checkpoint_timestamps(env: Env, staker: Address) -> Vec<u64>;

    fn checkpoints(env: Env, staker: Address, timestamps: Vec<u64>) -> Vec<i128>;

    fn staked_balance(env: Env, staker: Address) -> i128;

    fn spend_allowance(env: Env, staker: Address, spender: Address) -> i128;

    fn total_staked(env: Env) -> i128;

    fn recover_token(env: Env, caller: Address, token: Address, amount: i128);
}
