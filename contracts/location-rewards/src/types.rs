use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RewardsConfig {
    pub manager: Address,
    pub token: Address,
    pub location: String,
    pub data_view: Address,
    pub pass_oracle: Address,
    pub duration: u64,
    pub rate: i128, // reward per second, scaled by SCALAR_7
    pub period_finish: u64,
    pub last_update: u64,
    pub reward_per_token: i128, // scaled by SCALAR_7
    pub total_staked: i128,
    pub owed: i128, // streamed but unclaimed rewards, reserved from sweeps
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub staked: i128,
    pub paid_per_token: i128,
    pub accrued: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Config,            // : RewardsConfig
    Position(Address), // (member) : Position
}
