use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CupConfig {
    pub permissions: Address,
    pub token: Address,
    pub treasury: Address,
    pub data_view: Address,
    pub pass_oracle: Address,
    pub epoch_duration: u64,
    pub current_epoch: u64, // start timestamp doubles as the epoch id
    pub next_epoch: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    pub score: u64,
    pub order: u32, // 1-based rank, 0 = unscored
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Config,              // : CupConfig
    LocationCount,       // : u32
    AwardTiers,          // : Vec<u32>
    LocationId(String),  // (name) : u32
    LocationName(u32),   // (id) : String
    LocationStaker(u32), // (id) : address
    Score(u64, u32),     // (epoch, id) : Score
}
