use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    pub timestamp: u64,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Permissions,                 // : address
    PoolToken,                   // : address
    TotalStaked,                 // : i128
    Checkpoints(Address),        // (staker) : Vec<Checkpoint>
    Allowance(Address, Address), // (staker, spender) : i128
}
