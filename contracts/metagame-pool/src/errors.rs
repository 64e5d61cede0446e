use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    NotInitialized = 1,
    NotAuthorized = 2,
    AmountTooLow = 3,
    InsufficientStake = 4,
    AllowanceExceeded = 5,
    StakeFailed = 6,
    UnstakeFailed = 7,
    SpendFailed = 8,
    RecoverExceedsFree = 9,
}
