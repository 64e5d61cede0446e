use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    NotInitialized = 1,
    AmountTooLow = 2,
    NotAMember = 3,
    NotVerified = 4,
    InsufficientBalance = 5,
    StakeFailed = 6,
    WithdrawFailed = 7,
    ClaimFailed = 8,
    DurationInvalid = 9,
    RewardTooHigh = 10,
    RecoverExceedsFree = 11,
}
