use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    NotInitialized = 1,
    NotAuthorized = 2,
    LocationExists = 3,
    LocationMissing = 4,
    LocationDuplicated = 5,
    StakerNotBound = 6,
    EpochMismatch = 7,
    ReportIncomplete = 8,
    ScoresNotDescending = 9,
    TierCountMismatch = 10,
    TierSumInvalid = 11,
    EpochNotOver = 12,
    NothingToDistribute = 13,
    PullFailed = 14,
    LocationScoreMissing = 15,
    AmountTooLow = 16,
    DurationInvalid = 17,
}
