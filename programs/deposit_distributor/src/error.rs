use anchor_lang::prelude::*;

// Variant order fixes the numeric error codes (6000 + ordinal) that clients
// assert on. Append new variants at the end.
#[error_code]
pub enum DistributorError {
    // Lifecycle errors
    #[msg("Distribution has already started")]
    DistributionAlreadyStarted,
    #[msg("Deposit deadline has been reached")]
    DeadlineReached,
    #[msg("Deposit deadline has not been reached yet")]
    DeadlineNotReached,

    // Admission errors
    #[msg("Maximum number of deposits reached")]
    DepositLimitReached,
    #[msg("User has already deposited")]
    AlreadyDeposited,

    // Configuration errors
    #[msg("Max deposits must be between 1 and MAX_DEPOSITS")]
    InvalidMaxDeposits,
    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    // Amount validation errors
    #[msg("Deposit amount is below the minimum deposit")]
    InvalidDepositAmount,

    // Payout account errors
    #[msg("Participant accounts count does not match the number of depositors")]
    ParticipantAccountsMismatch,
    #[msg("Participant account does not match the recorded depositor")]
    ParticipantAccountMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // Payout account errors (appended)
    #[msg("Participant account must be writable")]
    ParticipantAccountNotWritable,
}
