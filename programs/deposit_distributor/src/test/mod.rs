use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use crate::error::DistributorError;
use crate::state::DepositDistributor;


/// Fixed "current time" used as creation time by the fixtures
pub const NOW: i64 = 1_700_000_000;

/// Deposit window used by the fixtures (3 days)
pub const WINDOW: i64 = 3 * 24 * 60 * 60;

/// Deadline of the fixture distributors
pub const DEADLINE: i64 = NOW + WINDOW;

/// Rent-exempt minimum of an empty account under the default rent
/// - Smallest deposit the program accepts
pub const MIN_DEPOSIT: u64 = 890_880;

/// Deposit amount used by the fixtures (2.6 SOL)
pub const DEPOSIT_AMOUNT: u64 = 2_600_000_000;

/// Open distributor created at `NOW` with a 3 day window
pub fn open_distributor(max_deposits: u32) -> DepositDistributor {
    DepositDistributor::new(255, max_deposits, DEADLINE, 1, Pubkey::new_unique(), NOW)
        .expect("fixture configuration is valid")
}

pub fn users(count: usize) -> Vec<Pubkey> {
    (0..count).map(|_| Pubkey::new_unique()).collect()
}

/// Asserts that `result` failed with the program error `expected`
pub fn assert_program_error<T: std::fmt::Debug>(result: Result<T>, expected: DistributorError) {
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
