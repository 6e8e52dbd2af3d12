use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds and hard limits shared by the instructions of the deposit distributor.
 */

/// ===== CAPACITY CONSTANTS =====

/// Upper bound accepted for `max_deposits` at creation
/// - Every participant is passed as a writable account to `start_distribution`,
///   so the bound follows the per-transaction account limit
/// - Also bounds the participant vector stored in the distributor account
#[constant]
pub const MAX_DEPOSITS: u32 = 20;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", max_deposits, deadline, index]
/// - The distributor address is a pure function of its construction parameters
/// - `index` separates campaigns that would otherwise share the same address
#[constant]
pub const DISTRIBUTOR_SEED: &str = "distributor";
