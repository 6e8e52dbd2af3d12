use anchor_lang::prelude::*;

declare_id!("DigkbShuXb961CUPT5qkxc2YcwD5dbgonX1vuJ3W8CFf");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Deposit Distributor Program
 *
 * A Solana program that collects lamport deposits from a bounded set of
 * participants before a deadline and then splits the collected balance
 * equally among them in a single, final distribution.
 *
 * Key Features:
 * - Fixed capacity (max_deposits distinct depositors per distributor)
 * - One deposit per depositor, any positive amount
 * - Deposits close at the deadline, distribution opens at the deadline
 * - One-shot distribution that anyone can trigger, after which the
 *   distributor only answers queries
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Distributor PDA: Stores configuration, depositors and the distributed flag,
 *   and holds the deposited lamports
 *
 * Workflow:
 * 1. Anyone creates a distributor with (max_deposits, deadline, index)
 * 2. Users deposit before the deadline until capacity is reached
 * 3. After the deadline anyone starts the distribution, passing every depositor
 * 4. Depositors receive equal shares; the remainder stays in the distributor
 */
#[program]
pub mod deposit_distributor {
    use super::*;

    /**
     * Creates a new deposit distributor
     *
     * @param ctx - Account context containing distributor and creator accounts
     * @param max_deposits - Maximum number of distinct depositors (1..=MAX_DEPOSITS)
     * @param deadline - Unix timestamp, deposits are accepted strictly before it
     * @param index - Disambiguating index for the distributor address
     *
     * Access Control: Any signer
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        max_deposits: u32,
        deadline: i64,
        index: u64,
    ) -> Result<()> {
        handle_create_distributor(ctx, max_deposits, deadline, index)
    }

    /**
     * Deposits lamports into the distributor
     *
     * @param ctx - Account context containing distributor and depositor accounts
     * @param amount - Lamports to deposit
     *
     * Access Control: Any signer that has not deposited yet
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Starts the one-shot distribution
     *
     * @param ctx - Account context; every depositor is passed as a writable
     *   remaining account in deposit order
     *
     * Access Control: Any signer
     * Note: After this instruction the distributor rejects every mutation
     */
    pub fn start_distribution<'info>(
        ctx: Context<'_, '_, 'info, 'info, StartDistribution<'info>>,
    ) -> Result<()> {
        handle_start_distribution(ctx)
    }

    /**
     * Returns whether a user has deposited
     *
     * @param ctx - Account context containing the distributor
     * @param user - Address to look up
     *
     * Access Control: Read-only, usable through simulation
     */
    pub fn is_user_deposited(ctx: Context<IsUserDeposited>, user: Pubkey) -> Result<bool> {
        handle_is_user_deposited(ctx, user)
    }
}
