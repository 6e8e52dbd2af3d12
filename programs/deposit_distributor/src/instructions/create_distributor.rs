use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for creating a new deposit distributor
 *
 * This instruction is the one-time construction of a distributor:
 * - Creates the distributor PDA from its construction parameters
 * - Records the configuration and starts in the Open state
 *
 * The `init` constraint makes creation succeed exactly once per
 * (max_deposits, deadline, index) triple.
 *
 * Access Control: Any signer can create a distributor
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(max_deposits: u32, deadline: i64, index: u64)]
pub struct CreateDistributor<'info> {
    /// The distributor account (PDA)
    /// - Stores configuration, depositors and the distributed flag
    /// - Holds the deposited lamports on top of its rent-exempt minimum
    /// - Derived from: ["distributor", max_deposits, deadline, index]
    /// - Space is clamped so out-of-range values reach the handler validation
    #[account(
        init,
        payer = creator,
        space = DepositDistributor::space(max_deposits.min(MAX_DEPOSITS)),
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            max_deposits.to_le_bytes().as_ref(),
            deadline.to_le_bytes().as_ref(),
            index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, DepositDistributor>,

    /// The account paying for the distributor creation
    /// - Gets no special rights over the distributor
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new deposit distributor
 *
 * @param ctx - The account context containing distributor and creator accounts
 * @param max_deposits - Maximum number of distinct depositors
 * @param deadline - Unix timestamp at which deposits close and distribution opens
 * @param index - Disambiguating index, only used in the PDA seeds
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    max_deposits: u32,
    deadline: i64,
    index: u64,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();

    let state = DepositDistributor::new(
        ctx.bumps.distributor,
        max_deposits,
        deadline,
        index,
        creator,
        current_time,
    )?;

    let distributor = &mut ctx.accounts.distributor;
    distributor.set_inner(state);
    let distributor_key = distributor.key();

    emit_cpi!(DistributorCreated {
        distributor: distributor_key,
        creator,
        max_deposits,
        deadline,
        index,
    });

    Ok(())
}
