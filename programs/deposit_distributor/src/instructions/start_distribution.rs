use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::{held_balance, pay_from_program_account, require_writable};
use crate::event::*;

/**
 * Account context for starting the distribution
 *
 * Once the deadline has passed, any signer can trigger the one-shot
 * distribution. Every depositor must be passed as a writable remaining
 * account, in the order they deposited.
 *
 * Access Control: Any signer
 *
 * Business Logic:
 * - The held balance (lamports above rent-exempt minimum) is floor-divided
 *   among the depositors
 * - The remainder of the division stays in the distributor
 * - With no depositors nothing is paid, the distributor still becomes terminal
 */
#[event_cpi]
#[derive(Accounts)]
pub struct StartDistribution<'info> {
    /// The distributor to pay out from
    /// - Derived from: ["distributor", max_deposits, deadline, index]
    #[account(
        mut,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            distributor.max_deposits.to_le_bytes().as_ref(),
            distributor.deadline.to_le_bytes().as_ref(),
            distributor.index.to_le_bytes().as_ref()
        ],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, DepositDistributor>,

    /// The account triggering the distribution
    pub caller: Signer<'info>,
}

/**
 * Marks the distributor as distributed and pays every depositor an equal share
 *
 * @param ctx - The account context; remaining accounts are the depositors
 *
 * Validation Process:
 * 1. Distribution not started yet and deadline reached
 * 2. Remaining accounts match the recorded depositors one to one and are writable
 */
pub fn handle_start_distribution<'info>(
    ctx: Context<'_, '_, 'info, 'info, StartDistribution<'info>>,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let recipients = ctx.remaining_accounts;

    // ===== VALIDATION PHASE =====

    ctx.accounts.distributor.check_distribution(current_time)?;
    ctx.accounts
        .distributor
        .check_recipients(recipients.iter().map(|account| account.key))?;
    require_writable(recipients)?;

    let distributor_info = ctx.accounts.distributor.to_account_info();
    let balance = held_balance(&distributor_info)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let payout = ctx
        .accounts
        .distributor
        .start_distribution(current_time, balance)?;
    let distributor_key = ctx.accounts.distributor.key();

    // ===== INTERACTIONS PHASE (Payouts) =====

    if payout.share > 0 {
        for recipient in recipients {
            pay_from_program_account(&distributor_info, recipient, payout.share)?;

            emit_cpi!(ShareTransferred {
                distributor: distributor_key,
                recipient: recipient.key(),
                amount: payout.share,
            });
        }
    }

    emit_cpi!(DistributionStarted {
        distributor: distributor_key,
        caller: ctx.accounts.caller.key(),
        participant_count: payout.recipients,
        share: payout.share,
        remainder: payout.remainder,
    });

    Ok(())
}
