use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::transfer_lamports;
use crate::event::*;

/**
 * Account context for depositing into a distributor
 *
 * The depositor signs and transfers lamports into the distributor PDA.
 * Admission is decided by the distributor state: not distributed yet,
 * before the deadline, below capacity and not deposited before.
 *
 * Access Control: Any signer, once per distributor
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The distributor receiving the deposit
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

    /// The depositor funding the deposit
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// System program for the lamport transfer
    pub system_program: Program<'info, System>,
}

/**
 * Admits the signer as a depositor and moves `amount` lamports into the distributor
 *
 * @param ctx - The account context containing distributor and depositor accounts
 * @param amount - Lamports to deposit, at least the rent-exempt minimum of an empty account
 */
pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let min_deposit = Rent::get()?.minimum_balance(0);
    let depositor_key = ctx.accounts.depositor.key();

    // ===== EFFECTS PHASE (State Updates) =====

    let distributor = &mut ctx.accounts.distributor;
    distributor.deposit(depositor_key, amount, current_time, min_deposit)?;

    let distributor_key = distributor.key();
    let participant_count = distributor.participant_count();
    let total_deposited = distributor.total_deposited;

    // ===== INTERACTIONS PHASE (Lamport Transfer) =====

    transfer_lamports(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    emit_cpi!(Deposited {
        distributor: distributor_key,
        depositor: depositor_key,
        amount,
        participant_count,
        total_deposited,
    });

    Ok(())
}
