use anchor_lang::prelude::*;
use crate::state::*;

/// Read-only context for the membership query
#[derive(Accounts)]
pub struct IsUserDeposited<'info> {
    pub distributor: Account<'info, DepositDistributor>,
}

/// Returns whether `user` has deposited, in every lifecycle state
pub fn handle_is_user_deposited(ctx: Context<IsUserDeposited>, user: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.distributor.is_user_deposited(&user))
}
