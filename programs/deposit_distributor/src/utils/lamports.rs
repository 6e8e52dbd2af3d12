use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::error::*;

/// Moves lamports out of a signer-owned system account through the System Program
pub fn transfer_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer { from, to };

    transfer(CpiContext::new(system_program, cpi_accounts), amount)
}

/// Moves lamports out of an account owned by this program
/// - The System Program cannot debit program-owned accounts, so balances are edited directly
pub fn pay_from_program_account<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}

/// Lamports of an account above the rent-exempt minimum for `data_len` bytes
pub fn distributable(lamports: u64, data_len: usize, rent: &Rent) -> u64 {
    lamports.saturating_sub(rent.minimum_balance(data_len))
}

/// Lamports held by `account` above its rent-exempt minimum
pub fn held_balance(account: &AccountInfo) -> Result<u64> {
    let rent = Rent::get()?;
    Ok(distributable(account.get_lamports(), account.data_len(), &rent))
}

/// Payout recipients are credited directly and must be passed as writable
pub fn require_writable(accounts: &[AccountInfo]) -> Result<()> {
    require!(
        accounts.iter().all(|account| account.is_writable),
        DistributorError::ParticipantAccountNotWritable
    );
    Ok(())
}
