use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Lifecycle of a distributor: `Open` until the one-shot distribution, then `Distributed` forever
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistributorStatus {
    Open,
    Distributed,
}

/// Outcome of an even split of the held balance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payout {
    /// Lamports sent to every depositor
    pub share: u64,
    /// Lamports that could not be split evenly and stay in the distributor
    pub remainder: u64,
    /// Number of depositors receiving `share`
    pub recipients: u32,
}

impl Payout {
    /// Floor-divides `balance` among `recipients`
    /// - With no recipients nothing is paid and the whole balance is the remainder
    pub fn split(balance: u64, recipients: u32) -> Self {
        if recipients == 0 {
            return Self {
                share: 0,
                remainder: balance,
                recipients,
            };
        }

        let divisor = u64::from(recipients);
        Self {
            share: balance / divisor,
            remainder: balance % divisor,
            recipients,
        }
    }

    /// Lamports leaving the distributor
    pub fn total_paid(&self) -> u64 {
        // share * recipients <= balance, cannot overflow
        self.share * u64::from(self.recipients)
    }
}

/**
 * Deposit distributor state account
 *
 * Holds the immutable campaign configuration, the set of depositors and the
 * terminal distribution flag. The lamports deposited are held by this same
 * account on top of its rent-exempt minimum.
 *
 * Derivation: ["distributor", max_deposits, deadline, index]
 *
 * Lifecycle:
 * 1. Created during create_distributor instruction (status Open)
 * 2. Each successful deposit appends the depositor and adds to total_deposited
 * 3. start_distribution pays every depositor an equal share and sets distributed
 * 4. Afterwards only reads succeed
 *
 * Every mutating method validates all of its guards before touching any field,
 * so a rejected call leaves the state exactly as it was.
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DepositDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when the account is loaded again
    pub bump: u8,

    /// Hard cap on the number of distinct depositors
    /// - Fixed at creation, 1..=MAX_DEPOSITS
    pub max_deposits: u32,

    /// Deposit deadline (Unix timestamp)
    /// - Deposits are accepted while now < deadline
    /// - Distribution is allowed once now >= deadline
    pub deadline: i64,

    /// Disambiguating index
    /// - Only part of the PDA seeds, no behavioral effect
    pub index: u64,

    /// Account that paid for the creation
    /// - Informational, grants no privileges
    pub creator: Pubkey,

    /// Terminal flag, set exactly once by start_distribution
    pub distributed: bool,

    /// Sum of all accepted deposit amounts in lamports
    pub total_deposited: u64,

    /// Depositors in admission order
    /// - Unique, never longer than max_deposits
    pub participants: Vec<Pubkey>,
}

impl DepositDistributor {
    /// 8-byte discriminator + fixed fields + 4-byte vector length prefix
    pub const BASE_LEN: usize = 8 + 1 + 4 + 8 + 8 + 32 + 1 + 8 + 4;

    /// Account size able to hold `max_deposits` participants
    pub fn space(max_deposits: u32) -> usize {
        Self::BASE_LEN + max_deposits as usize * 32
    }

    /// Builds the initial `Open` state after validating the configuration
    pub fn new(
        bump: u8,
        max_deposits: u32,
        deadline: i64,
        index: u64,
        creator: Pubkey,
        now: i64,
    ) -> Result<Self> {
        require!(
            max_deposits > 0 && max_deposits <= MAX_DEPOSITS,
            DistributorError::InvalidMaxDeposits
        );
        require!(deadline > now, DistributorError::InvalidDeadline);

        Ok(Self {
            bump,
            max_deposits,
            deadline,
            index,
            creator,
            distributed: false,
            total_deposited: 0,
            participants: Vec::with_capacity(max_deposits as usize),
        })
    }

    pub fn status(&self) -> DistributorStatus {
        if self.distributed {
            DistributorStatus::Distributed
        } else {
            DistributorStatus::Open
        }
    }

    pub fn is_user_deposited(&self, user: &Pubkey) -> bool {
        self.participants.contains(user)
    }

    pub fn participant_count(&self) -> u32 {
        // bounded by max_deposits
        self.participants.len() as u32
    }

    /// Checks whether `depositor` may deposit `amount` at `now`
    ///
    /// Guards run in a fixed order and the first failing one decides the error:
    /// terminal state, deadline, capacity, duplicate depositor, then amount.
    ///
    /// `min_amount` is the rent-exempt minimum of an empty account. Every
    /// deposit is at least that large, so the even share of the balance is too
    /// and a payout can always land in an empty wallet.
    pub fn check_deposit(
        &self,
        depositor: &Pubkey,
        amount: u64,
        now: i64,
        min_amount: u64,
    ) -> Result<()> {
        require!(!self.distributed, DistributorError::DistributionAlreadyStarted);
        require!(now < self.deadline, DistributorError::DeadlineReached);
        require!(
            self.participant_count() < self.max_deposits,
            DistributorError::DepositLimitReached
        );
        require!(
            !self.is_user_deposited(depositor),
            DistributorError::AlreadyDeposited
        );
        require!(
            amount > 0 && amount >= min_amount,
            DistributorError::InvalidDepositAmount
        );
        Ok(())
    }

    /// Admits `depositor` and records `amount`
    pub fn deposit(
        &mut self,
        depositor: Pubkey,
        amount: u64,
        now: i64,
        min_amount: u64,
    ) -> Result<()> {
        self.check_deposit(&depositor, amount, now, min_amount)?;

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;

        self.total_deposited = total_deposited;
        self.participants.push(depositor);
        Ok(())
    }

    /// Checks whether the distribution may start at `now`
    pub fn check_distribution(&self, now: i64) -> Result<()> {
        require!(!self.distributed, DistributorError::DistributionAlreadyStarted);
        require!(now >= self.deadline, DistributorError::DeadlineNotReached);
        Ok(())
    }

    /// Checks that the payout recipients are exactly the depositors, in admission order
    pub fn check_recipients<'a>(
        &self,
        recipients: impl ExactSizeIterator<Item = &'a Pubkey>,
    ) -> Result<()> {
        require!(
            recipients.len() == self.participants.len(),
            DistributorError::ParticipantAccountsMismatch
        );
        for (recipient, participant) in recipients.zip(self.participants.iter()) {
            require_keys_eq!(
                *recipient,
                *participant,
                DistributorError::ParticipantAccountMismatch
            );
        }
        Ok(())
    }

    /// Moves to the terminal state and splits `held_balance` among the depositors
    ///
    /// The caller is responsible for moving the lamports described by the
    /// returned payout; this method only decides the amounts.
    pub fn start_distribution(&mut self, now: i64, held_balance: u64) -> Result<Payout> {
        self.check_distribution(now)?;

        let payout = Payout::split(held_balance, self.participant_count());
        self.distributed = true;
        Ok(payout)
    }
}
