use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Account that paid for the creation
    pub creator: Pubkey,
    /// Maximum number of distinct depositors
    pub max_deposits: u32,
    /// Unix timestamp at which deposits close
    pub deadline: i64,
    /// Disambiguating index used in the PDA seeds
    pub index: u64,
}

/// Event emitted when a deposit is accepted
#[event]
pub struct Deposited {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the depositor
    pub depositor: Pubkey,
    /// Lamports transferred in this deposit
    pub amount: u64,
    /// Number of depositors after this deposit
    pub participant_count: u32,
    /// Sum of all accepted deposits
    pub total_deposited: u64,
}

/// Event emitted when the distribution is triggered
#[event]
pub struct DistributionStarted {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Account that triggered the distribution
    pub caller: Pubkey,
    /// Number of depositors paid out
    pub participant_count: u32,
    /// Lamports sent to each depositor
    pub share: u64,
    /// Lamports left in the distributor after the split
    pub remainder: u64,
}

/// Event emitted for every payout transfer
#[event]
pub struct ShareTransferred {
    pub distributor: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
