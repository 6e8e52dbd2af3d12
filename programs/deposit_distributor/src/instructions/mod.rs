pub mod create_distributor;
pub mod deposit;
pub mod start_distribution;
pub mod is_user_deposited;

pub use create_distributor::*;
pub use deposit::*;
pub use start_distribution::*;
pub use is_user_deposited::*;
