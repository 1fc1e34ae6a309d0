pub mod add_delegate;
pub mod transfer;
pub mod transfer_recurring;

pub use add_delegate::*;
pub use transfer::*;
pub use transfer_recurring::*;
