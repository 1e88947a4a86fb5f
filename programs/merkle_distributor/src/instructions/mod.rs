pub mod create_distributor;
pub mod claim;
pub mod message_digest;
pub mod has_claimed;

pub use create_distributor::*;
pub use claim::*;
pub use message_digest::*;
pub use has_claimed::*;
