pub mod claim_flow;
pub mod merkle;
pub mod signature;
pub mod token;

pub use claim_flow::*;
pub use merkle::*;
pub use signature::*;
pub use token::*;
