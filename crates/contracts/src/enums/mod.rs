pub mod claim_status;

pub use claim_status::{ClaimAction, ClaimStatus};
