pub mod a001_claim;
