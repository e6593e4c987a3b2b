//! Claim details page (MVVM): model fetches, view_model holds state, page renders

pub mod actions;
pub mod line_items;
pub mod model;
pub mod page;
pub mod view_model;

pub use page::ClaimDetails;
