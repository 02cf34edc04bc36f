//! Client companies known to Qcheck
//!
//! Loaded from the user configuration and queried after sign-in.

mod directory;
mod model;

pub use directory::CompanyDirectory;
pub use model::{Company, CompanyStatus};
