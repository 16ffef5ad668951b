//! Menu services.

mod contribution;
mod executor;

pub use contribution::MenuContributionPoint;
pub use executor::{CommandOutcome, MenuCommandExecutor};
