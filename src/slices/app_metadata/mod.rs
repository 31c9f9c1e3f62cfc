//! Static application metadata and feature flags.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::AppMetadataAction;
pub use reducer::AppMetadataReducer;
pub use state::{AppMetadataState, Environment, Feature, FeatureFlags};
