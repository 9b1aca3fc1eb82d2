//! Persistence of the last delivered status message.

pub mod state_store;

pub use state_store::StateStore;
