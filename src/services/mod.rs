pub mod classifier;
pub mod gateway;
pub mod prompt;
pub mod trip_store;
