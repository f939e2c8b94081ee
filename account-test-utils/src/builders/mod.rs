//! Test data builders

mod account;

pub use account::AccountBuilder;
