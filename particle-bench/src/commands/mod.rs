//! Command implementations

pub mod defaults;
pub mod run;
