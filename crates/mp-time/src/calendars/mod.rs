//! Built-in holiday tables.

/// Singapore public holidays.
pub mod singapore;
