pub mod balances;
pub mod blocks;
pub mod core;
pub mod types;

// Re-export main types
pub use types::{BlockRow, Database};

#[cfg(test)]
pub mod test_helpers;
