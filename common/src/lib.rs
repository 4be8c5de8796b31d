//! Ethereum JSON-RPC data shapes and block identifier handling.
//!
//! Everything here is pure: no I/O, no store access.

pub mod block_data;
pub mod block_identifier;
pub mod lookup;

pub use block_data::*;
pub use block_identifier::*;
pub use lookup::Lookup;
