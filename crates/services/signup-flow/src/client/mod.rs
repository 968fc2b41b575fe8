//! Bundled authentication backends.

mod in_memory;
mod password;

pub use in_memory::{AccountSummary, InMemoryAccounts};
pub use password::HashedPassword;
