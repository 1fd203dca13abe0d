// Entity Models
//
// Stored shapes the mapper reads from. Views live in `crate::views`.

pub mod account;

pub use account::{AccountCategory, AccountRecord};
