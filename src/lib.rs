// Account Mapper - Core Library
// Maps in-memory account records into view shapes, plus key/id utilities

pub mod entities;
pub mod error;
pub mod mapper;
pub mod views;

// Re-export commonly used types
pub use entities::{AccountCategory, AccountRecord};
pub use error::{MapperError, Result};
pub use mapper::{
    provider_fn, AccountMapper, FnProvider, NameProvider, KEY_DELIMITER, KEY_SEGMENT_INDEX,
};
pub use views::{AccountCategoryView, AccountView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
