pub mod cache;
pub mod database;

pub use cache::{placeholder_name, MemoryNameCache, NameCache, NameResolver};
pub use database::{CardDatabase, CardDatabaseError, NameLookup};
