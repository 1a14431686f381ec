//! Repositories module - every database operation goes through here
//!
//! Each repository owns a handle on the connection pool and runs one SQL
//! statement per operation. Queries are checked at runtime (`query_as` with
//! `FromRow`), so building the crate needs no live database.

pub mod item;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

pub use item::ItemRepository;
