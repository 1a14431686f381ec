//! Entities module - Domain entities
//!
//! Each entity maps one table of the database.

pub mod item;

pub use item::{Item, NOM_MAX_LEN};
