//! DTOs module - Data Transfer Objects
//!
//! DTOs keep the external (API) representation separate from the internal one (entities).

pub mod item;
pub mod query;

pub use item::{CreateItemDTO, ItemDTO, UpdateItemDTO};
pub use query::{DEFAULT_LIST_LIMIT, ListItemsQuery, MAX_LIST_LIMIT};
