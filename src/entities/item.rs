//! Item entity - a row of the `items` table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum number of characters allowed in `nom`.
pub const NOM_MAX_LEN: usize = 255;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct Item {
    pub id: i64,
    pub nom: String,
    pub prix: f64,
}
