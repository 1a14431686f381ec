//! Item DTOs - Data Transfer Objects for items

use crate::entities::Item;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A persisted item as returned to the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ItemDTO {
    pub id: i64,
    pub nom: String,
    pub prix: f64,
}

impl From<Item> for ItemDTO {
    fn from(value: Item) -> Self {
        Self {
            id: value.id,
            nom: value.nom,
            prix: value.prix,
        }
    }
}

/// DTO to create a new item (without id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateItemDTO {
    #[validate(length(min = 1, max = 255, message = "nom must be between 1 and 255 characters"))]
    pub nom: String,

    #[validate(range(exclusive_min = 0.0, message = "prix must be greater than 0"))]
    pub prix: f64,
}

/// DTO for partial updates.
///
/// A field missing from the body stays `None` and is left untouched in the
/// database. An explicit `null` does not deserialize: neither column is nullable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateItemDTO {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "nom must be between 1 and 255 characters"))]
    pub nom: Option<String>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "prix must be greater than 0"))]
    pub prix: Option<f64>,
}

impl UpdateItemDTO {
    pub fn is_empty(&self) -> bool {
        self.nom.is_none() && self.prix.is_none()
    }
}

// only reached when the key is in the body, so null becomes an error instead of None
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
