//! ItemRepository - persistence for items

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateItemDTO, UpdateItemDTO};
use crate::entities::Item;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct ItemRepository {
    connection_pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Items ordered by id, skipping `offset` rows and returning at most `limit`.
    /// An offset past the end gives an empty list.
    #[instrument(skip(self))]
    pub async fn list(&self, offset: u64, limit: u32) -> Result<Vec<Item>, Error> {
        debug!("Listing items");
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, nom, prix FROM items ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        // SQLite takes a signed OFFSET
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Fetched {} items", items.len());
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl Create<Item, CreateItemDTO> for ItemRepository {
    #[instrument(skip(self, data), fields(nom = %data.nom))]
    async fn create(&self, data: &CreateItemDTO) -> Result<Item, Error> {
        debug!("Creating new item");
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (nom, prix) VALUES (?, ?) RETURNING id, nom, prix",
        )
        .bind(&data.nom)
        .bind(data.prix)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Item created with id {}", item.id);
        Ok(item)
    }
}

impl Read<Item, i64> for ItemRepository {
    #[instrument(skip(self))]
    async fn read(&self, id: &i64) -> Result<Option<Item>, Error> {
        debug!("Reading item");
        sqlx::query_as::<_, Item>("SELECT id, nom, prix FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<Item, UpdateItemDTO, i64> for ItemRepository {
    #[instrument(skip(self, data))]
    async fn update(&self, id: &i64, data: &UpdateItemDTO) -> Result<Option<Item>, Error> {
        debug!("Updating item");
        // NULL binds keep the stored value, so absent fields are left untouched
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET nom = COALESCE(?, nom), prix = COALESCE(?, prix)
            WHERE id = ?
            RETURNING id, nom, prix
            "#,
        )
        .bind(data.nom.as_deref())
        .bind(data.prix)
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if item.is_some() {
            info!("Item updated");
        } else {
            debug!("No item to update");
        }
        Ok(item)
    }
}

impl Delete<i64> for ItemRepository {
    #[instrument(skip(self))]
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        debug!("Deleting item");
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Item deleted");
        }
        Ok(deleted)
    }
}
