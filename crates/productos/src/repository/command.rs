use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{NewProduct, ProductChanges},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO productos (nombre, codigo_barra, precio, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, codigo_barra, precio, stock
            "#,
        )
        .bind(&product.name)
        .bind(&product.barcode)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", result.id, result);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // $5 tells whether stock was supplied at all, since $6 may be a legitimate NULL.
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE productos
            SET nombre = COALESCE($2, nombre),
                codigo_barra = COALESCE($3, codigo_barra),
                precio = COALESCE($4, precio),
                stock = CASE WHEN $5 THEN $6 ELSE stock END
            WHERE id = $1
            RETURNING id, nombre, codigo_barra, precio, stock
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.barcode.as_deref())
        .bind(changes.price)
        .bind(changes.stock.is_some())
        .bind(changes.stock.flatten())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if let Some(product) = &result {
            info!("🔄 Updated product ID {} ({})", product.id, product);
        }
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("🗑️ Deleted product ID {}", id);
        }
        Ok(deleted)
    }
}
