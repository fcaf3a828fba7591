use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::ProductFilter, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products with filter: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, nombre, codigo_barra, precio, stock
            FROM productos
            WHERE ($1::TEXT IS NULL OR nombre ILIKE $1 ESCAPE '\')
              AND ($2::TEXT IS NULL OR codigo_barra = $2)
            "#,
        )
        .bind(filter.name_pattern())
        .bind(filter.barcode.as_deref())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, nombre, codigo_barra, precio, stock
            FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🏷️ Fetching product by barcode: {}", barcode);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, nombre, codigo_barra, precio, stock
            FROM productos
            WHERE codigo_barra = $1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
