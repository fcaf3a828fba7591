use crate::{
    domain::requests::product::{NewProduct, ProductChanges},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &NewProduct) -> Result<ProductModel, RepositoryError>;
    /// `Ok(None)` when no row has the given id.
    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    /// `Ok(false)` when no row has the given id.
    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError>;
}
