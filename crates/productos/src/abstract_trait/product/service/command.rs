use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

/// Write side of the catalog. Bodies arrive as raw JSON so that an unknown id
/// is reported before anything about the body.
#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(&self, body: Value) -> Result<ProductResponse, ServiceError>;
    async fn update_product(&self, id: i32, body: Value) -> Result<ProductResponse, ServiceError>;
    async fn patch_product(&self, id: i32, body: Value) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
