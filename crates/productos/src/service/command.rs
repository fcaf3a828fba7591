use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{NewProduct, ProductRequest, UpdateMode},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use serde_json::Value;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::time::Instant;
use tracing::{error, info};

const BARCODE_FIELD: &str = "codigo_barra";
const BARCODE_TAKEN: &str = "Product with this codigo_barra already exists.";

#[derive(Clone)]
pub struct ProductCommandService {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self {
            query,
            command,
            metrics,
        }
    }

    fn complete<T>(
        &self,
        method: Method,
        started: Instant,
        result: &Result<T, ServiceError>,
        operation: &str,
    ) {
        let status = match result {
            Ok(_) => {
                info!("✅ {operation} succeeded");
                StatusUtils::Success
            }
            Err(e) => {
                error!("❌ {operation} failed: {e}");
                StatusUtils::Error
            }
        };

        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }

    /// Fails when `barcode` already belongs to a product other than `owner`.
    async fn ensure_barcode_available(
        &self,
        barcode: &str,
        owner: Option<i32>,
    ) -> Result<(), ServiceError> {
        match self.query.find_by_barcode(barcode).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ServiceError::field(BARCODE_FIELD, BARCODE_TAKEN))
            }
            _ => Ok(()),
        }
    }

    async fn create(&self, body: Value) -> Result<ProductResponse, ServiceError> {
        let new_product = NewProduct::try_from(ProductRequest::from_json(body)?)?;

        self.ensure_barcode_available(&new_product.barcode, None)
            .await?;

        let product = self
            .command
            .create_product(&new_product)
            .await
            .map_err(barcode_conflict)?;

        Ok(ProductResponse::from(product))
    }

    /// Looks the product up before decoding the body, so an unknown id is
    /// reported as not found whatever the body holds.
    async fn apply_changes(
        &self,
        id: i32,
        body: Value,
        mode: UpdateMode,
    ) -> Result<ProductResponse, ServiceError> {
        let existing = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let changes = ProductRequest::from_json(body)?.into_changes(mode)?;

        if let Some(barcode) = &changes.barcode {
            if *barcode != existing.barcode {
                self.ensure_barcode_available(barcode, Some(id)).await?;
            }
        }

        let product = self
            .command
            .update_product(id, &changes)
            .await
            .map_err(barcode_conflict)?
            .ok_or_else(|| not_found(id))?;

        Ok(ProductResponse::from(product))
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Product with id {id} not found"))
}

/// A unique violation raised by storage is reported like the pre-check would.
fn barcode_conflict(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::AlreadyExists(_) => ServiceError::field(BARCODE_FIELD, BARCODE_TAKEN),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(&self, body: Value) -> Result<ProductResponse, ServiceError> {
        info!("🆕 Creating product");
        let started = Instant::now();

        let result = self.create(body).await;
        self.complete(Method::Post, started, &result, "Create product");

        result
    }

    async fn update_product(&self, id: i32, body: Value) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Replacing product ID={id}");
        let started = Instant::now();

        let result = self.apply_changes(id, body, UpdateMode::Full).await;
        self.complete(Method::Put, started, &result, "Update product");

        result
    }

    async fn patch_product(&self, id: i32, body: Value) -> Result<ProductResponse, ServiceError> {
        info!("🩹 Patching product ID={id}");
        let started = Instant::now();

        let result = self.apply_changes(id, body, UpdateMode::Partial).await;
        self.complete(Method::Patch, started, &result, "Patch product");

        result
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID={id}");
        let started = Instant::now();

        let result = match self.command.delete_product(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(not_found(id)),
            Err(e) => Err(ServiceError::Repo(e)),
        };
        self.complete(Method::Delete, started, &result, "Delete product");

        result
    }
}
