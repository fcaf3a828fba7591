use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{requests::product::ProductFilter, response::product::ProductResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
    }

    fn complete(&self, method: Method, started: Instant, is_success: bool, message: &str) {
        let status = if is_success {
            info!("✅ {message}");
            StatusUtils::Success
        } else {
            error!("❌ {message}");
            StatusUtils::Error
        };

        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<ProductResponse>, ServiceError> {
        if filter.is_empty() {
            info!("🔍 Finding all products");
        } else {
            info!(
                "🔍 Finding products | name: {:?}, barcode: {:?}",
                filter.name, filter.barcode
            );
        }
        let started = Instant::now();

        match self.query.find_all(filter).await {
            Ok(products) => {
                self.complete(
                    Method::Get,
                    started,
                    true,
                    &format!("Retrieved {} products", products.len()),
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(e) => {
                self.complete(
                    Method::Get,
                    started,
                    false,
                    &format!("Failed to list products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");
        let started = Instant::now();

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete(
                    Method::Get,
                    started,
                    true,
                    &format!("Found product {id}: {product}"),
                );
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.complete(
                    Method::Get,
                    started,
                    false,
                    &format!("Product {id} not found"),
                );
                Err(ServiceError::NotFound(format!("Product with id {id} not found")))
            }
            Err(e) => {
                self.complete(
                    Method::Get,
                    started,
                    false,
                    &format!("Failed to fetch product {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
