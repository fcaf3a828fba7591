#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use productos::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::{NewProduct, ProductChanges, ProductFilter},
    handler::AppRouter,
    model::product::Product,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: Vec<Product>,
}

/// Table stand-in that enforces the barcode unique constraint the way the
/// database would.
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: Mutex<Store>,
}

impl InMemoryProductRepository {
    pub fn snapshot(&self) -> Vec<Product> {
        self.store.lock().unwrap().rows.clone()
    }

    pub fn seed(&self, name: &str, barcode: &str, price: f64, stock: Option<i32>) -> Product {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let product = Product {
            id: store.next_id,
            name: name.into(),
            barcode: barcode.into(),
            price,
            stock,
        };
        store.rows.push(product.clone());
        product
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .filter(|p| matches_filter(filter, p))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|p| p.barcode == barcode).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(&self, req: &NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        if store.rows.iter().any(|p| p.barcode == req.barcode) {
            return Err(RepositoryError::AlreadyExists(
                "productos_codigo_barra_key".into(),
            ));
        }

        store.next_id += 1;
        let product = Product {
            id: store.next_id,
            name: req.name.clone(),
            barcode: req.barcode.clone(),
            price: req.price,
            stock: req.stock,
        };
        store.rows.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.store.lock().unwrap();

        if let Some(barcode) = &changes.barcode {
            if store
                .rows
                .iter()
                .any(|p| p.id != id && &p.barcode == barcode)
            {
                return Err(RepositoryError::AlreadyExists(
                    "productos_codigo_barra_key".into(),
                ));
            }
        }

        Ok(store.rows.iter_mut().find(|p| p.id == id).map(|product| {
            changes.apply_to(product);
            product.clone()
        }))
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let before = store.rows.len();
        store.rows.retain(|p| p.id != id);
        Ok(store.rows.len() < before)
    }
}

/// Same semantics as the `ILIKE` / `=` filter in the SQL repository.
pub fn matches_filter(filter: &ProductFilter, product: &Product) -> bool {
    let name_ok = filter.name.as_ref().is_none_or(|name| {
        product
            .name
            .to_lowercase()
            .contains(&name.to_lowercase())
    });
    let barcode_ok = filter
        .barcode
        .as_ref()
        .is_none_or(|barcode| &product.barcode == barcode);

    name_ok && barcode_ok
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingProductRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for FailingProductRepository {
    async fn find_all(&self, _filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }

    async fn find_by_barcode(&self, _barcode: &str) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for FailingProductRepository {
    async fn create_product(&self, _req: &NewProduct) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }

    async fn update_product(
        &self,
        _id: i32,
        _changes: &ProductChanges,
    ) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }

    async fn delete_product(&self, _id: i32) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx_timeout()))
    }
}

fn sqlx_timeout() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

pub fn deps(repo: Arc<InMemoryProductRepository>) -> DependenciesInjectDeps {
    DependenciesInjectDeps {
        query_repo: repo.clone(),
        command_repo: repo,
    }
}

pub fn test_app() -> (Router, Arc<InMemoryProductRepository>) {
    let repo = Arc::new(InMemoryProductRepository::default());
    let app = AppRouter::build(AppState::with_deps(deps(repo.clone())));
    (app, repo)
}

pub fn failing_app() -> Router {
    let repo = Arc::new(FailingProductRepository);
    AppRouter::build(AppState::with_deps(DependenciesInjectDeps {
        query_repo: repo.clone(),
        command_repo: repo,
    }))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
