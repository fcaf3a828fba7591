use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query_repo: DynProductQueryRepository,
    pub command_repo: DynProductCommandRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            query_repo: Arc::new(ProductQueryRepository::new(pool.clone())),
            command_repo: Arc::new(ProductCommandRepository::new(pool)),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            query_repo,
            command_repo,
        } = deps;

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(query_repo.clone(), registry));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            query_repo,
            command_repo,
            registry,
        ));

        Self {
            product_query,
            product_command,
        }
    }
}
