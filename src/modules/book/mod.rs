pub mod models;
pub mod routes;
pub mod views;

use async_trait::async_trait;
use axum::Router;

use lectern_kernel::{InitCtx, Module};

use crate::state::Catalog;

/// Book catalog module.
pub struct BookModule {
    catalog: Catalog,
}

#[async_trait]
impl Module for BookModule {
    fn name(&self) -> &'static str {
        "book"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "book module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.catalog.clone())
    }
}

/// Create a new instance of the book module.
pub fn create_module(catalog: Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookModule { catalog })
}
