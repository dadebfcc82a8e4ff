pub mod models;
pub mod routes;
pub mod views;

use async_trait::async_trait;
use axum::Router;

use lectern_kernel::{InitCtx, Module};

use crate::state::Catalog;

/// Author catalog module.
pub struct AuthorModule {
    catalog: Catalog,
}

#[async_trait]
impl Module for AuthorModule {
    fn name(&self) -> &'static str {
        "author"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "author module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.catalog.clone())
    }
}

/// Create a new instance of the author module.
pub fn create_module(catalog: Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorModule { catalog })
}
