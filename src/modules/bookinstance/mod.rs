pub mod models;
pub mod routes;
pub mod views;

use async_trait::async_trait;
use axum::Router;

use lectern_kernel::{InitCtx, Module};

use crate::state::Catalog;

/// Book instance ("copy") catalog module.
pub struct BookInstanceModule {
    catalog: Catalog,
}

#[async_trait]
impl Module for BookInstanceModule {
    fn name(&self) -> &'static str {
        "bookinstance"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "bookinstance module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.catalog.clone())
    }
}

/// Create a new instance of the bookinstance module.
pub fn create_module(catalog: Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookInstanceModule { catalog })
}
