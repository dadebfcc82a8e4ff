pub mod models;
pub mod routes;
pub mod views;

use async_trait::async_trait;
use axum::Router;

use lectern_kernel::{InitCtx, Module};

use crate::state::Catalog;

/// Genre catalog module.
pub struct GenreModule {
    catalog: Catalog,
}

#[async_trait]
impl Module for GenreModule {
    fn name(&self) -> &'static str {
        "genre"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "genre module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.catalog.clone())
    }
}

/// Create a new instance of the genre module.
pub fn create_module(catalog: Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(GenreModule { catalog })
}
