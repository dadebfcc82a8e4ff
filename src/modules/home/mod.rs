pub mod routes;
pub mod views;

use async_trait::async_trait;
use axum::Router;

use lectern_kernel::{InitCtx, Module};

use crate::state::Catalog;

/// Dashboard and list pages; merged at the site root.
pub struct HomeModule {
    catalog: Catalog,
}

#[async_trait]
impl Module for HomeModule {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "home module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.catalog.clone())
    }

    fn mount_at_root(&self) -> bool {
        true
    }
}

/// Create a new instance of the home module.
pub fn create_module(catalog: Catalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(HomeModule { catalog })
}
