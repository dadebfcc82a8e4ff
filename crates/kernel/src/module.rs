use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Core module trait that all lectern modules must implement.
///
/// A module owns one slice of the catalog: its routes, its startup work, and
/// its shutdown work. Entity modules are mounted under `/{module_name}`; a
/// module may instead ask to be merged at the site root (the home module).
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module.
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context.
    /// Called during application startup, before the server binds.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Whether the module's routes are merged at `/` instead of being
    /// nested under `/{module_name}`.
    fn mount_at_root(&self) -> bool {
        false
    }

    /// Start background tasks for this module.
    /// Called after all modules are initialized.
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources.
    /// Called during application shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
