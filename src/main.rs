use anyhow::Context;

use lectern_app::{modules, seed, Catalog};
use lectern_kernel::settings::Settings;
use lectern_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load lectern settings")?;
    lectern_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "lectern bootstrap starting"
    );

    let catalog = Catalog::new();
    if settings.store.seed_demo {
        seed::populate(&catalog)
            .await
            .context("failed to seed demo data")?;
    }

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &catalog);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!("lectern bootstrap complete");

    lectern_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;
    Ok(())
}
