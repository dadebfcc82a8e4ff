//! Logging and tracing bootstrap.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use lectern_kernel::settings::{LogFormat, TelemetrySettings};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the tracing pipeline.
///
/// Honors `RUST_LOG` when set, defaulting to `info`. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let format = settings.log_format.clone();

    INITIALIZED.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

        tracing::debug!(target: "lectern-telemetry", "telemetry initialized");
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
