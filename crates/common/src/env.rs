//! Environment/runtime helpers
//!
//! Startup checks that must pass before the storage layer is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Directory that must exist for a file-backed SQLite URL to be openable.
///
/// Returns `None` for in-memory databases and for files in the working directory.
pub fn sqlite_parent_dir(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    let parent = Path::new(path).parent()?;
    if parent.as_os_str().is_empty() || parent == Path::new(".") {
        return None;
    }
    Some(parent.to_path_buf())
}

/// Create the directory holding the SQLite database file if it is missing.
pub async fn ensure_db_dir(url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(url) else {
        return Ok(());
    };
    if tokio::fs::metadata(&dir).await.is_ok() {
        return Ok(());
    }
    warn!(dir = %dir.display(), "database directory missing; creating it");
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "database directory created");
    Ok(())
}

/// Resolves once the process receives Ctrl+C (or SIGTERM on unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
