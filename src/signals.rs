use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::config::PlanningConfig;
use crate::planning::PlanningData;

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Planning data reload
#[cfg(unix)]
pub fn setup_signal_handlers(
    planning: Arc<ArcSwap<PlanningData>>,
    planning_config: PlanningConfig,
) -> Result<(broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>)> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sighup = signal(SignalKind::hangup())?;

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading planning data");
                    if let Err(e) = reload_planning(&planning, &planning_config) {
                        error!("Failed to reload planning data: {}", e);
                    } else {
                        info!("Planning data reloaded successfully");
                    }
                }
            }
        }
    });

    Ok((shutdown_tx, handle))
}

/// Windows placeholder - only Ctrl+C is supported
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _planning: Arc<ArcSwap<PlanningData>>,
    _planning_config: PlanningConfig,
) -> Result<(broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>)> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    Ok((shutdown_tx, handle))
}

/// Reload the planning table and swap it in
///
/// A reload never falls back to the built-in table: if the file cannot be
/// read or parsed, the current table stays in place.
pub fn reload_planning(
    planning: &Arc<ArcSwap<PlanningData>>,
    planning_config: &PlanningConfig,
) -> Result<()> {
    let Some(path) = planning_config.data_file.as_deref() else {
        info!("No planning data file configured, keeping current table");
        return Ok(());
    };

    let data = PlanningData::load(path)?;
    info!(
        "New planning data loaded: {} area ranges, {} autoclave ranges",
        data.areas.len(),
        data.autoclaves.len()
    );

    planning.store(Arc::new(data));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::fallback;
    use std::io::Write;

    #[tokio::test]
    async fn test_setup_signal_handlers() {
        let planning = Arc::new(ArcSwap::from_pointee(fallback::builtin()));
        let (shutdown_tx, _handle) =
            setup_signal_handlers(planning, PlanningConfig::default()).unwrap();

        let mut rx = shutdown_tx.subscribe();
        shutdown_tx.send(ShutdownSignal::Graceful).unwrap();

        let received = rx.recv().await.unwrap();
        assert!(matches!(received, ShutdownSignal::Graceful));
    }

    #[test]
    fn test_reload_swaps_planning_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[area]]
range = "0-10"
area_sq_ft = 90
"#
        )
        .unwrap();

        let planning = Arc::new(ArcSwap::from_pointee(fallback::builtin()));
        let config = PlanningConfig {
            data_file: Some(file.path().to_path_buf()),
            fallback_on_error: true,
        };

        reload_planning(&planning, &config).unwrap();
        assert_eq!(planning.load().areas.len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_current_data() {
        let planning = Arc::new(ArcSwap::from_pointee(fallback::builtin()));
        let before = planning.load().areas.len();
        let config = PlanningConfig {
            data_file: Some("/nonexistent/cssd_planning.toml".into()),
            fallback_on_error: true,
        };

        assert!(reload_planning(&planning, &config).is_err());
        assert_eq!(planning.load().areas.len(), before);
    }
}
