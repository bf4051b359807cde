//! Graceful shutdown
//!
//! On Ctrl+C or SIGTERM the background tasks (the idle cart pruner) are
//! aborted first, then the server drains in-flight requests.

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::{signal, task::JoinHandle};
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

async fn wait_for_signal() -> Result<StopSignal, ShutdownSignalError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map_err(ShutdownSignalError::CtrlC)
            .map(|()| StopSignal::Interrupt)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok(StopSignal::Terminate)
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<StopSignal, ShutdownSignalError>>();

    tokio::select! {
        received = interrupt => received,
        received = terminate => received,
    }
}

/// Abort tasks that would otherwise keep running past the server.
pub(crate) fn stop_background(tasks: &[JoinHandle<()>]) {
    for task in tasks {
        task.abort();
    }
}

/// Wait for a stop signal, stop `background`, then stop the server gracefully.
pub(crate) async fn listen(
    handle: ServerHandle,
    background: Vec<JoinHandle<()>>,
) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = %received, background_tasks = background.len(), "shutting down");

    stop_background(&background);
    handle.stop_graceful(None);

    Ok(())
}
