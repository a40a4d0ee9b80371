//! HTTP server bootstrap.

use crate::config::ServerConfig;
use crate::router::app;
use crate::state::AppState;
use listd_core::db::DbError;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use tokio::net::TcpListener;

#[derive(Debug)]
pub enum ServeError {
    Db(DbError),
    Io(std::io::Error),
}

impl Display for ServeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "database bootstrap failed: {err}"),
            Self::Io(err) => write!(f, "http server failed: {err}"),
        }
    }
}

impl Error for ServeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for ServeError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for ServeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Opens the configured database and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<(), ServeError> {
    let state = AppState::open(&config.db_path)?;
    let addr = config.socket_addr();
    let listener = match TcpListener::bind(addr.as_str()).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "event=server_bind module=api status=error addr={} error={}",
                addr, err
            );
            return Err(err.into());
        }
    };
    run(listener, state, shutdown_signal()).await
}

/// Serves `state` on an already bound listener until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServeError> {
    let local_addr = listener.local_addr()?;
    info!("event=server_start module=api status=ok addr={local_addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=api status=ok addr={local_addr}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_signal module=api status=error error={err}");
    }
}
