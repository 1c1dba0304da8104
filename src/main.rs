// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{io, net::SocketAddr, process::ExitCode, sync::Arc};

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use site_backend::{
    api::{cors_layer, router},
    auth::{AdminCredentials, AuthError, CredentialVerifier},
    config::{AppConfig, ConfigError, LogFormat, DEFAULT_LOG_FILTER},
    providers::{FileStoreError, LocalFileStore, Notifier, NotifyError, ResendNotifier},
    state::AppState,
    storage::{seed::seed_default_content, DocumentStorage, StorageError, StoragePaths},
};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("uploads directory error: {0}")]
    Uploads(#[from] FileStoreError),

    #[error("admin credentials error: {0}")]
    Credentials(#[from] AuthError),

    #[error("email notifier error: {0}")]
    Notifier(#[from] NotifyError),

    #[error("invalid bind address: {0}")]
    Address(String),

    #[error("server error: {0}")]
    Server(#[from] io::Error),
}

type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn try_init_tracing(format: LogFormat) -> Result<(), TracingInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = fmt().with_env_filter(env_filter).with_writer(io::stdout);
    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.compact().try_init(),
    }
}

fn init_tracing() {
    if let Err(e) = try_init_tracing(LogFormat::from_env()) {
        eprintln!("failed to initialize tracing, logs are disabled: {e}");
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let mut storage = DocumentStorage::new(StoragePaths::new(config.database_dir()));
    storage.initialize()?;
    if config.seed_default_content {
        let inserted = seed_default_content(&storage)?;
        info!(inserted, "Default content seeding finished");
    }

    let file_store = LocalFileStore::new(&config.uploads_dir);
    file_store.initialize()?;

    // argon2 runs once here; the plaintext is not kept
    let admin = AdminCredentials::from_plaintext(&config.admin_email, &config.admin_password)?;
    let credentials = CredentialVerifier::new(
        admin,
        config.jwt_secret.as_bytes(),
        chrono::Duration::hours(config.token_ttl_hours),
    );

    let mut state = AppState::new(storage, credentials, Arc::new(file_store));
    match ResendNotifier::from_config(&config.email)? {
        Some(notifier) => {
            info!(to = %config.email.contact_email, "Contact notifications enabled");
            let notifier: Arc<dyn Notifier> = Arc::new(notifier);
            state = state.with_notifier(notifier);
        }
        None => warn!("RESEND_API_KEY not set; contact notifications disabled"),
    }

    let app = router(state, cors_layer(&config.cors_origins), &config.uploads_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| StartupError::Address(format!("{}:{} ({e})", config.host, config.port)))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Site backend listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}
