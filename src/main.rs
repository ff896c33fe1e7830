use anyhow::Result;
use article_manager::application::{
    forms::FormRules,
    ports::{
        security::{CredentialVerifier, PasswordHasher},
        storage::ImageStorage,
        time::Clock,
        util::{SlugGenerator, TokenGenerator},
    },
    services::ApplicationServices,
};
use article_manager::config::AppConfig;
use article_manager::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_manager::infrastructure::{
    database,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    security::{credentials::ConfiguredCredentialVerifier, password::Argon2PasswordHasher},
    storage::FilesystemImageStorage,
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidTokenGenerator},
};
use article_manager::presentation::http::{routes::build_router, state::HttpState, views::Views};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));

    let storage_impl = FilesystemImageStorage::new(config.upload_dir().clone());
    storage_impl.ensure_root().await?;
    let image_storage: Arc<dyn ImageStorage> = Arc::new(storage_impl);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let credential_verifier: Arc<dyn CredentialVerifier> =
        Arc::new(ConfiguredCredentialVerifier::new(
            config.admin_username(),
            config.admin_password_hash(),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(UuidTokenGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        Arc::clone(&image_storage),
        Arc::clone(&credential_verifier),
        Arc::clone(&clock),
        Arc::clone(&slugger),
        Arc::clone(&tokens),
        FormRules {
            max_image_bytes: config.max_upload_bytes(),
        },
    ));

    let state = HttpState {
        services,
        views: Arc::new(Views::new()?),
    };

    let app = build_router(state, config.upload_dir());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
