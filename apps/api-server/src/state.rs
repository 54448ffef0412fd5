//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::database::DatabaseConfig;
use bloglist_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryUserRepository, JwtTokenService,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Which backend the repositories use, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured but unreachable database, or invalid Argon2 costs, is a startup error.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(
            Argon2PasswordService::with_config(config.password).map_err(io::Error::other)?,
        );

        if let Some(db_config) = config.database.as_ref() {
            return Self::connect(db_config, tokens, passwords).await;
        }

        tracing::warn!("No database configured. Running with in-memory storage.");
        Ok(Self::in_memory(tokens, passwords))
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            tokens,
            passwords,
            storage: "memory",
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(
        db_config: &DatabaseConfig,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> io::Result<Self> {
        use bloglist_infra::DatabaseConnections;
        use bloglist_infra::database::{PostgresBlogRepository, PostgresUserRepository};
        use migration::MigratorTrait;

        let connections = DatabaseConnections::init(db_config).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            io::Error::other(e)
        })?;

        if db_config.auto_migrate {
            migration::Migrator::up(&connections.main, None)
                .await
                .map_err(io::Error::other)?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self {
            blogs: Arc::new(PostgresBlogRepository::new(connections.main.clone())),
            users: Arc::new(PostgresUserRepository::new(connections.main)),
            tokens,
            passwords,
            storage: "postgres",
        })
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(
        _db_config: &DatabaseConfig,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> io::Result<Self> {
        tracing::warn!("Database configured but the postgres feature is disabled. Using in-memory storage.");
        Ok(Self::in_memory(tokens, passwords))
    }
}
