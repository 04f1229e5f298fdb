//! Composition root. Wires config, logging, persistence, and the session
//! store together; embedding shells own the resulting `Client` for the
//! life of the process.

use crate::error::{ClientError, Result as ClientErrorResult};
use crate::logger;

use stellar_auth::{LogNotifier, NotificationSink, SessionManager, SessionOptions, TokioDelay};
use stellar_config::Config;
use stellar_db::{SessionRepository, SqliteKeyValueStore, open_pool};

use std::sync::Arc;

pub struct Client {
    config: Config,
    session: SessionManager,
}

impl Client {
    /// Load configuration, set up logging and persistence, and restore
    /// any persisted session.
    pub async fn bootstrap() -> ClientErrorResult<Self> {
        Self::bootstrap_with_notifier(Arc::new(LogNotifier)).await
    }

    /// Bootstrap with a custom notification sink (the UI's toast rail).
    pub async fn bootstrap_with_notifier(
        notifier: Arc<dyn NotificationSink>,
    ) -> ClientErrorResult<Self> {
        let config = Config::load()?;
        config.validate()?;

        let log_file = config
            .logging
            .to_file
            .then(|| config.log_file_path())
            .transpose()?;
        match logger::initialize(config.logging.level, log_file, config.logging.colored) {
            Ok(()) => {}
            // A second client in the same process keeps the existing logger
            Err(ClientError::Logger { .. }) => {}
            Err(e) => return Err(e),
        }

        let pool = open_pool(&config.database_path()?).await?;
        let repository = SessionRepository::new(Arc::new(SqliteKeyValueStore::new(pool)));

        let options = SessionOptions {
            min_password_len: config.auth.min_password_len,
            simulated_latency: config.auth.simulated_latency(),
            reset_latency: config.auth.reset_latency(),
        };

        let session = SessionManager::new(repository, notifier, Arc::new(TokioDelay), options);
        session.initialize().await;

        Ok(Self { config, session })
    }

    /// The session store. Pages call into this and render off its state.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
