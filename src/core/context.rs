use crate::config::Config;
use crate::core::cli::CliPaths;
use crate::core::persist::{EventPersistence, JsonFileStore};
use crate::core::store::EventStore;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub store: EventStore,
    pub persistence: Box<dyn EventPersistence>,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub paths: CliPaths,
}

impl AppContext {
    pub fn new_with_paths(paths: CliPaths) -> Result<Self> {
        let persistence = Box::new(JsonFileStore::new(&paths.data_path));
        Self::with_persistence(paths, persistence)
    }

    /// Builds a session over any storage backend. Saved events that cannot
    /// be read are reported and the session starts with an empty list.
    pub fn with_persistence(
        paths: CliPaths,
        persistence: Box<dyn EventPersistence>,
    ) -> Result<Self> {
        let config = Config::load_from(&paths.config_path)?;

        let logger = Logger::with_log_dir(&paths.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let events = match persistence.try_load() {
            Ok(events) => events,
            Err(err) => {
                logger.warn(
                    format!("Could not read saved events ({err}). Starting with an empty list."),
                    LogTarget::ConsoleAndFile,
                );
                Vec::new()
            }
        };

        Ok(Self {
            config,
            store: EventStore::from_events(events),
            persistence,
            logger,
            startup_displayed: false,
            paths,
        })
    }

    /// Saves the full collection and records `message` once it is on disk.
    pub fn commit(&self, message: impl AsRef<str>) -> Result<()> {
        self.persistence.save(self.store.events())?;
        self.logger.info(message, LogTarget::ConsoleAndFile);
        Ok(())
    }
}
