mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::CarsConfig;
use crate::graphql::{CarsSchema, build_schema};
use crate::storage::CarRegistry;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: CarsConfig,
}

impl CommandContext {
    pub fn new(config: CarsConfig) -> Self {
        Self { config }
    }

    /// Builds a schema over a new registry set up from the config.
    pub fn schema(&self) -> CarsSchema {
        let registry = CarRegistry::from_settings(&self.config.registry);
        build_schema(registry.into_shared())
    }
}
