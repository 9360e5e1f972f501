//! Shared server state, initialized once on startup.

use std::error::Error;
use std::sync::Arc;

use advisory_engine::suggestions::SuggestionCache;
use farm_advisor_configuration::environment::ProcessEnvironment;
use warehouse_execution::StatementExecutor;

#[derive(Clone)]
pub struct ServerState {
    pub executor: Arc<StatementExecutor>,
    pub suggestions: Arc<SuggestionCache>,
    pub advisory_table: String,
}

impl ServerState {
    /// Read the configuration directory, resolve secrets from the process
    /// environment, and build the executor and suggestion cache.
    pub async fn initialize(configuration_dir: &str) -> Result<Self, Box<dyn Error>> {
        let parsed = farm_advisor_configuration::parse_configuration(configuration_dir).await?;
        let configuration =
            farm_advisor_configuration::make_runtime_configuration(parsed, ProcessEnvironment)?;

        let executor = StatementExecutor::new(
            configuration.endpoint,
            configuration.access_token,
            configuration.warehouse_id,
        );

        Ok(Self {
            executor: Arc::new(executor),
            suggestions: Arc::new(SuggestionCache::new()),
            advisory_table: configuration.advisory_table,
        })
    }
}
