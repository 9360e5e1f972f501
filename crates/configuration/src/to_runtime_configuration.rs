//! Convert the parsed configuration metadata into a runtime configuration.

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration into a runtime configuration by resolving
/// every secret against the given environment.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let endpoint = parsed_config.endpoint.0.resolve(&environment)?;
    let access_token = parsed_config.access_token.0.resolve(&environment)?;
    let warehouse_id = parsed_config.warehouse_id.0.resolve(&environment)?;

    Ok(Configuration {
        endpoint,
        access_token,
        warehouse_id,
        advisory_table: parsed_config.advisory_table,
    })
}
