//! On-disk configuration format for the advisor, version 1.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{AccessToken, EndpointUri, Secret, WarehouseId};

const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

pub const DEFAULT_ENDPOINT_VARIABLE: &str = "FARM_ADVISOR_SQL_ENDPOINT";
pub const DEFAULT_ACCESS_TOKEN_VARIABLE: &str = "FARM_ADVISOR_ACCESS_TOKEN";
pub const DEFAULT_WAREHOUSE_ID_VARIABLE: &str = "FARM_ADVISOR_WAREHOUSE_ID";

/// The table every advisory and suggestion query reads from.
pub const DEFAULT_ADVISORY_TABLE: &str = "analytics.gold.gold_farm_advisor";

/// Initial configuration, just enough to connect to the warehouse and run
/// statements against the advisory table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    /// URL of the warehouse SQL statement submission endpoint.
    pub endpoint: EndpointUri,
    /// Bearer token for the warehouse. Must not be a plain value in committed
    /// configuration; reference an environment variable instead.
    pub access_token: AccessToken,
    /// Identifier of the compute resource executing the statements.
    pub warehouse_id: WarehouseId,
    /// Fully qualified advisory table name.
    #[serde(default = "default_advisory_table")]
    pub advisory_table: String,
}

fn default_advisory_table() -> String {
    DEFAULT_ADVISORY_TABLE.to_string()
}

impl ParsedConfiguration {
    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }

    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            endpoint: EndpointUri(Secret::FromEnvironment {
                variable: DEFAULT_ENDPOINT_VARIABLE.into(),
            }),
            access_token: AccessToken(Secret::FromEnvironment {
                variable: DEFAULT_ACCESS_TOKEN_VARIABLE.into(),
            }),
            warehouse_id: WarehouseId(Secret::FromEnvironment {
                variable: DEFAULT_WAREHOUSE_ID_VARIABLE.into(),
            }),
            advisory_table: default_advisory_table(),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
