use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct EndpointUri(pub Secret);

impl From<String> for EndpointUri {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for EndpointUri {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct AccessToken(pub Secret);

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct WarehouseId(pub Secret);

impl From<String> for WarehouseId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for WarehouseId {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
