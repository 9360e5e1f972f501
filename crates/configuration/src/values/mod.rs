mod connection_info;
mod secret;

pub use connection_info::{AccessToken, EndpointUri, WarehouseId};
pub use secret::Secret;
