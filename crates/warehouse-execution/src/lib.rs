//! Submit SQL statements to a warehouse over HTTP and decode the results.

pub mod error;
pub mod execution;
pub mod response;

pub use error::Error;
pub use execution::StatementExecutor;
pub use response::{StatementResponse, Table};
