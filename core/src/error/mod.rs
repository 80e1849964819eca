#[allow(clippy::module_inception)]
pub mod error;
pub mod transport;

pub use error::{CliError, GatewayError};
pub use transport::{TransportError, TransportErrorKind};
