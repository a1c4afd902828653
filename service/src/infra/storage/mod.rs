//! Client-local [`Storage`]-related implementations.
//!
//! The only client-local state of the front end is the single anonymous
//! cart [`DeviceToken`], persisted under a fixed key.
//!
//! [`DeviceToken`]: crate::domain::cart::DeviceToken

mod memory;
#[cfg(feature = "rest")]
mod token_file;

use derive_more::{Display, Error as StdError, From};

pub use self::memory::Memory;
#[cfg(feature = "rest")]
pub use self::token_file::TokenFile;

/// Client-local storage operation.
pub use common::Handler as Storage;

/// Fixed key the anonymous cart token is persisted under.
pub const DEVICE_TOKEN_KEY: &str = "anonymous_cart_token";

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O error of the underlying storage.
    #[display("I/O operation failed: {_0}")]
    Io(std::io::Error),
}
