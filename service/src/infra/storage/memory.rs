//! In-memory [`Storage`] implementation.

use std::sync::Mutex;

use common::operations::{Load, Save};
use tracerr::Traced;

use crate::{
    domain::cart::DeviceToken,
    infra::{storage, Storage},
};

/// In-memory [`Storage`], forgetting everything on drop.
///
/// Backs unit tests and embedders without a writable disk.
#[derive(Debug, Default)]
pub struct Memory {
    /// Persisted [`DeviceToken`], if any.
    token: Mutex<Option<DeviceToken>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Memory`] storage holding the provided
    /// [`DeviceToken`] already.
    #[must_use]
    pub fn with_token(token: DeviceToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl Storage<Load<DeviceToken>> for Memory {
    type Ok = Option<DeviceToken>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Load<DeviceToken>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

impl Storage<Save<DeviceToken>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Save(token): Save<DeviceToken>,
    ) -> Result<Self::Ok, Self::Err> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token);
        Ok(())
    }
}
