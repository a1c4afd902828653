//! On-disk [`Storage`] implementation.

use std::{io, path::PathBuf};

use common::operations::{Load, Save};
use tracerr::Traced;

use crate::{
    domain::cart::DeviceToken,
    infra::{
        storage::{self, DEVICE_TOKEN_KEY},
        Storage,
    },
};

/// [`Storage`] persisting the [`DeviceToken`] in a file on disk.
///
/// The desktop analog of browser local storage: a single value under the
/// fixed [`DEVICE_TOKEN_KEY`] file name.
#[derive(Clone, Debug)]
pub struct TokenFile {
    /// Path of the file holding the [`DeviceToken`].
    path: PathBuf,
}

impl TokenFile {
    /// Creates a new [`TokenFile`] storage inside the provided directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(DEVICE_TOKEN_KEY),
        }
    }
}

impl Storage<Load<DeviceToken>> for TokenFile {
    type Ok = Option<DeviceToken>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Load<DeviceToken>,
    ) -> Result<Self::Ok, Self::Err> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let raw = raw.trim();
                Ok((!raw.is_empty()).then(|| DeviceToken::from(raw)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(storage::Error::from(e))),
        }
    }
}

impl Storage<Save<DeviceToken>> for TokenFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Save(token): Save<DeviceToken>,
    ) -> Result<Self::Ok, Self::Err> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        }
        tokio::fs::write(&self.path, AsRef::<str>::as_ref(&token))
            .await
            .map_err(tracerr::from_and_wrap!(=> storage::Error))
    }
}
