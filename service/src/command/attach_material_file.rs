//! [`Command`] for uploading a [`material::File`].

use common::operations::Attach;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::material,
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for uploading a file to an existing [`Material`].
///
/// [`Material`]: crate::domain::Material
#[derive(Clone, Debug)]
pub struct AttachMaterialFile {
    /// ID of the [`Material`] the file belongs to.
    ///
    /// [`Material`]: crate::domain::Material
    pub material_id: material::Id,

    /// The [`material::Upload`] itself.
    pub file: material::Upload,
}

impl<B, S> Command<AttachMaterialFile> for Service<B, S>
where
    B: Backend<
        Attach<material::FileUpload>,
        Ok = material::File,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = material::File;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AttachMaterialFile,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AttachMaterialFile { material_id, file } = cmd;

        // Validated before any network call is issued.
        if file.bytes.is_empty() {
            return Err(tracerr::new!(E::EmptyFile));
        }

        self.backend()
            .execute(Attach(material::FileUpload { material_id, file }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`AttachMaterialFile`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Uploaded file has no contents.
    #[display("cannot upload an empty file")]
    EmptyFile,
}
