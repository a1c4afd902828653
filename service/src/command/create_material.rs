//! [`Command`] for creating a [`Material`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{material, module, Material},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Material`] in a [`Module`].
///
/// The file contents, if any, are uploaded separately with
/// [`AttachMaterialFile`].
///
/// [`AttachMaterialFile`]: super::AttachMaterialFile
/// [`Module`]: crate::domain::Module
#[derive(Clone, Debug)]
pub struct CreateMaterial {
    /// ID of the [`Module`] the new [`Material`] belongs to.
    ///
    /// [`Module`]: crate::domain::Module
    pub module_id: module::Id,

    /// [`material::Title`] of the new [`Material`].
    pub title: material::Title,

    /// [`material::Kind`] of the new [`Material`].
    pub kind: material::Kind,
}

impl<B, S> Command<CreateMaterial> for Service<B, S>
where
    B: Backend<
        Insert<material::New>,
        Ok = Material,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Material;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateMaterial,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateMaterial {
            module_id,
            title,
            kind,
        } = cmd;

        self.backend()
            .execute(Insert(material::New {
                module_id,
                title,
                kind,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateMaterial`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
