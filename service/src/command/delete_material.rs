//! [`Command`] for deleting a [`Material`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{material, Material},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting an existing [`Material`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteMaterial {
    /// ID of the [`Material`] to delete.
    pub id: material::Id,
}

impl<B, S> Command<DeleteMaterial> for Service<B, S>
where
    B: Backend<
        Delete<By<Material, material::Id>>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteMaterial,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteMaterial { id } = cmd;

        self.backend()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteMaterial`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
