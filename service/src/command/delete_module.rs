//! [`Command`] for deleting a [`Module`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{module, Module},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting an existing [`Module`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteModule {
    /// ID of the [`Module`] to delete.
    pub id: module::Id,
}

impl<B, S> Command<DeleteModule> for Service<B, S>
where
    B: Backend<
        Delete<By<Module, module::Id>>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteModule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteModule { id } = cmd;

        self.backend()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteModule`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
