//! [`Command`] for updating a [`Module`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{module, Module},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Module`].
#[derive(Clone, Debug)]
pub struct UpdateModule {
    /// ID of the [`Module`] to update.
    pub id: module::Id,

    /// New [`module::Title`] of the [`Module`].
    pub title: module::Title,

    /// New [`module::Position`] of the [`Module`].
    pub position: module::Position,
}

impl<B, S> Command<UpdateModule> for Service<B, S>
where
    B: Backend<Update<module::Edit>, Ok = Module, Err = Traced<backend::Error>>,
{
    type Ok = Module;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateModule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateModule {
            id,
            title,
            position,
        } = cmd;

        self.backend()
            .execute(Update(module::Edit {
                id,
                title,
                position,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateModule`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
