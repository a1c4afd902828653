//! [`Command`] for creating a [`Module`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{course, module, Module},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Module`] in a [`Course`] curriculum.
///
/// [`Course`]: crate::domain::Course
#[derive(Clone, Debug)]
pub struct CreateModule {
    /// ID of the [`Course`] the new [`Module`] belongs to.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// [`module::Title`] of the new [`Module`].
    pub title: module::Title,

    /// [`module::Position`] of the new [`Module`].
    pub position: module::Position,
}

impl<B, S> Command<CreateModule> for Service<B, S>
where
    B: Backend<Insert<module::New>, Ok = Module, Err = Traced<backend::Error>>,
{
    type Ok = Module;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateModule) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateModule {
            course_id,
            title,
            position,
        } = cmd;

        self.backend()
            .execute(Insert(module::New {
                course_id,
                title,
                position,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateModule`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
