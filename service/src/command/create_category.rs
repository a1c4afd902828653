//! [`Command`] for creating a [`Category`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{category, Category},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Category`].
#[derive(Clone, Debug, From)]
pub struct CreateCategory {
    /// [`category::Name`] of the new [`Category`].
    pub name: category::Name,

    /// Description of the new [`Category`].
    pub description: Option<category::Description>,

    /// Image of the new [`Category`].
    pub image: Option<category::ImageUrl>,
}

impl<B, S> Command<CreateCategory> for Service<B, S>
where
    B: Backend<
        Insert<category::New>,
        Ok = Category,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Category;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateCategory,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateCategory {
            name,
            description,
            image,
        } = cmd;

        self.backend()
            .execute(Insert(category::New {
                name,
                description,
                image,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateCategory`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
