//! [`Command`] for updating a [`Category`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{category, Category},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Category`].
#[derive(Clone, Debug)]
pub struct UpdateCategory {
    /// ID of the [`Category`] to update.
    pub id: category::Id,

    /// New [`category::Name`] of the [`Category`].
    pub name: category::Name,

    /// New description of the [`Category`].
    pub description: Option<category::Description>,

    /// New image of the [`Category`].
    pub image: Option<category::ImageUrl>,
}

impl<B, S> Command<UpdateCategory> for Service<B, S>
where
    B: Backend<
        Update<category::Edit>,
        Ok = Category,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Category;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateCategory,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateCategory {
            id,
            name,
            description,
            image,
        } = cmd;

        self.backend()
            .execute(Update(category::Edit {
                id,
                name,
                description,
                image,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateCategory`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
