//! [`Command`] for deleting a [`Blog`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{blog, Blog},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting an existing [`Blog`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteBlog {
    /// ID of the [`Blog`] to delete.
    pub id: blog::Id,
}

impl<B, S> Command<DeleteBlog> for Service<B, S>
where
    B: Backend<
        Delete<By<Blog, blog::Id>>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteBlog) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteBlog { id } = cmd;

        self.backend()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteBlog`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
