//! [`Command`] for deactivating a [`Category`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{category, Category},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deactivating an existing [`Category`].
///
/// Deletion of a [`Category`] is soft: the backend keeps the record and
/// merely excludes it from customer-facing listings, so courses filed
/// under it stay resolvable.
#[derive(Clone, Copy, Debug, From)]
pub struct DeactivateCategory {
    /// ID of the [`Category`] to deactivate.
    pub id: category::Id,
}

impl<B, S> Command<DeactivateCategory> for Service<B, S>
where
    B: Backend<
        Delete<By<Category, category::Id>>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeactivateCategory,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeactivateCategory { id } = cmd;

        self.backend()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeactivateCategory`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
