//! [`Command`] for removing a [`cart::LineItem`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{cart, course},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for removing an item from a cart.
///
/// Internally issues a [`cart::Quantity::ZERO`] update: the backend
/// exposes no separate delete verb for cart items.
#[derive(Clone, Debug)]
pub struct RemoveCartItem {
    /// [`cart::Id`] of the cart holding the item.
    pub cart_id: cart::Id,

    /// ID of the [`Course`] the item offers.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,
}

impl<B, S> Command<RemoveCartItem> for Service<B, S>
where
    B: Backend<
        Update<cart::QuantityUpdate>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RemoveCartItem,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RemoveCartItem { cart_id, course_id } = cmd;

        self.backend()
            .execute(Update(cart::QuantityUpdate {
                cart_id,
                course_id,
                quantity: cart::Quantity::ZERO,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`RemoveCartItem`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
