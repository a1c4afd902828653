//! [`Command`] for updating a [`cart::Quantity`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{cart, course},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for updating the [`cart::Quantity`] of a cart line.
///
/// A [`cart::Quantity::ZERO`] update is the defined removal path: the
/// backend removes the line, and the next fetched cart list no longer
/// contains it.
#[derive(Clone, Debug)]
pub struct UpdateCartItemQuantity {
    /// [`cart::Id`] of the cart holding the item.
    pub cart_id: cart::Id,

    /// ID of the [`Course`] the item offers.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// New [`cart::Quantity`] of the item.
    pub quantity: cart::Quantity,
}

impl<B, S> Command<UpdateCartItemQuantity> for Service<B, S>
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
        cmd: UpdateCartItemQuantity,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateCartItemQuantity {
            cart_id,
            course_id,
            quantity,
        } = cmd;

        self.backend()
            .execute(Update(cart::QuantityUpdate {
                cart_id,
                course_id,
                quantity,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateCartItemQuantity`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
