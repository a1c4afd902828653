//! [`Command`] for adding a [`cart::LineItem`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{cart, course},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for adding a [`Course`] to a cart.
///
/// [`Course`]: crate::domain::Course
#[derive(Clone, Debug)]
pub struct AddCartItem {
    /// [`cart::Id`] of the cart to add to.
    pub cart_id: cart::Id,

    /// ID of the [`Course`] being added.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// Initial [`cart::Quantity`] of the item.
    pub quantity: cart::Quantity,

    /// [`cart::Access`] tag of the item.
    pub access: cart::Access,
}

impl<B, S> Command<AddCartItem> for Service<B, S>
where
    B: Backend<Insert<cart::NewItem>, Ok = (), Err = Traced<backend::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddCartItem) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddCartItem {
            cart_id,
            course_id,
            quantity,
            access,
        } = cmd;

        // Validated before any network call is issued.
        if quantity < cart::Quantity::ONE {
            return Err(tracerr::new!(E::InvalidQuantity(quantity)));
        }

        self.backend()
            .execute(Insert(cart::NewItem {
                cart_id,
                course_id,
                quantity,
                access,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`AddCartItem`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Provided [`cart::Quantity`] cannot start a cart line.
    #[display("cannot add an item with quantity {_0}")]
    #[from(ignore)]
    InvalidQuantity(#[error(not(source))] cart::Quantity),
}
