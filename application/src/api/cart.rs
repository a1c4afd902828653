//! Cart endpoints.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use service::{
    command::{
        add_cart_item, remove_cart_item, update_cart_item_quantity,
        AddCartItem, RemoveCartItem, UpdateCartItemQuantity,
    },
    domain::{cart, course},
    query, read, Command as _, Query as _,
};

use crate::{define_error, AsError, Context, Error};

/// Wire shape of the cart state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartBody {
    /// Resolved identifier of the cart.
    pub cart_id: cart::Id,

    /// Line items of the cart.
    pub items: Vec<cart::LineItem>,

    /// Authoritative count of cart lines.
    pub count: usize,

    /// Derived totals of the cart.
    pub totals: TotalsBody,
}

/// Wire shape of the derived cart totals.
#[derive(Debug, Serialize)]
pub struct TotalsBody {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: String,

    /// Promotional discount.
    pub discount: String,

    /// Tax on the subtotal.
    pub tax: String,

    /// `subtotal − discount + tax`.
    pub total: String,
}

impl From<cart::Totals> for TotalsBody {
    fn from(totals: cart::Totals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            discount: totals.discount.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
        }
    }
}

/// Body of the add-to-cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    /// ID of the course to add.
    pub course_id: course::Id,

    /// Initial quantity of the item.
    pub quantity: u32,

    /// Kind of access the item is purchased with.
    pub access_type: cart::access::Kind,

    /// Optional seat-assignment limit of the purchase.
    pub seat_limit: Option<u32>,
}

/// Body of the quantity update request.
#[derive(Debug, Deserialize)]
pub struct QuantityBody {
    /// New quantity of the item.
    pub quantity: u32,
}

/// Fetches the authoritative cart state of the provided [`Context`].
async fn fetch(context: &Context) -> Result<CartBody, Error> {
    let cart_id = context.cart_id().await?;

    let summary = context
        .service()
        .execute(query::cart::Summary::by(cart_id.clone()))
        .await
        .map_err(AsError::into_error)?;

    let totals = summary
        .totals(context.service().config().pricing)
        .into();
    let read::cart::Summary { items } = summary;

    Ok(CartBody {
        cart_id,
        count: items.len(),
        items,
        totals,
    })
}

/// `GET /cart` endpoint.
///
/// # Errors
///
/// See [`Context::cart_id()`].
pub async fn show(context: Context) -> Result<Json<CartBody>, Error> {
    fetch(&context).await.map(Json)
}

/// `POST /cart/items` endpoint.
///
/// Responds with the re-fetched authoritative cart state rather than a
/// locally computed diff.
///
/// # Errors
///
/// Errors if the provided quantity or seat limit is invalid.
pub async fn add_item(
    context: Context,
    Json(body): Json<AddItemBody>,
) -> Result<Json<CartBody>, Error> {
    use CartError as E;

    let AddItemBody {
        course_id,
        quantity,
        access_type,
        seat_limit,
    } = body;

    // Validated before any network call is issued.
    let quantity = cart::Quantity::from(quantity);
    if quantity < cart::Quantity::ONE {
        return Err(E::InvalidQuantity.into());
    }
    let seat_limit = seat_limit
        .map(|seats| cart::access::SeatLimit::new(seats).ok_or(E::SeatLimit))
        .transpose()?;

    let cart_id = context.cart_id().await?;
    context
        .service()
        .execute(AddCartItem {
            cart_id,
            course_id,
            quantity,
            access: cart::Access {
                kind: access_type,
                seat_limit,
            },
        })
        .await
        .map_err(AsError::into_error)?;

    fetch(&context).await.map(Json)
}

/// `PUT /cart/items/{course_id}` endpoint.
///
/// Rejects quantities below `1`: removal goes through the `DELETE` verb.
///
/// # Errors
///
/// Errors if the provided quantity is below `1`.
pub async fn update_quantity(
    context: Context,
    Path(course_id): Path<course::Id>,
    Json(body): Json<QuantityBody>,
) -> Result<Json<CartBody>, Error> {
    use CartError as E;

    let quantity = cart::Quantity::from(body.quantity);
    if quantity < cart::Quantity::ONE {
        return Err(E::InvalidQuantity.into());
    }

    let cart_id = context.cart_id().await?;
    context
        .service()
        .execute(UpdateCartItemQuantity {
            cart_id,
            course_id,
            quantity,
        })
        .await
        .map_err(AsError::into_error)?;

    fetch(&context).await.map(Json)
}

/// `DELETE /cart/items/{course_id}` endpoint.
///
/// # Errors
///
/// See [`Context::cart_id()`].
pub async fn remove_item(
    context: Context,
    Path(course_id): Path<course::Id>,
) -> Result<Json<CartBody>, Error> {
    let cart_id = context.cart_id().await?;
    context
        .service()
        .execute(RemoveCartItem { cart_id, course_id })
        .await
        .map_err(AsError::into_error)?;

    fetch(&context).await.map(Json)
}

impl AsError for add_cart_item::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
            Self::InvalidQuantity(_) => {
                Some(CartError::InvalidQuantity.into())
            }
        }
    }
}

impl AsError for update_cart_item_quantity::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for remove_cart_item::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum CartError {
        #[code = "INVALID_QUANTITY"]
        #[status = BAD_REQUEST]
        #[message = "Quantity must be at least 1"]
        InvalidQuantity,

        #[code = "INVALID_SEAT_LIMIT"]
        #[status = BAD_REQUEST]
        #[message = "Seat limit must be positive"]
        SeatLimit,
    }
}
