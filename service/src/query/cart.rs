//! [`Query`] collection related to the cart.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::cart, read};

use super::BackendQuery;

/// Queries the authoritative [`read::cart::Summary`] of a cart by its
/// [`cart::Id`].
pub type Summary = BackendQuery<By<read::cart::Summary, cart::Id>>;
