//! [`Query`] collection related to the multiple [`User`]s.
//!
//! [`User`]: crate::domain::User

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::read;

use super::BackendQuery;

/// Queries a list of [`User`]s.
///
/// An admin surface: the backend rejects it without a valid bearer token
/// in the [`read::user::list::Filter`].
///
/// [`User`]: crate::domain::User
pub type List =
    BackendQuery<By<read::user::list::Page, read::user::list::Selector>>;

/// Queries total count of [`User`]s.
///
/// [`User`]: crate::domain::User
pub type TotalCount =
    BackendQuery<By<read::user::list::TotalCount, read::user::list::Filter>>;
