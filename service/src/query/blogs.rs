//! [`Query`] collection related to the multiple [`Blog`]s.
//!
//! [`Blog`]: crate::domain::Blog

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::read;

use super::BackendQuery;

/// Queries a list of [`Blog`]s.
///
/// [`Blog`]: crate::domain::Blog
pub type List =
    BackendQuery<By<read::blog::list::Page, read::blog::list::Selector>>;
