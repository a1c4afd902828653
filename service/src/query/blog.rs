//! [`Query`] collection related to a single [`Blog`].

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{blog, Blog};

use super::BackendQuery;

/// Queries a single [`Blog`] by its [`blog::Id`].
pub type ById = BackendQuery<By<Option<Blog>, blog::Id>>;
