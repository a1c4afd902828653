//! [`Query`] collection related to the multiple [`Material`]s.
//!
//! [`Material`]: crate::domain::Material

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{module, Material};

use super::BackendQuery;

/// Queries all [`Material`]s of a [`Module`].
///
/// [`Module`]: crate::domain::Module
pub type ByModule = BackendQuery<By<Vec<Material>, module::Id>>;
