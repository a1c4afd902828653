//! [`Query`] collection related to the multiple [`Module`]s.
//!
//! [`Module`]: crate::domain::Module

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{course, Module};

use super::BackendQuery;

/// Queries all [`Module`]s of a [`Course`]'s curriculum.
///
/// [`Course`]: crate::domain::Course
pub type ByCourse = BackendQuery<By<Vec<Module>, course::Id>>;
