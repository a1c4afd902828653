//! Dashboard read model definition.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Course};

/// Aggregate dashboard payload fetched once on bootstrap.
///
/// Populates the navigation tree and the landing sections. Missing
/// slices default to empty lists: this data is presentational and
/// non-critical.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    /// Categories with sample courses, for the navigation tree.
    #[serde(default)]
    pub categories: Vec<CategoryPreview>,

    /// Most popular courses, for the landing sections.
    #[serde(default)]
    pub top_courses: Vec<Course>,
}

/// [`Category`] with a few sample [`Course`]s attached.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPreview {
    /// The [`Category`] itself.
    #[serde(flatten)]
    pub category: Category,

    /// Sample [`Course`]s of the [`Category`].
    #[serde(default)]
    pub sample_courses: Vec<Course>,
}
