//! Course [`Module`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::course;

/// Single module of a [`Course`] curriculum.
///
/// [`Course`]: crate::domain::Course
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// ID of this [`Module`].
    pub id: Id,

    /// ID of the [`Course`] this [`Module`] belongs to.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// [`Title`] of this [`Module`].
    pub title: Title,

    /// [`Position`] of this [`Module`] within the curriculum.
    pub position: Position,
}

/// ID of a [`Module`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`Module`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let trimmed = title.trim();
        (trimmed == title && !title.is_empty() && title.len() <= 256)
            .then_some(Self(title))
    }
}

impl std::str::FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// 1-based position of a [`Module`] within its curriculum.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Position(u16);

/// Payload of creating a new [`Module`].
///
/// The ID is assigned by the backend.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct New {
    /// ID of the [`Course`] the new [`Module`] belongs to.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// [`Title`] of the new [`Module`].
    pub title: Title,

    /// [`Position`] of the new [`Module`].
    pub position: Position,
}

/// Payload of editing an existing [`Module`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
    /// ID of the [`Module`] being edited.
    #[serde(skip_serializing)]
    pub id: Id,

    /// New [`Title`] of the [`Module`].
    pub title: Title,

    /// New [`Position`] of the [`Module`].
    pub position: Position,
}
