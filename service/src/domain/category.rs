//! [`Category`] definitions.

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category grouping [`Course`]s in the catalog.
///
/// Deletion is soft: a deactivated [`Category`] keeps existing on the
/// backend and is merely excluded from customer-facing listings.
///
/// [`Course`]: crate::domain::Course
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// ID of this [`Category`].
    pub id: Id,

    /// [`Name`] of this [`Category`].
    pub name: Name,

    /// Description of this [`Category`].
    pub description: Option<Description>,

    /// Image of this [`Category`].
    pub image: Option<ImageUrl>,

    /// [`DateTime`] when this [`Category`] was deactivated.
    #[serde(default, with = "common::datetime::serde::rfc3339_option")]
    pub deactivated_at: Option<DeactivationDateTime>,
}

impl Category {
    /// Indicates whether this [`Category`] is visible to customers.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.deactivated_at.is_none()
    }
}

/// ID of a [`Category`].
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

/// Name of a [`Category`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        (trimmed == name && !name.is_empty() && name.len() <= 128)
            .then_some(Self(name))
    }
}

impl std::str::FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Description of a [`Category`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`] if the given `description` is
    /// non-empty.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        (!description.trim().is_empty()).then_some(Self(description))
    }
}

/// URL of a [`Category`] image.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct ImageUrl(String);

/// Payload of creating a new [`Category`].
///
/// The ID is assigned by the backend.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct New {
    /// [`Name`] of the new [`Category`].
    pub name: Name,

    /// Description of the new [`Category`].
    pub description: Option<Description>,

    /// Image of the new [`Category`].
    pub image: Option<ImageUrl>,
}

/// Payload of editing an existing [`Category`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
    /// ID of the [`Category`] being edited.
    #[serde(skip_serializing)]
    pub id: Id,

    /// New [`Name`] of the [`Category`].
    pub name: Name,

    /// New description of the [`Category`].
    pub description: Option<Description>,

    /// New image of the [`Category`].
    pub image: Option<ImageUrl>,
}

/// [`DateTime`] when a [`Category`] was deactivated.
pub type DeactivationDateTime = DateTimeOf<(Category, unit::Deletion)>;
