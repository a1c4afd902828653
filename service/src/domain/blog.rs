//! [`Blog`] definitions.

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog post of the platform CMS.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// ID of this [`Blog`].
    pub id: Id,

    /// [`Title`] of this [`Blog`].
    pub title: Title,

    /// [`Author`] of this [`Blog`].
    pub author: Author,

    /// [`Body`] of this [`Blog`].
    pub body: Body,

    /// Cover image of this [`Blog`].
    pub image: Option<ImageUrl>,

    /// [`DateTime`] when this [`Blog`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Blog`] was last updated.
    #[serde(with = "common::datetime::serde::rfc3339_option")]
    pub updated_at: Option<UpdateDateTime>,
}

/// ID of a [`Blog`].
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

/// Title of a [`Blog`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl std::str::FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Author byline of a [`Blog`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Author(String);

impl Author {
    /// Creates a new [`Author`] if the given `author` is valid.
    #[must_use]
    pub fn new(author: impl Into<String>) -> Option<Self> {
        let author = author.into();
        let trimmed = author.trim();
        (trimmed == author && !author.is_empty() && author.len() <= 128)
            .then_some(Self(author))
    }
}

impl std::str::FromStr for Author {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Author`")
    }
}

/// Body of a [`Blog`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Body(String);

impl Body {
    /// Creates a new [`Body`] if the given `body` is non-empty.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Option<Self> {
        let body = body.into();
        (!body.trim().is_empty()).then_some(Self(body))
    }
}

/// URL of a [`Blog`] cover image.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct ImageUrl(String);

/// Payload of creating a new [`Blog`].
///
/// The ID and the timestamps are assigned by the backend.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct New {
    /// [`Title`] of the new [`Blog`].
    pub title: Title,

    /// [`Author`] of the new [`Blog`].
    pub author: Author,

    /// [`Body`] of the new [`Blog`].
    pub body: Body,

    /// Cover image of the new [`Blog`].
    pub image: Option<ImageUrl>,
}

/// Payload of editing an existing [`Blog`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
    /// ID of the [`Blog`] being edited.
    #[serde(skip_serializing)]
    pub id: Id,

    /// New [`Title`] of the [`Blog`].
    pub title: Title,

    /// New [`Author`] of the [`Blog`].
    pub author: Author,

    /// New [`Body`] of the [`Blog`].
    pub body: Body,

    /// New cover image of the [`Blog`].
    pub image: Option<ImageUrl>,
}

/// [`DateTime`] when a [`Blog`] was created.
pub type CreationDateTime = DateTimeOf<(Blog, unit::Creation)>;

/// [`DateTime`] when a [`Blog`] was last updated.
pub type UpdateDateTime = DateTimeOf<(Blog, unit::Update)>;

#[cfg(test)]
mod spec {
    use super::{Author, Body, Title};

    #[test]
    fn title_rejects_blank_and_padded_input() {
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());
        assert!(Title::new("Learning Rust in 2026").is_some());
    }

    #[test]
    fn author_is_bounded() {
        assert!(Author::new("a".repeat(129)).is_none());
        assert!(Author::new("Priya Sharma").is_some());
    }

    #[test]
    fn body_rejects_whitespace_only_input() {
        assert!(Body::new("   ").is_none());
        assert!(Body::new("Content.").is_some());
    }
}
