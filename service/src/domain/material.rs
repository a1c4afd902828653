//! [`Material`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::module;

/// Learning material attached to a course [`Module`].
///
/// [`Module`]: crate::domain::Module
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// ID of this [`Material`].
    pub id: Id,

    /// ID of the [`Module`] this [`Material`] belongs to.
    ///
    /// [`Module`]: crate::domain::Module
    pub module_id: module::Id,

    /// [`Title`] of this [`Material`].
    pub title: Title,

    /// [`Kind`] of this [`Material`].
    pub kind: Kind,

    /// [`File`] stored for this [`Material`], if uploaded already.
    pub file: Option<File>,
}

/// ID of a [`Material`].
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

/// Title of a [`Material`].
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

/// Kind of a [`Material`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    /// A video lecture.
    Video = 1,

    /// A downloadable document.
    Document = 2,

    /// A quiz.
    Quiz = 3,
}

/// File stored for a [`Material`] on the backend.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Original name of this [`File`].
    pub name: FileName,

    /// MIME content type of this [`File`].
    pub content_type: String,

    /// Size of this [`File`] in bytes.
    pub size: u64,

    /// URL this [`File`] is served from.
    pub url: String,
}

/// Name of an uploaded [`File`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct FileName(String);

impl FileName {
    /// Creates a new [`FileName`] if the given `name` is valid.
    ///
    /// Path separators are rejected: an uploaded file carries a bare name,
    /// not a path.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()
            && name.len() <= 255
            && !name.contains(['/', '\\']))
        .then_some(Self(name))
    }
}

impl std::str::FromStr for FileName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FileName`")
    }
}

/// Contents of a [`File`] being uploaded for a [`Material`].
#[derive(Clone, Debug)]
pub struct Upload {
    /// Name of the uploaded file.
    pub name: FileName,

    /// MIME content type of the uploaded file.
    pub content_type: String,

    /// Raw bytes of the uploaded file.
    pub bytes: Vec<u8>,
}

/// Payload of creating a new [`Material`].
///
/// The ID is assigned by the backend; the [`File`] is uploaded separately
/// as a sub-resource.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct New {
    /// ID of the [`Module`] the new [`Material`] belongs to.
    ///
    /// [`Module`]: crate::domain::Module
    pub module_id: module::Id,

    /// [`Title`] of the new [`Material`].
    pub title: Title,

    /// [`Kind`] of the new [`Material`].
    pub kind: Kind,
}

/// [`Upload`] addressed to an existing [`Material`].
#[derive(Clone, Debug)]
pub struct FileUpload {
    /// ID of the [`Material`] the file belongs to.
    pub material_id: Id,

    /// The [`Upload`] itself.
    pub file: Upload,
}

#[cfg(test)]
mod spec {
    use super::FileName;

    #[test]
    fn file_name_rejects_paths() {
        assert!(FileName::new("../../etc/passwd").is_none());
        assert!(FileName::new("lecture-01.mp4").is_some());
    }
}
