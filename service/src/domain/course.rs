//! [`Course`] definitions.

use std::time::Duration;

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course offered on the platform, in the shape the backend catalog
/// delivers it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Course {
    /// ID of this [`Course`].
    pub id: Id,

    /// [`Name`] of this [`Course`].
    pub name: Name,

    /// Cover image of this [`Course`].
    pub image: Option<ImageUrl>,

    /// Name of the category this [`Course`] belongs to.
    pub category: Option<String>,

    /// Number of modules this [`Course`] consists of.
    pub modules: ModuleCount,

    /// Total [`Duration`] of this [`Course`] content.
    #[serde(with = "duration_minutes")]
    pub duration: Duration,

    /// [`Language`] this [`Course`] is taught in.
    pub language: Language,

    /// Price of this [`Course`].
    #[serde(with = "common::money::serde")]
    pub price: Money,
}

/// ID of a [`Course`].
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

/// Name of a [`Course`].
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
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// URL of a [`Course`] image.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct ImageUrl(String);

/// Number of modules a [`Course`] consists of.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct ModuleCount(u16);

/// Language a [`Course`] is taught in.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Language(String);

impl Language {
    /// Creates a new [`Language`] if the given `language` is non-empty.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Option<Self> {
        let language = language.into();
        (!language.trim().is_empty()).then_some(Self(language))
    }
}

impl FromStr for Language {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Language`")
    }
}

pub mod duration_minutes {
    //! Serialization of a [`Duration`] as whole minutes.

    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    /// Serializes the [`Duration`] as whole minutes.
    ///
    /// # Errors
    ///
    /// Never errors.
    pub fn serialize<S>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs() / 60)
    }

    /// Deserializes whole minutes into a [`Duration`].
    ///
    /// # Errors
    ///
    /// Errors if the value is not an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(|m| Duration::from_secs(m * 60))
    }
}
