//! Bearer session definitions.

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::domain::user;
#[cfg(doc)]
use crate::domain::User;

/// Claims carried by a bearer [`Token`] issued by the backend.
///
/// The front end only extracts these locally to derive a stable cart
/// identifier and to display account state. The backend re-validates the
/// token on every protected call.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Identity {
    /// ID of the [`User`] this [`Identity`] belongs to.
    pub user_id: user::Id,

    /// [`DateTime`] when this [`Identity`] expires.
    #[serde(rename = "exp", with = "common::datetime::serde::unix_timestamp")]
    pub expires_at: ExpirationDateTime,
}

/// Bearer access token of an authenticated [`User`].
#[derive(AsRef, Clone, Debug, Display, FromStr)]
#[as_ref(str)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] without checking its contents.
    ///
    /// # Safety
    ///
    /// The provided `token` must be a valid [`Token`] representation.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(token: String) -> Self {
        Self(token)
    }
}

/// [`DateTime`] of an [`Identity`] expiration.
pub type ExpirationDateTime = DateTimeOf<(Token, unit::Expiration)>;
