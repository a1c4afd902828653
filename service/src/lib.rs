//! Service contains the client-side logic of the learning platform front end.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod content;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use derive_more::{Debug, Display, Error as StdError};
use jsonwebtoken::Validation;

use crate::domain::{
    cart,
    user::{session, Identity},
};
#[cfg(doc)]
use crate::infra::{Backend, Storage};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [JWT] decoding key used to extract an [`Identity`] from a bearer
    /// token issued by the backend.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub identity_decoding_key: jsonwebtoken::DecodingKey,

    /// Pricing policy applied to the cart.
    pub pricing: cart::pricing::Policy,
}

/// Front-end service of the learning platform.
///
/// All remote state lives behind the [`Backend`] gateway, while the only
/// client-local state (the anonymous cart token) lives behind the
/// [`Storage`].
#[derive(Clone, Debug)]
pub struct Service<B, S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Backend`] gateway of this [`Service`].
    backend: B,

    /// Device token [`Storage`] of this [`Service`].
    storage: S,
}

impl<B, S> Service<B, S> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, backend: B, storage: S) -> Self {
        Self {
            config,
            backend,
            storage,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Backend`] gateway of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the device token [`Storage`] of this [`Service`].
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Extracts an [`Identity`] from the provided bearer [`session::Token`].
    ///
    /// No backend round-trip is performed: the token is decoded and
    /// validated locally, the backend remains the authority rejecting
    /// stale tokens on protected calls.
    ///
    /// # Errors
    ///
    /// Errors if the provided token is not a valid [JWT] or is expired.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    pub fn identify(
        &self,
        token: &session::Token,
    ) -> Result<Identity, IdentifyError> {
        jsonwebtoken::decode::<Identity>(
            token.as_ref(),
            &self.config.identity_decoding_key,
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(IdentifyError)
    }
}

/// Error of extracting an [`Identity`] from a bearer token.
#[derive(Debug, Display, StdError)]
#[display("failed to decode a JSON Web Token: {_0}")]
pub struct IdentifyError(jsonwebtoken::errors::Error);

#[cfg(test)]
mod spec {
    use jsonwebtoken::{DecodingKey, EncodingKey, Header};

    use crate::domain::user::{session, Identity};

    use super::{Config, Service};

    fn service(secret: &str) -> Service<(), ()> {
        Service::new(
            Config {
                identity_decoding_key: DecodingKey::from_secret(
                    secret.as_bytes(),
                ),
                pricing: crate::domain::cart::pricing::Policy::default(),
            },
            (),
            (),
        )
    }

    fn token(secret: &str, identity: &Identity) -> session::Token {
        let encoded = jsonwebtoken::encode(
            &Header::default(),
            identity,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();
        encoded.parse().unwrap()
    }

    #[test]
    fn identifies_valid_token() {
        let identity = Identity {
            user_id: crate::domain::user::Id::new(),
            expires_at: common::DateTime::now()
                .coerce::<(session::Token, common::unit::Expiration)>()
                + std::time::Duration::from_secs(3600),
        };

        let service = service("secret");
        let decoded = service.identify(&token("secret", &identity)).unwrap();

        assert_eq!(decoded.user_id, identity.user_id);
    }

    #[test]
    fn rejects_foreign_token() {
        let identity = Identity {
            user_id: crate::domain::user::Id::new(),
            expires_at: common::DateTime::now()
                .coerce::<(session::Token, common::unit::Expiration)>()
                + std::time::Duration::from_secs(3600),
        };

        let service = service("secret");

        assert!(service.identify(&token("other", &identity)).is_err());
    }
}
