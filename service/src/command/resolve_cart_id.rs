//! [`Command`] for resolving a [`cart::Id`].

use common::operations::{Load, Save};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{cart, cart::DeviceToken, user},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for resolving the [`cart::Id`] of the current visitor.
///
/// An authenticated visitor always resolves to the same deterministic
/// [`cart::Id`], without touching the locally persisted [`DeviceToken`].
/// An anonymous visitor reuses the persisted [`DeviceToken`], or
/// synthesizes and persists a fresh one on the very first cart
/// interaction.
#[derive(Clone, Copy, Debug, From)]
pub struct ResolveCartId {
    /// ID of the authenticated [`User`], if any.
    ///
    /// [`User`]: crate::domain::User
    pub identity: Option<user::Id>,
}

impl<B, S> Command<ResolveCartId> for Service<B, S>
where
    S: Storage<
            Load<DeviceToken>,
            Ok = Option<DeviceToken>,
            Err = Traced<storage::Error>,
        > + Storage<Save<DeviceToken>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = cart::Id;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: ResolveCartId) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ResolveCartId { identity } = cmd;

        if let Some(user_id) = identity {
            return Ok(cart::Id::for_user(user_id));
        }

        if let Some(token) = self
            .storage()
            .execute(Load::new())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        {
            return Ok(token.into());
        }

        let token = DeviceToken::generate();
        self.storage()
            .execute(Save(token.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(token.into())
    }
}

/// Error of [`ResolveCartId`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),
}

#[cfg(test)]
mod spec {
    use jsonwebtoken::DecodingKey;

    use crate::{
        domain::{cart, user},
        infra::storage::Memory,
        Config, Service,
    };

    use super::{Command as _, ResolveCartId};

    fn service() -> Service<(), Memory> {
        Service::new(
            Config {
                identity_decoding_key: DecodingKey::from_secret(b"secret"),
                pricing: cart::pricing::Policy::default(),
            },
            (),
            Memory::new(),
        )
    }

    #[tokio::test]
    async fn authenticated_resolution_is_deterministic() {
        let service = service();
        let user_id = user::Id::new();

        let first = service
            .execute(ResolveCartId {
                identity: Some(user_id),
            })
            .await
            .unwrap();
        let second = service
            .execute(ResolveCartId {
                identity: Some(user_id),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first, cart::Id::for_user(user_id));
    }

    #[tokio::test]
    async fn anonymous_resolution_persists_and_reuses_token() {
        let service = service();

        let first = service
            .execute(ResolveCartId { identity: None })
            .await
            .unwrap();
        let second = service
            .execute(ResolveCartId { identity: None })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(AsRef::<str>::as_ref(&first).starts_with("anon_"));
    }

    #[tokio::test]
    async fn authenticated_resolution_keeps_anonymous_token() {
        let token = cart::DeviceToken::from("anon_1717245000000_ab12cd34");
        let service = Service::new(
            Config {
                identity_decoding_key: DecodingKey::from_secret(b"secret"),
                pricing: cart::pricing::Policy::default(),
            },
            (),
            Memory::with_token(token.clone()),
        );

        let resolved = service
            .execute(ResolveCartId {
                identity: Some(user::Id::new()),
            })
            .await
            .unwrap();
        assert!(AsRef::<str>::as_ref(&resolved).starts_with("cart_"));

        let anonymous = service
            .execute(ResolveCartId { identity: None })
            .await
            .unwrap();
        assert_eq!(anonymous, cart::Id::from(token));
    }
}
