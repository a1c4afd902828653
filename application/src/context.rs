//! [`Context`]-related definitions.

use axum::{async_trait, extract::FromRequestParts, RequestPartsExt as _};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use service::{
    command::{resolve_cart_id, ResolveCartId},
    domain::{
        cart,
        user::{session, Identity},
    },
    Command as _,
};

use crate::{define_error, AsError, Error, Service};

/// Per-request context of the application.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Bearer [`session::Token`] of the request, if provided.
    bearer: Option<session::Token>,
}

impl Context {
    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the bearer [`session::Token`] of this [`Context`].
    ///
    /// # Errors
    ///
    /// Errors if the request carries no bearer token.
    pub fn token(&self) -> Result<session::Token, Error> {
        self.bearer
            .clone()
            .ok_or_else(|| AuthError::AuthorizationRequired.into())
    }

    /// Returns the [`Identity`] of the request, if it carries one.
    ///
    /// # Errors
    ///
    /// Errors if the provided bearer token is invalid or expired.
    pub fn identity(&self) -> Result<Option<Identity>, Error> {
        self.bearer
            .as_ref()
            .map(|token| {
                self.service
                    .identify(token)
                    .map_err(|_| AuthError::InvalidAuthToken.into())
            })
            .transpose()
    }

    /// Returns the [`Identity`] of the request, requiring one.
    ///
    /// # Errors
    ///
    /// Errors if the request carries no bearer token, or the provided
    /// bearer token is invalid or expired.
    pub fn require_identity(&self) -> Result<Identity, Error> {
        self.identity()?
            .ok_or_else(|| AuthError::AuthorizationRequired.into())
    }

    /// Resolves the [`cart::Id`] of the request: deterministic for an
    /// authenticated visitor, device token backed otherwise.
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the provided bearer token is invalid;
    /// - the device token storage is not accessible.
    pub async fn cart_id(&self) -> Result<cart::Id, Error> {
        let identity = self.identity()?;

        self.service
            .execute(ResolveCartId {
                identity: identity.map(|i| i.user_id),
            })
            .await
            .map_err(AsError::into_error)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let service =
            parts.extensions.get::<Service>().cloned().ok_or_else(|| {
                Error::internal(&"missing `Service` extension")
            })?;

        let bearer = match parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
        {
            Ok(TypedHeader(Authorization(bearer))) => {
                #[expect(unsafe_code, reason = "specified in correct header")]
                let token = unsafe {
                    session::Token::new_unchecked(bearer.token().to_owned())
                };
                Some(token)
            }
            Err(e) => {
                if e.is_missing() {
                    None
                } else {
                    return Err(e.into_error());
                }
            }
        };

        Ok(Self { service, bearer })
    }
}

impl AsError for resolve_cart_id::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Storage(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,

        #[code = "INVALID_AUTH_TOKEN"]
        #[status = UNAUTHORIZED]
        #[message = "Invalid authorization token"]
        InvalidAuthToken,
    }
}
