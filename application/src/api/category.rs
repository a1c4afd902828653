//! [`Category`] endpoints.
//!
//! [`Category`]: service::domain::Category

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use service::{
    command::{
        create_category, deactivate_category, update_category, CreateCategory,
        DeactivateCategory, UpdateCategory,
    },
    domain::{category, Category},
    query, Command as _, Query as _,
};

use crate::{define_error, AsError, Context, Error};

/// Parameters of the category listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Indicator whether deactivated categories should be included.
    #[serde(default)]
    pub include_inactive: bool,
}

/// Body of the category create/update requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    /// Name of the category.
    pub name: String,

    /// Description of the category.
    pub description: Option<String>,

    /// Image of the category.
    pub image: Option<String>,
}

impl CategoryBody {
    /// Validates this [`CategoryBody`] into its typed parts.
    ///
    /// Performed before any network call is issued.
    #[expect(clippy::type_complexity, reason = "local to the endpoint")]
    fn validate(
        self,
    ) -> Result<
        (
            category::Name,
            Option<category::Description>,
            Option<category::ImageUrl>,
        ),
        Error,
    > {
        use CategoryError as E;

        let Self {
            name,
            description,
            image,
        } = self;

        Ok((
            category::Name::new(name).ok_or(E::Name)?,
            description
                .map(|d| category::Description::new(d).ok_or(E::Description))
                .transpose()?,
            image.map(category::ImageUrl::from),
        ))
    }
}

/// `GET /categories` endpoint.
///
/// # Errors
///
/// Errors if the backend is not reachable.
pub async fn list(
    context: Context,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Category>>, Error> {
    context
        .service()
        .execute(query::categories::List::by(query::categories::Filter {
            include_inactive: params.include_inactive,
        }))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `POST /categories` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn create(
    context: Context,
    Json(body): Json<CategoryBody>,
) -> Result<Json<Category>, Error> {
    let (name, description, image) = body.validate()?;

    context
        .service()
        .execute(CreateCategory {
            name,
            description,
            image,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `PUT /categories/{id}` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn update(
    context: Context,
    Path(id): Path<category::Id>,
    Json(body): Json<CategoryBody>,
) -> Result<Json<Category>, Error> {
    let (name, description, image) = body.validate()?;

    context
        .service()
        .execute(UpdateCategory {
            id,
            name,
            description,
            image,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `DELETE /categories/{id}` endpoint.
///
/// Deactivates the category rather than erasing it: the backend keeps
/// the record and merely hides it from customer-facing listings.
///
/// # Errors
///
/// Errors if the backend rejects the deactivation.
pub async fn deactivate(
    context: Context,
    Path(id): Path<category::Id>,
) -> Result<Json<()>, Error> {
    context
        .service()
        .execute(DeactivateCategory { id })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

impl AsError for create_category::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for update_category::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for deactivate_category::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum CategoryError {
        #[code = "INVALID_NAME"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `name` provided"]
        Name,

        #[code = "INVALID_DESCRIPTION"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `description` provided"]
        Description,
    }
}
