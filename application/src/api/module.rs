//! [`Module`] endpoints.
//!
//! [`Module`]: service::domain::Module

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use service::{
    command::{
        create_module, delete_module, update_module, CreateModule,
        DeleteModule, UpdateModule,
    },
    domain::{course, module, Module},
    query, Command as _, Query as _,
};

use crate::{define_error, AsError, Context, Error};

/// Parameters of the module listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// ID of the course to list the curriculum of.
    pub course_id: course::Id,
}

/// Body of the module create request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
    /// ID of the course the module belongs to.
    pub course_id: course::Id,

    /// Title of the module.
    pub title: String,

    /// 1-based position of the module.
    pub position: u16,
}

/// Body of the module update request.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    /// New title of the module.
    pub title: String,

    /// New 1-based position of the module.
    pub position: u16,
}

/// `GET /modules?courseId=` endpoint.
///
/// # Errors
///
/// Errors if the backend is not reachable.
pub async fn list(
    context: Context,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Module>>, Error> {
    context
        .service()
        .execute(query::modules::ByCourse::by(params.course_id))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `POST /modules` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn create(
    context: Context,
    Json(body): Json<CreateBody>,
) -> Result<Json<Module>, Error> {
    use ModuleError as E;

    let CreateBody {
        course_id,
        title,
        position,
    } = body;

    // Validated before any network call is issued.
    let title = module::Title::new(title).ok_or(E::Title)?;

    context
        .service()
        .execute(CreateModule {
            course_id,
            title,
            position: position.into(),
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `PUT /modules/{id}` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn update(
    context: Context,
    Path(id): Path<module::Id>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<Module>, Error> {
    use ModuleError as E;

    let UpdateBody { title, position } = body;

    let title = module::Title::new(title).ok_or(E::Title)?;

    context
        .service()
        .execute(UpdateModule {
            id,
            title,
            position: position.into(),
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `DELETE /modules/{id}` endpoint.
///
/// # Errors
///
/// Errors if the backend rejects the deletion.
pub async fn remove(
    context: Context,
    Path(id): Path<module::Id>,
) -> Result<Json<()>, Error> {
    context
        .service()
        .execute(DeleteModule { id })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

impl AsError for create_module::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for update_module::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for delete_module::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum ModuleError {
        #[code = "INVALID_TITLE"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `title` provided"]
        Title,
    }
}
