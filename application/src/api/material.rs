//! [`Material`] endpoints.
//!
//! [`Material`]: service::domain::Material

use axum::{
    extract::{Multipart, Path, Query},
    Json,
};
use serde::Deserialize;
use service::{
    command::{
        attach_material_file, create_material, delete_material,
        AttachMaterialFile, CreateMaterial, DeleteMaterial,
    },
    domain::{material, module, Material},
    query, Command as _, Query as _,
};

use crate::{define_error, AsError, Context, Error};

/// Parameters of the material listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// ID of the module to list the materials of.
    pub module_id: module::Id,
}

/// Body of the material create request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
    /// ID of the module the material belongs to.
    pub module_id: module::Id,

    /// Title of the material.
    pub title: String,

    /// Kind of the material.
    pub kind: material::Kind,
}

/// `GET /materials?moduleId=` endpoint.
///
/// # Errors
///
/// Errors if the backend is not reachable.
pub async fn list(
    context: Context,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Material>>, Error> {
    context
        .service()
        .execute(query::materials::ByModule::by(params.module_id))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `POST /materials` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn create(
    context: Context,
    Json(body): Json<CreateBody>,
) -> Result<Json<Material>, Error> {
    use MaterialError as E;

    let CreateBody {
        module_id,
        title,
        kind,
    } = body;

    // Validated before any network call is issued.
    let title = material::Title::new(title).ok_or(E::Title)?;

    context
        .service()
        .execute(CreateMaterial {
            module_id,
            title,
            kind,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `POST /materials/{id}/file` endpoint.
///
/// Accepts a single `file` part of a `multipart/form-data` body and
/// stores it as the file of the material.
///
/// # Errors
///
/// Errors if the body carries no valid `file` part.
pub async fn attach_file(
    context: Context,
    Path(id): Path<material::Id>,
    mut multipart: Multipart,
) -> Result<Json<material::File>, Error> {
    use MaterialError as E;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| Error::from(E::MalformedUpload))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let name = field
            .file_name()
            .and_then(material::FileName::new)
            .ok_or(E::FileName)?;
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| Error::from(E::MalformedUpload))?
            .to_vec();

        upload = Some(material::Upload {
            name,
            content_type,
            bytes,
        });
    }
    let file = upload.ok_or(E::MissingFile)?;

    context
        .service()
        .execute(AttachMaterialFile {
            material_id: id,
            file,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `DELETE /materials/{id}` endpoint.
///
/// # Errors
///
/// Errors if the backend rejects the deletion.
pub async fn remove(
    context: Context,
    Path(id): Path<material::Id>,
) -> Result<Json<()>, Error> {
    context
        .service()
        .execute(DeleteMaterial { id })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

impl AsError for create_material::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for attach_material_file::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
            Self::EmptyFile => Some(MaterialError::MissingFile.into()),
        }
    }
}

impl AsError for delete_material::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum MaterialError {
        #[code = "INVALID_TITLE"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `title` provided"]
        Title,

        #[code = "INVALID_FILE_NAME"]
        #[status = BAD_REQUEST]
        #[message = "Invalid file name provided"]
        FileName,

        #[code = "MISSING_FILE"]
        #[status = BAD_REQUEST]
        #[message = "No `file` part provided"]
        MissingFile,

        #[code = "MALFORMED_UPLOAD"]
        #[status = BAD_REQUEST]
        #[message = "Malformed multipart upload"]
        MalformedUpload,
    }
}
