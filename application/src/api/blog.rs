//! [`Blog`] endpoints.
//!
//! [`Blog`]: service::domain::Blog

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use service::{
    command::{
        create_blog, delete_blog, update_blog, CreateBlog, DeleteBlog,
        UpdateBlog,
    },
    domain::{blog, Blog},
    query, read, Command as _, Query as _,
};

use crate::{define_error, AsError, Context, Error};

use super::{page_params, NotFoundError, PageBody};

/// Parameters of the blog listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// 1-based number of the page to list.
    pub page: Option<u32>,

    /// Size of the page to list.
    pub size: Option<u32>,
}

/// Body of the blog create/update requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogBody {
    /// Title of the blog.
    pub title: String,

    /// Author byline of the blog.
    pub author: String,

    /// Body of the blog.
    pub body: String,

    /// Cover image of the blog.
    pub image: Option<String>,
}

impl BlogBody {
    /// Validates this [`BlogBody`] into its typed parts.
    ///
    /// Performed before any network call is issued.
    fn validate(
        self,
    ) -> Result<
        (blog::Title, blog::Author, blog::Body, Option<blog::ImageUrl>),
        Error,
    > {
        use BlogError as E;

        let Self {
            title,
            author,
            body,
            image,
        } = self;

        Ok((
            blog::Title::new(title).ok_or(E::Title)?,
            blog::Author::new(author).ok_or(E::Author)?,
            blog::Body::new(body).ok_or(E::Body)?,
            image.map(blog::ImageUrl::from),
        ))
    }
}

/// `GET /blogs` endpoint.
///
/// # Errors
///
/// Errors if the pagination parameters are out of range.
pub async fn list(
    context: Context,
    Query(params): Query<ListParams>,
) -> Result<Json<PageBody<read::blog::list::Preview>>, Error> {
    let (page, size) = page_params(params.page, params.size)?;

    context
        .service()
        .execute(query::blogs::List::by(read::blog::list::Selector {
            page,
            size,
            filter: read::blog::list::Filter,
        }))
        .await
        .map(|page| Json(page.into()))
        .map_err(AsError::into_error)
}

/// `GET /blogs/{id}` endpoint.
///
/// # Errors
///
/// Errors if no such blog exists.
pub async fn show(
    context: Context,
    Path(id): Path<blog::Id>,
) -> Result<Json<Blog>, Error> {
    context
        .service()
        .execute(query::blog::ById::by(id))
        .await
        .map_err(AsError::into_error)?
        .map(Json)
        .ok_or_else(|| NotFoundError::NotFound.into())
}

/// `POST /blogs` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn create(
    context: Context,
    Json(body): Json<BlogBody>,
) -> Result<Json<Blog>, Error> {
    let (title, author, body, image) = body.validate()?;

    context
        .service()
        .execute(CreateBlog {
            title,
            author,
            body,
            image,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `PUT /blogs/{id}` endpoint.
///
/// # Errors
///
/// Errors if the provided fields are invalid.
pub async fn update(
    context: Context,
    Path(id): Path<blog::Id>,
    Json(body): Json<BlogBody>,
) -> Result<Json<Blog>, Error> {
    let (title, author, body, image) = body.validate()?;

    context
        .service()
        .execute(UpdateBlog {
            id,
            title,
            author,
            body,
            image,
        })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `DELETE /blogs/{id}` endpoint.
///
/// # Errors
///
/// Errors if the backend rejects the deletion.
pub async fn remove(
    context: Context,
    Path(id): Path<blog::Id>,
) -> Result<Json<()>, Error> {
    context
        .service()
        .execute(DeleteBlog { id })
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

impl AsError for create_blog::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for update_blog::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for delete_blog::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

define_error! {
    enum BlogError {
        #[code = "INVALID_TITLE"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `title` provided"]
        Title,

        #[code = "INVALID_AUTHOR"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `author` provided"]
        Author,

        #[code = "INVALID_BODY"]
        #[status = BAD_REQUEST]
        #[message = "Invalid `body` provided"]
        Body,
    }
}
