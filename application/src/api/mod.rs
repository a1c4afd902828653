//! JSON API definitions.

pub mod blog;
pub mod cart;
pub mod category;
pub mod dashboard;
pub mod material;
pub mod module;
pub mod subscription;
pub mod user;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use common::pagination::{Page, PageNumber, PageSize};
use serde::Serialize;

use crate::{define_error, Error};

/// Assembles the [`Router`] of the JSON API.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/items", post(cart::add_item))
        .route(
            "/cart/items/:course_id",
            put(cart::update_quantity).delete(cart::remove_item),
        )
        .route("/dashboard", get(dashboard::show))
        .route("/blogs", get(blog::list).post(blog::create))
        .route(
            "/blogs/:id",
            get(blog::show).put(blog::update).delete(blog::remove),
        )
        .route("/categories", get(category::list).post(category::create))
        .route(
            "/categories/:id",
            put(category::update).delete(category::deactivate),
        )
        .route("/modules", get(module::list).post(module::create))
        .route("/modules/:id", put(module::update).delete(module::remove))
        .route("/materials", get(material::list).post(material::create))
        .route("/materials/:id", delete(material::remove))
        .route("/materials/:id/file", post(material::attach_file))
        .route("/admin/users", get(user::list))
        .route("/subscriptions", get(subscription::list))
        .route("/subscriptions/:id/courses", get(subscription::courses))
}

/// Wire shape of a paginated listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody<T> {
    /// Items of the requested page.
    pub items: Vec<T>,

    /// 1-based number of the page.
    pub page: u32,

    /// Size the page was requested with.
    pub size: u32,

    /// Total count of items across all pages.
    pub total: u64,

    /// Indicator whether a next page exists.
    pub has_more: bool,
}

impl<I> From<Page<I>> for PageBody<I> {
    fn from(page: Page<I>) -> Self {
        let has_more = page.has_more();
        Self {
            items: page.items,
            page: page.number.get(),
            size: page.size.get(),
            total: page.total,
            has_more,
        }
    }
}

/// Parses the provided pagination parameters.
///
/// # Errors
///
/// Errors if the page number or the page size is out of range.
pub(crate) fn page_params(
    page: Option<u32>,
    size: Option<u32>,
) -> Result<(PageNumber, PageSize), Error> {
    use PaginationError as E;

    let page = match page {
        Some(n) => PageNumber::new(n).ok_or(E::InvalidPage)?,
        None => PageNumber::FIRST,
    };
    let size = match size {
        Some(n) => PageSize::new(n).ok_or(E::InvalidPageSize)?,
        None => PageSize::DEFAULT,
    };

    Ok((page, size))
}

define_error! {
    enum PaginationError {
        #[code = "INVALID_PAGE"]
        #[status = BAD_REQUEST]
        #[message = "Page numbers are 1-based"]
        InvalidPage,

        #[code = "INVALID_PAGE_SIZE"]
        #[status = BAD_REQUEST]
        #[message = "Page size is out of range"]
        InvalidPageSize,
    }
}

define_error! {
    enum NotFoundError {
        #[code = "NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Requested entity does not exist"]
        NotFound,
    }
}

#[cfg(test)]
mod spec {
    use super::page_params;

    #[test]
    fn page_params_defaults() {
        let (page, size) = page_params(None, None).unwrap();

        assert_eq!(page.get(), 1);
        assert_eq!(size.get(), 10);
    }

    #[test]
    fn page_params_rejects_zero() {
        assert!(page_params(Some(0), None).is_err());
        assert!(page_params(None, Some(0)).is_err());
        assert!(page_params(None, Some(1000)).is_err());
    }
}
