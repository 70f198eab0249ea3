//! Page-number pagination for list endpoints
//!
//! Pages are numbered from 1 and `last` names the final page. An empty list
//! still has one (empty) page; any other page outside `1..=num_pages`, or a
//! value that is neither a number nor `last`, is rejected.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{Author, BookSummary},
};

/// `?page=N` or `?page=last` query parameter
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Page number starting at 1, or "last" (default: 1)
    pub page: Option<String>,
}

/// Page asked for, before the list size is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Number(u32),
    Last,
}

impl PageRequest {
    /// Parse the requested page, rejecting bad values before any query runs
    pub fn number(&self) -> AppResult<PageNumber> {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return Ok(PageNumber::Number(1));
        };
        if raw == "last" {
            return Ok(PageNumber::Last);
        }
        match raw.parse::<u32>() {
            Ok(0) => Err(AppError::InvalidPage("Page numbers start at 1".to_string())),
            Ok(n) => Ok(PageNumber::Number(n)),
            Err(_) => Err(AppError::InvalidPage(format!(
                "Page '{}' is neither a number nor 'last'",
                raw
            ))),
        }
    }
}

/// Resolved slice of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub per_page: u32,
    pub num_pages: u32,
    pub total: i64,
}

impl PageWindow {
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: u32,
}

impl Paginator {
    pub fn new(per_page: u32) -> Self {
        Self { per_page: per_page.max(1) }
    }

    /// Resolve `request` against a list of `total` rows
    pub fn window(&self, total: i64, request: &PageRequest) -> AppResult<PageWindow> {
        let requested = request.number()?;
        let total = total.max(0);
        let per_page = i64::from(self.per_page);
        let num_pages = ((total + per_page - 1) / per_page).max(1);
        let num_pages = u32::try_from(num_pages)
            .map_err(|_| AppError::Internal(format!("Page count {} out of range", num_pages)))?;

        let page = match requested {
            PageNumber::Number(n) => n,
            PageNumber::Last => num_pages,
        };
        if page > num_pages {
            return Err(AppError::InvalidPage(format!(
                "Page {} is past the last page ({})",
                page, num_pages
            )));
        }

        Ok(PageWindow {
            page,
            per_page: self.per_page,
            num_pages,
            total,
        })
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(BookPage = Page<BookSummary>, AuthorPage = Page<Author>)]
pub struct Page<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub items: Vec<T>,
    /// Current page number
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Total number of rows
    pub total: i64,
    pub num_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        Self {
            items,
            page: window.page,
            per_page: window.per_page,
            total: window.total,
            num_pages: window.num_pages,
            has_next: window.page < window.num_pages,
            has_previous: window.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn req(page: Option<u32>) -> PageRequest {
        PageRequest { page: page.map(|n| n.to_string()) }
    }

    fn raw(page: &str) -> PageRequest {
        PageRequest { page: Some(page.to_string()) }
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let w = Paginator::new(10).window(0, &req(None)).unwrap();
        assert_eq!((w.page, w.num_pages, w.offset()), (1, 1, 0));
        assert!(Paginator::new(10).window(0, &req(Some(2))).is_err());
    }

    #[test]
    fn test_window_bounds() {
        let p = Paginator::new(10);
        let w = p.window(25, &req(Some(3))).unwrap();
        assert_eq!(w.num_pages, 3);
        assert_eq!(w.offset(), 20);
        assert_eq!(w.limit(), 10);
        assert!(matches!(p.window(25, &req(Some(4))), Err(AppError::InvalidPage(_))));
        assert!(matches!(p.window(25, &req(Some(0))), Err(AppError::InvalidPage(_))));
    }

    #[test]
    fn test_exact_multiple() {
        let w = Paginator::new(10).window(20, &req(Some(2))).unwrap();
        assert_eq!(w.num_pages, 2);
    }

    fn genre(id: i32) -> Genre {
        Genre { id, name: format!("Genre {}", id) }
    }

    #[test]
    fn test_page_flags() {
        let p = Paginator::new(10);
        let first = Page::new(vec![genre(1), genre(2)], p.window(25, &req(Some(1))).unwrap());
        assert!(first.has_next && !first.has_previous);
        let last = Page::new(vec![genre(5)], p.window(25, &req(Some(3))).unwrap());
        assert!(!last.has_next && last.has_previous);
    }

    #[test]
    fn test_zero_per_page_is_clamped() {
        let w = Paginator::new(0).window(3, &req(None)).unwrap();
        assert_eq!((w.per_page, w.num_pages), (1, 3));
    }

    #[test]
    fn test_last_resolves_to_final_page() {
        let p = Paginator::new(10);
        let w = p.window(25, &raw("last")).unwrap();
        assert_eq!((w.page, w.offset()), (3, 20));
        let w = p.window(0, &raw("last")).unwrap();
        assert_eq!(w.page, 1);
    }

    #[test]
    fn test_unparseable_page_is_invalid() {
        for bad in ["abc", "-1", "1.5", "", "LAST"] {
            assert!(
                matches!(raw(bad).number(), Err(AppError::InvalidPage(_))),
                "{} accepted",
                bad
            );
        }
        assert_eq!(raw(" 2 ").number().unwrap(), PageNumber::Number(2));
    }
}
