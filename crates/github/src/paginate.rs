//! Explicit single-vs-collection results.
//!
//! Every operation that can return a list says so in its return type:
//! [`Paginated::Collection`] carries the first page, and
//! [`crate::GitHub::paginate`] follows the remaining pages. Lookups return
//! [`Paginated::Single`] when passed through the same helper.

use octocrab::Page;

/// The result of an operation that may or may not be a paged list.
#[derive(Debug)]
pub enum Paginated<T> {
    /// One object.
    Single(T),
    /// The first page of a list; later pages are fetched on demand.
    Collection(Page<T>),
}

impl<T> Paginated<T> {
    /// Whether this is a paged list.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Items available without further requests.
    pub fn first_items(&self) -> &[T] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Collection(page) => &page.items,
        }
    }
}

impl<T> From<T> for Paginated<T> {
    fn from(item: T) -> Self {
        Self::Single(item)
    }
}
