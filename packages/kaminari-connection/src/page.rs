//! The backing object contract.
//!
//! A paginated field resolves to one backing object that plays two roles:
//! it carries the page metadata and it is the sequence of items on the page.
//! Both roles are spelled out by [`Paginated`].

use super::self_prelude::*;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Pagination state of one page, as computed by the pagination library.
pub trait PageMetadata: Send + Sync {
    fn current_page(&self) -> u64;
    fn first_page(&self) -> bool;
    fn last_page(&self) -> bool;
    fn out_of_range(&self) -> bool;
    fn limit_value(&self) -> u64;
    fn next_page(&self) -> Option<u64>;
    fn prev_page(&self) -> Option<u64>;
    fn total_pages(&self) -> u64;
}

/// An already paginated result.
pub trait Paginated: Send + Sync + 'static {
    /// The result as pagination metadata.
    fn page_data(&self) -> &dyn PageMetadata;

    /// The result as a sequence of items. Each item must be the value the
    /// item type's own resolvers downcast their parent to.
    fn items(&self) -> Vec<&(dyn Any + Send + Sync)>;
}

/// Type-erased backing object stored in a [`FieldValue`].
#[derive(Clone)]
pub struct PageValue(Arc<dyn Paginated>);

impl PageValue {
    pub fn new(page: impl Paginated) -> Self {
        Self(Arc::new(page))
    }

    /// Wrap a page as the output of a connection field resolver.
    pub fn field_value(page: impl Paginated) -> FieldValue<'static> {
        FieldValue::owned_any(Self::new(page))
    }

    pub fn page(&self) -> &dyn Paginated {
        self.0.as_ref()
    }
}

impl fmt::Debug for PageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.page_data();
        f.debug_struct("PageValue")
            .field("current_page", &data.current_page())
            .field("total_pages", &data.total_pages())
            .field("items", &self.0.items().len())
            .finish()
    }
}

/// Pagination metadata computed elsewhere, held as plain values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub current_page: u64,
    pub first_page: bool,
    pub last_page: bool,
    pub out_of_range: bool,
    pub limit_value: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub total_pages: u64,
}

impl PageMetadata for PageData {
    fn current_page(&self) -> u64 {
        self.current_page
    }
    fn first_page(&self) -> bool {
        self.first_page
    }
    fn last_page(&self) -> bool {
        self.last_page
    }
    fn out_of_range(&self) -> bool {
        self.out_of_range
    }
    fn limit_value(&self) -> u64 {
        self.limit_value
    }
    fn next_page(&self) -> Option<u64> {
        self.next_page
    }
    fn prev_page(&self) -> Option<u64> {
        self.prev_page
    }
    fn total_pages(&self) -> u64 {
        self.total_pages
    }
}

/// A page of items together with its metadata.
#[derive(Clone, Debug, Default)]
pub struct Page<T> {
    pub data: PageData,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(data: PageData, items: Vec<T>) -> Self {
        Self { data, items }
    }
}

impl<T: Any + Send + Sync> Paginated for Page<T> {
    fn page_data(&self) -> &dyn PageMetadata {
        &self.data
    }

    fn items(&self) -> Vec<&(dyn Any + Send + Sync)> {
        self.items
            .iter()
            .map(|item| item as &(dyn Any + Send + Sync))
            .collect()
    }
}
