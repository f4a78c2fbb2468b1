//! # kaminari-connection
//!
//! Page-numbered connection types for `async_graphql::dynamic` schemas.
//!
//! An item type opts in through [`KaminariRegistry::connection`], which lazily
//! builds a `<Item>Page` object type holding the shared `PageData` type and a
//! list of items, and hands back a [`ConnectionField`] carrying the `page` and
//! `per` arguments. The pagination itself happens elsewhere; resolvers return
//! an already paginated [`Paginated`] value wrapped in a [`PageValue`].

pub mod connection;
pub mod error;
pub mod object;
pub mod page;
pub mod page_data;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod testing;

pub(self) mod self_prelude {
    pub use crate::error::*;
    pub use async_graphql::dynamic::*;
    pub use extension_trait::extension_trait;
    pub use indexmap::IndexMap;
    pub use std::fmt;
    pub use std::sync::Arc;
    pub use tracing::{debug, trace, warn};
}

pub use connection::*;
pub use error::*;
pub use object::*;
pub use page::*;
pub use page_data::*;
pub use registry::*;
pub use resolver::*;
pub use schema::*;
