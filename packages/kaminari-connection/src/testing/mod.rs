//! Fixtures shared by this crate's tests: a `Post` item type, a stand-in for
//! the pagination library, and a schema exposing `posts(page, per)`.

pub mod posts;
pub mod schema;

pub mod self_prelude {
    pub use super::super::self_prelude::*;
}

pub use posts::*;
pub use schema::*;

pub mod prelude {
    pub use super::*;
}
