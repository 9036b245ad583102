//! Catalog service: list-with-filter and random pick over the repository port.

mod catalog;
pub mod picker;
pub use catalog::CatalogService;
pub use picker::{IdPicker, RandomPicker};
