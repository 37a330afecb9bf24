//! Headless core of the product catalog manager.
//!
//! Everything here is UI-agnostic: the egui front end (and the tests) drive a
//! [`CatalogState`] with [`CatalogAction`]s, execute the [`Effect`]s it hands back
//! against a [`ProductApi`], and feed the resulting [`Outcome`]s back in.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod notify;
pub mod search;
pub mod sort;
pub mod view;

pub use catalog::{CatalogAction, CatalogManager, CatalogState, Effect, Outcome};
pub use client::{HttpProductApi, ProductApi};
pub use config::CatalogConfig;
pub use error::{ApiError, FormError, Result};
pub use form::{FormMode, ProductForm, Submission};
pub use model::{NameFilter, Product};
pub use notify::{Notification, NotificationLevel, NotificationLog, Notifier};
pub use search::SearchQuery;
pub use view::CatalogView;

// Re-export for convenience
pub mod prelude {
    pub use super::catalog::{CatalogAction, CatalogManager, CatalogState, Effect, Outcome};
    pub use super::client::{HttpProductApi, ProductApi};
    pub use super::config::CatalogConfig;
    pub use super::model::Product;
    pub use super::notify::{Notification, NotificationLevel, NotificationLog, Notifier};
    pub use super::view::CatalogView;
}
