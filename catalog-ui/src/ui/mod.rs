//! Render functions for each part of the screen.
//!
//! Each one reads a snapshot ([`catalog_core::CatalogView`] or toasts), draws it, and
//! pushes whatever the user asked for into an action list. None of them call the
//! backend directly.

pub mod catalog;
pub mod dialogs;
pub mod home;
pub mod toasts;
