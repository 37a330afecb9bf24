pub mod actions;
pub mod effect;
pub mod manager;
pub mod state;


pub use actions::CatalogAction;
pub use effect::{Effect, Outcome};
pub use manager::CatalogManager;
pub use state::CatalogState;
