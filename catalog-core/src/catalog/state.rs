use reqwest::StatusCode;

use super::{CatalogAction, Effect, Outcome};
use crate::form::{ProductForm, Submission};
use crate::model::Product;
use crate::notify::{Notification, Notifier};
use crate::search::SearchQuery;
use crate::sort::sorted_by_description;

const LOAD_FAILED: &str = "Error loading products. Check that the server is running.";
const SEARCH_FAILED: &str = "Error searching products. Please try again.";

/// View-state of the catalog screen.
///
/// Nothing in here talks to the network. Handlers that need the service return an
/// [`Effect`]; whoever runs it hands the [`Outcome`] back to [`CatalogState::apply`].
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    // Currently rendered subset
    displayed: Vec<Product>,

    // Everything the service returned on the last successful load
    all: Vec<Product>,

    search_term: String,
    form: ProductForm,
    pending_delete: Option<Product>,

    // Requests sent but not yet applied
    in_flight: usize,
    loaded: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn pending_delete(&self) -> Option<&Product> {
        self.pending_delete.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// True once a full load has succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Handles a user action. Returns the request to send, if any.
    pub fn handle(&mut self, action: CatalogAction, notifier: &dyn Notifier) -> Option<Effect> {
        log::debug!("Handling action: {}", action.description());

        let effect = match action {
            CatalogAction::LoadAll => Some(Effect::LoadAll),
            CatalogAction::SetSearchTerm(term) => {
                self.set_search_term(term);
                None
            }
            CatalogAction::Search => self.search(),
            CatalogAction::ClearSearch => {
                self.clear_search();
                None
            }
            CatalogAction::OpenCreate => {
                self.form.open_create();
                None
            }
            CatalogAction::OpenEdit { code } => {
                self.open_edit(code);
                None
            }
            CatalogAction::SetCodeInput(raw) => {
                self.form.set_code_input(&raw);
                None
            }
            CatalogAction::SetDescriptionInput(value) => {
                self.form.set_description_input(value);
                None
            }
            CatalogAction::SubmitForm => self.submit_form(notifier),
            CatalogAction::CancelForm => {
                self.form.close();
                None
            }
            CatalogAction::RequestDelete { code } => {
                self.pending_delete = self.find(code).cloned();
                None
            }
            CatalogAction::ConfirmDelete => self
                .pending_delete
                .take()
                .map(|product| Effect::Delete(product.code)),
            CatalogAction::CancelDelete => {
                self.pending_delete = None;
                None
            }
        };

        self.track(effect)
    }

    /// Folds a finished request back into the state. Returns a follow-up request
    /// (the reload after a successful mutation).
    pub fn apply(&mut self, outcome: Outcome, notifier: &dyn Notifier) -> Option<Effect> {
        self.in_flight = self.in_flight.saturating_sub(1);

        let follow_up = match outcome {
            Outcome::Loaded(Ok(products)) => {
                let sorted = sorted_by_description(products);
                log::info!("Loaded {} products", sorted.len());
                self.all = sorted.clone();
                self.displayed = sorted;
                self.loaded = true;
                None
            }
            Outcome::Loaded(Err(e)) => {
                log::error!("Failed to load products: {}", e);
                notifier.notify(Notification::error(LOAD_FAILED));
                None
            }

            Outcome::CodeLookup(Ok(found)) => {
                self.displayed = found.into_iter().collect();
                None
            }
            Outcome::NameSearch(Ok(products)) => {
                self.displayed = sorted_by_description(products);
                None
            }
            Outcome::CodeLookup(Err(e)) | Outcome::NameSearch(Err(e)) => {
                log::error!("Search failed: {}", e);
                self.displayed.clear();
                notifier.notify(Notification::error(SEARCH_FAILED));
                None
            }

            Outcome::Created(result) => {
                self.form.close();
                match result {
                    Ok(status) if matches!(status, StatusCode::OK | StatusCode::CREATED) => {
                        notifier.notify(Notification::success("Product created successfully!"));
                        Some(Effect::LoadAll)
                    }
                    Ok(status) => {
                        log::error!("Create answered unexpected status {}", status);
                        notifier.notify(Notification::error("Error creating product!"));
                        None
                    }
                    Err(e) => {
                        log::error!("Failed to create product: {}", e);
                        let message = e
                            .server_message()
                            .unwrap_or("Error creating product. Please try again.");
                        notifier.notify(Notification::error(message));
                        None
                    }
                }
            }

            Outcome::Updated(result) => {
                self.form.close();
                match result {
                    Ok(StatusCode::OK) => {
                        notifier.notify(Notification::success("Product updated successfully!"));
                        Some(Effect::LoadAll)
                    }
                    Ok(status) => {
                        log::error!("Update answered unexpected status {}", status);
                        notifier.notify(Notification::error("Error updating product!"));
                        None
                    }
                    Err(e) => {
                        log::error!("Failed to update product: {}", e);
                        notifier.notify(Notification::error(
                            "Error updating product. Please try again.",
                        ));
                        None
                    }
                }
            }

            Outcome::Deleted { code, result } => match result {
                Ok(status) if matches!(status, StatusCode::OK | StatusCode::NO_CONTENT) => {
                    log::info!("Product {} deleted", code);
                    notifier.notify(Notification::success("Product deleted successfully!"));
                    Some(Effect::LoadAll)
                }
                Ok(status) => {
                    log::error!("Delete of {} answered unexpected status {}", code, status);
                    notifier.notify(Notification::error("Error deleting product!"));
                    None
                }
                Err(e) => {
                    log::error!("Failed to delete product {}: {}", code, e);
                    notifier.notify(Notification::error(
                        "Error deleting product. Please try again.",
                    ));
                    None
                }
            },
        };

        self.track(follow_up)
    }

    fn track(&mut self, effect: Option<Effect>) -> Option<Effect> {
        if effect.is_some() {
            self.in_flight += 1;
        }
        effect
    }

    fn find(&self, code: u64) -> Option<&Product> {
        self.displayed
            .iter()
            .chain(self.all.iter())
            .find(|p| p.code == code)
    }

    fn set_search_term(&mut self, term: String) {
        if term.trim().is_empty() {
            self.displayed = self.all.clone();
        }
        self.search_term = term;
    }

    fn clear_search(&mut self) {
        self.search_term.clear();
        self.displayed = self.all.clone();
    }

    fn search(&mut self) -> Option<Effect> {
        match SearchQuery::parse(&self.search_term) {
            SearchQuery::All => {
                self.displayed = self.all.clone();
                None
            }
            SearchQuery::Code(code) => Some(Effect::LookupCode(code)),
            SearchQuery::NoSuchCode => {
                self.displayed.clear();
                None
            }
            SearchQuery::Name(term) => Some(Effect::SearchName(term)),
        }
    }

    fn open_edit(&mut self, code: u64) {
        match self.find(code).cloned() {
            Some(product) => self.form.open_edit(&product),
            None => log::warn!("Edit requested for unknown product {}", code),
        }
    }

    fn submit_form(&mut self, notifier: &dyn Notifier) -> Option<Effect> {
        match self.form.prepare(&self.all) {
            Ok(Submission::Create(product)) => Some(Effect::Create(product)),
            Ok(Submission::Update {
                original_code,
                product,
            }) => Some(Effect::Update {
                original_code,
                product,
            }),
            Err(e) => {
                log::warn!("Form rejected: {}", e);
                notifier.notify(Notification::error(e.to_string()));
                None
            }
        }
    }
}
