//! Render-ready snapshot of the catalog screen.

use crate::catalog::CatalogState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub code: u64,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub code_editable: bool,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub code: u64,
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub search_term: String,
    pub cards: Vec<ProductCard>,
    /// Nothing to show: render the "add your first product" call to action.
    pub empty: bool,
    /// "Showing X of Y products", only while a search term is set.
    pub result_hint: Option<String>,
    pub form: Option<FormView>,
    pub delete_prompt: Option<DeletePrompt>,
    pub busy: bool,
}

impl CatalogView {
    pub fn from_state(state: &CatalogState) -> Self {
        let cards: Vec<ProductCard> = state
            .displayed()
            .iter()
            .map(|p| ProductCard {
                code: p.code,
                title: p.description.clone(),
                subtitle: format!("Code {}", p.code),
            })
            .collect();

        let result_hint = state.is_searching().then(|| {
            format!(
                "Showing {} of {} products",
                state.displayed().len(),
                state.all().len()
            )
        });

        let form = state.form().is_open().then(|| {
            let form = state.form();
            if form.is_editing() {
                FormView {
                    title: "Edit Product",
                    subtitle: "Make the changes you want to this product.",
                    submit_label: "Update",
                    code_editable: false,
                    code: form.code_input().to_string(),
                    description: form.description_input().to_string(),
                }
            } else {
                FormView {
                    title: "New Product",
                    subtitle: "Add a new product to the catalog.",
                    submit_label: "Create",
                    code_editable: true,
                    code: form.code_input().to_string(),
                    description: form.description_input().to_string(),
                }
            }
        });

        let delete_prompt = state.pending_delete().map(|p| DeletePrompt {
            code: p.code,
            title: "Confirm deletion",
            message: format!(
                "Are you sure you want to delete the product \"{}\"? This action cannot be undone.",
                p.description
            ),
        });

        Self {
            search_term: state.search_term().to_string(),
            empty: cards.is_empty(),
            cards,
            result_hint,
            form,
            delete_prompt,
            busy: state.is_busy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogAction, Outcome};
    use crate::model::Product;
    use crate::notify::NotificationLog;

    fn loaded(products: Vec<Product>) -> CatalogState {
        let log = NotificationLog::new();
        let mut state = CatalogState::new();
        state.handle(CatalogAction::LoadAll, &log);
        state.apply(Outcome::Loaded(Ok(products)), &log);
        state
    }

    #[test]
    fn test_empty_catalog_shows_call_to_action() {
        let view = CatalogView::from_state(&CatalogState::new());
        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.result_hint, None);
    }

    #[test]
    fn test_cards_follow_displayed_order() {
        let state = loaded(vec![Product::new(2, "Pen"), Product::new(1, "Eraser")]);
        let view = CatalogView::from_state(&state);

        assert!(!view.empty);
        assert!(!view.busy);
        assert_eq!(view.cards[0].title, "Eraser");
        assert_eq!(view.cards[0].subtitle, "Code 1");
        assert_eq!(view.cards[1].code, 2);
    }

    #[test]
    fn test_result_hint_while_searching() {
        let log = NotificationLog::new();
        let mut state = loaded(vec![Product::new(1, "Eraser"), Product::new(2, "Pen")]);
        state.handle(CatalogAction::SetSearchTerm("2".to_string()), &log);
        state.handle(CatalogAction::Search, &log);
        state.apply(Outcome::CodeLookup(Ok(Some(Product::new(2, "Pen")))), &log);

        let view = CatalogView::from_state(&state);
        assert_eq!(view.result_hint.as_deref(), Some("Showing 1 of 2 products"));
    }

    #[test]
    fn test_form_and_delete_prompt() {
        let log = NotificationLog::new();
        let mut state = loaded(vec![Product::new(9, "Stapler")]);

        state.handle(CatalogAction::OpenEdit { code: 9 }, &log);
        let form = CatalogView::from_state(&state).form.unwrap();
        assert_eq!(form.title, "Edit Product");
        assert_eq!(form.submit_label, "Update");
        assert!(!form.code_editable);
        assert_eq!(form.code, "9");

        state.handle(CatalogAction::CancelForm, &log);
        state.handle(CatalogAction::RequestDelete { code: 9 }, &log);
        let view = CatalogView::from_state(&state);
        assert!(view.form.is_none());
        let prompt = view.delete_prompt.unwrap();
        assert_eq!(prompt.code, 9);
        assert!(prompt.message.contains("\"Stapler\""));
    }
}
