/// Everything the user can ask the catalog to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    // Listing
    LoadAll,

    // Search
    SetSearchTerm(String),
    Search,
    ClearSearch,

    // Form
    OpenCreate,
    OpenEdit { code: u64 },
    SetCodeInput(String),
    SetDescriptionInput(String),
    SubmitForm,
    CancelForm,

    // Delete confirmation
    RequestDelete { code: u64 },
    ConfirmDelete,
    CancelDelete,
}

impl CatalogAction {
    pub fn description(&self) -> &'static str {
        match self {
            CatalogAction::LoadAll => "Loading all products",
            CatalogAction::SetSearchTerm(_) => "Updating search term",
            CatalogAction::Search => "Searching products",
            CatalogAction::ClearSearch => "Clearing search",
            CatalogAction::OpenCreate => "Opening new product form",
            CatalogAction::OpenEdit { .. } => "Opening edit form",
            CatalogAction::SetCodeInput(_) => "Updating code field",
            CatalogAction::SetDescriptionInput(_) => "Updating description field",
            CatalogAction::SubmitForm => "Submitting product form",
            CatalogAction::CancelForm => "Closing product form",
            CatalogAction::RequestDelete { .. } => "Asking for delete confirmation",
            CatalogAction::ConfirmDelete => "Deleting product",
            CatalogAction::CancelDelete => "Cancelling delete",
        }
    }

    /// Whether handling this action may end in a request to the service.
    pub fn may_hit_network(&self) -> bool {
        match self {
            CatalogAction::LoadAll
            | CatalogAction::Search
            | CatalogAction::SubmitForm
            | CatalogAction::ConfirmDelete => true,

            CatalogAction::SetSearchTerm(_)
            | CatalogAction::ClearSearch
            | CatalogAction::OpenCreate
            | CatalogAction::OpenEdit { .. }
            | CatalogAction::SetCodeInput(_)
            | CatalogAction::SetDescriptionInput(_)
            | CatalogAction::CancelForm
            | CatalogAction::RequestDelete { .. }
            | CatalogAction::CancelDelete => false,
        }
    }
}
