use reqwest::StatusCode;

use crate::client::ProductApi;
use crate::error::Result;
use crate::model::Product;

/// One request the catalog wants sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadAll,
    LookupCode(u64),
    SearchName(String),
    Create(Product),
    Update { original_code: u64, product: Product },
    Delete(u64),
}

/// What came back for an [`Effect`].
#[derive(Debug)]
pub enum Outcome {
    Loaded(Result<Vec<Product>>),
    CodeLookup(Result<Option<Product>>),
    NameSearch(Result<Vec<Product>>),
    Created(Result<StatusCode>),
    Updated(Result<StatusCode>),
    Deleted { code: u64, result: Result<StatusCode> },
}

impl Effect {
    pub fn description(&self) -> &'static str {
        match self {
            Effect::LoadAll => "GET /products",
            Effect::LookupCode(_) => "GET /products/{code}",
            Effect::SearchName(_) => "POST /products/search",
            Effect::Create(_) => "POST /products",
            Effect::Update { .. } => "PUT /products/{code}",
            Effect::Delete(_) => "DELETE /products/{code}",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Effect::Create(_) | Effect::Update { .. } | Effect::Delete(_))
    }

    pub async fn execute<A: ProductApi + ?Sized>(self, api: &A) -> Outcome {
        log::debug!("Executing effect: {}", self.description());

        match self {
            Effect::LoadAll => Outcome::Loaded(api.list_products().await),
            Effect::LookupCode(code) => Outcome::CodeLookup(api.find_by_code(code).await),
            Effect::SearchName(term) => Outcome::NameSearch(api.search_by_name(&term).await),
            Effect::Create(product) => Outcome::Created(api.create_product(&product).await),
            Effect::Update {
                original_code,
                product,
            } => Outcome::Updated(api.update_product(original_code, &product).await),
            Effect::Delete(code) => Outcome::Deleted {
                code,
                result: api.delete_product(code).await,
            },
        }
    }
}
