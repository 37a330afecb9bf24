use serde::{Deserialize, Serialize};

/// A catalog entry as the remote service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub code: u64,
    pub description: String,
}

impl Product {
    pub fn new(code: u64, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// Body of `POST /products/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFilter {
    pub description: String,
}

impl NameFilter {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let product = Product::new(5, "Widget");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({ "code": 5, "description": "Widget" }));
    }

    #[test]
    fn test_negative_code_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"code": -1, "description": "Bad"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_name_filter_body() {
        let filter = NameFilter::new("wid");
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"description":"wid"}"#
        );
    }
}
