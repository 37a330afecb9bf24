//! Create/edit form for a single product.

use crate::error::FormError;
use crate::model::Product;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing `original`; its code is locked.
    Edit { original: Product },
}

/// What a valid form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Product),
    Update { original_code: u64, product: Product },
}

#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    open: bool,
    mode: FormMode,
    code_input: String,
    description_input: String,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.mode = FormMode::Edit {
            original: product.clone(),
        };
        self.code_input = product.code.to_string();
        self.description_input = product.description.clone();
        self.open = true;
    }

    /// Closes the form and clears every field.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn code_editable(&self) -> bool {
        !self.is_editing()
    }

    pub fn code_input(&self) -> &str {
        &self.code_input
    }

    /// Keeps only ASCII digits. Ignored while editing.
    pub fn set_code_input(&mut self, raw: &str) {
        if self.is_editing() {
            return;
        }
        self.code_input = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    }

    pub fn description_input(&self) -> &str {
        &self.description_input
    }

    pub fn set_description_input(&mut self, value: impl Into<String>) {
        self.description_input = value.into();
    }

    /// Checks required fields and the code, without looking at other products.
    pub fn validate(&self) -> Result<Product, FormError> {
        if self.code_input.trim().is_empty() || self.description_input.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        let code = match &self.mode {
            FormMode::Edit { original } => original.code,
            FormMode::Create => match self.code_input.trim().parse::<u64>() {
                Ok(code) if code > 0 => code,
                _ => return Err(FormError::InvalidCode),
            },
        };

        Ok(Product::new(code, self.description_input.clone()))
    }

    /// Validates and, for new products, refuses codes already present in `existing`.
    pub fn prepare(&self, existing: &[Product]) -> Result<Submission, FormError> {
        let product = self.validate()?;

        match &self.mode {
            FormMode::Create => {
                if existing.iter().any(|p| p.code == product.code) {
                    return Err(FormError::DuplicateCode(product.code));
                }
                Ok(Submission::Create(product))
            }
            FormMode::Edit { original } => Ok(Submission::Update {
                original_code: original.code,
                product,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str, description: &str) -> ProductForm {
        let mut form = ProductForm::new();
        form.open_create();
        form.set_code_input(code);
        form.set_description_input(description);
        form
    }

    #[test]
    fn test_code_input_keeps_digits_only() {
        let form = filled("a1-2 3x", "Widget");
        assert_eq!(form.code_input(), "123");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(filled("", "Widget").validate(), Err(FormError::MissingFields));
        assert_eq!(filled("5", "").validate(), Err(FormError::MissingFields));
        assert_eq!(filled("5", "   ").validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_code_must_be_positive() {
        assert_eq!(filled("0", "Widget").validate(), Err(FormError::InvalidCode));
        assert_eq!(filled("000", "Widget").validate(), Err(FormError::InvalidCode));
        assert_eq!(
            filled("99999999999999999999999", "Widget").validate(),
            Err(FormError::InvalidCode)
        );
    }

    #[test]
    fn test_duplicate_code_blocked_on_create() {
        let existing = vec![Product::new(5, "Gadget")];
        assert_eq!(
            filled("5", "Widget").prepare(&existing),
            Err(FormError::DuplicateCode(5))
        );
        assert_eq!(
            filled("6", "Widget").prepare(&existing),
            Ok(Submission::Create(Product::new(6, "Widget")))
        );
    }

    #[test]
    fn test_edit_locks_code_and_keeps_original() {
        let original = Product::new(5, "Widget");
        let mut form = ProductForm::new();
        form.open_edit(&original);

        assert!(form.is_open());
        assert!(!form.code_editable());
        form.set_code_input("77");
        assert_eq!(form.code_input(), "5");

        form.set_description_input("Widget XL");
        assert_eq!(
            form.prepare(&[original.clone()]),
            Ok(Submission::Update {
                original_code: 5,
                product: Product::new(5, "Widget XL"),
            })
        );
    }

    #[test]
    fn test_close_resets_to_create_mode() {
        let mut form = ProductForm::new();
        form.open_edit(&Product::new(3, "Pen"));
        form.close();

        assert!(!form.is_open());
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.code_input(), "");
        assert_eq!(form.description_input(), "");
    }
}
