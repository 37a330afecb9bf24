//! Picks which lookup a search term turns into.
//!
//! Numeric terms are treated as product codes and never reach the name search.
//! This relies on descriptions never being purely numeric; a unified search endpoint
//! on the service would remove the guess.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Blank term: show the cached full list.
    All,
    /// Exact lookup by code.
    Code(u64),
    /// Numeric, but no product can carry it (zero, negative, fractional, too large).
    NoSuchCode,
    /// Filter by description; the service owns the matching rules.
    Name(String),
}

impl SearchQuery {
    pub fn parse(term: &str) -> Self {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return SearchQuery::All;
        }

        if let Ok(code) = trimmed.parse::<u64>() {
            return if code > 0 {
                SearchQuery::Code(code)
            } else {
                SearchQuery::NoSuchCode
            };
        }

        if let Some(query) = Self::parse_radix(trimmed) {
            return query;
        }

        if matches!(trimmed, "Infinity" | "+Infinity" | "-Infinity") {
            return SearchQuery::NoSuchCode;
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                if n > 0.0 && n.fract() == 0.0 && n < u64::MAX as f64 {
                    SearchQuery::Code(n as u64)
                } else {
                    SearchQuery::NoSuchCode
                }
            }
            _ => SearchQuery::Name(term.to_string()),
        }
    }

    /// `0x`, `0o` and `0b` literals. Unsigned only, like the browser's `Number`.
    fn parse_radix(term: &str) -> Option<Self> {
        let radix = match term.get(..2)? {
            "0x" | "0X" => 16,
            "0o" | "0O" => 8,
            "0b" | "0B" => 2,
            _ => return None,
        };
        let digits = &term[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }

        Some(match u64::from_str_radix(digits, radix) {
            Ok(code) if code > 0 => SearchQuery::Code(code),
            _ => SearchQuery::NoSuchCode,
        })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SearchQuery::Code(_) | SearchQuery::NoSuchCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_terms_show_everything() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::All);
        assert_eq!(SearchQuery::parse("   \t"), SearchQuery::All);
    }

    #[test]
    fn test_integers_are_code_lookups() {
        assert_eq!(SearchQuery::parse("42"), SearchQuery::Code(42));
        assert_eq!(SearchQuery::parse(" 7 "), SearchQuery::Code(7));
        assert_eq!(SearchQuery::parse("1e3"), SearchQuery::Code(1000));
        assert_eq!(SearchQuery::parse("12.0"), SearchQuery::Code(12));
    }

    #[test]
    fn test_numbers_that_cannot_be_codes() {
        for term in ["0", "-3", "2.5", "1e30"] {
            let query = SearchQuery::parse(term);
            assert_eq!(query, SearchQuery::NoSuchCode, "term {:?}", term);
            assert!(query.is_numeric());
        }
    }

    #[test]
    fn test_text_goes_to_name_search() {
        assert_eq!(
            SearchQuery::parse("Widget 2"),
            SearchQuery::Name("Widget 2".to_string())
        );
        assert_eq!(SearchQuery::parse("NaN"), SearchQuery::Name("NaN".to_string()));
        assert!(!SearchQuery::parse("inf").is_numeric());
        assert_eq!(SearchQuery::parse("0xZZ"), SearchQuery::Name("0xZZ".to_string()));
        assert_eq!(SearchQuery::parse("-0x1A"), SearchQuery::Name("-0x1A".to_string()));
    }

    #[test]
    fn test_prefixed_literals_are_code_lookups() {
        assert_eq!(SearchQuery::parse("0x1A"), SearchQuery::Code(26));
        assert_eq!(SearchQuery::parse("0o17"), SearchQuery::Code(15));
        assert_eq!(SearchQuery::parse(" 0B101 "), SearchQuery::Code(5));
        assert_eq!(SearchQuery::parse("0x0"), SearchQuery::NoSuchCode);
        assert_eq!(
            SearchQuery::parse("0xFFFFFFFFFFFFFFFFFF"),
            SearchQuery::NoSuchCode
        );
    }

    #[test]
    fn test_infinity_is_numeric_but_never_a_code() {
        for term in ["Infinity", "+Infinity", "-Infinity"] {
            assert_eq!(SearchQuery::parse(term), SearchQuery::NoSuchCode, "term {:?}", term);
        }
    }
}
