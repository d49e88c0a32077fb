//! Navigation route titles.
//!
//! # Route patterns
//!
//! ```text
//! /account                       - literal
//! /category/:market/:categoryid  - parameterized (placeholder segments)
//! ```
//!
//! A [`RouteTable`] is static configuration built once at startup: an ordered
//! list of path patterns, each with optional display metadata. Resolution is
//! a pure function of the table and the input path.
//!
//! Literal patterns always win over parameterized ones. Among parameterized
//! patterns, declaration order is the tie-break: the first declared pattern
//! that matches wins. Placeholder segments (`:name`) match exactly one
//! non-empty path segment and never cross a `/` boundary.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Error building a [`RouteTable`].
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// A parameterized pattern compiled to an invalid matcher.
    #[error("invalid route pattern {pattern:?}: {source}")]
    BadPattern {
        /// The offending pattern as declared.
        pattern: String,
        /// Underlying compile error.
        source: regex::Error,
    },
}

/// One declared route: a path pattern and its display metadata.
///
/// An entry with no title is legal; it resolves to the empty string. Such
/// entries exist to shadow broader parameterized patterns.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Literal path or template with `:name` placeholder segments.
    pub pattern: String,
    /// Display title shown for paths matching this pattern.
    pub title: Option<String>,
}

/// Ordered builder for a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    /// Declare a route with a display title.
    #[must_use]
    pub fn route(mut self, pattern: impl Into<String>, title: impl Into<String>) -> Self {
        self.entries.push(RouteEntry {
            pattern: pattern.into(),
            title: Some(title.into()),
        });
        self
    }

    /// Declare a route with no display metadata.
    #[must_use]
    pub fn untitled(mut self, pattern: impl Into<String>) -> Self {
        self.entries.push(RouteEntry {
            pattern: pattern.into(),
            title: None,
        });
        self
    }

    /// Compile the declared routes into a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::BadPattern`] if a parameterized pattern
    /// does not compile.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut literals = HashMap::new();
        let mut dynamic = Vec::new();

        for entry in self.entries {
            if is_parameterized(&entry.pattern) {
                let regex = compile_pattern(&entry.pattern).map_err(|source| {
                    RouteTableError::BadPattern {
                        pattern: entry.pattern.clone(),
                        source,
                    }
                })?;
                dynamic.push((regex, entry.title));
            } else {
                // First declaration wins on duplicate literals.
                literals.entry(entry.pattern).or_insert(entry.title);
            }
        }

        Ok(RouteTable { literals, dynamic })
    }
}

/// Process-wide mapping from path pattern to display title.
#[derive(Debug)]
pub struct RouteTable {
    literals: HashMap<String, Option<String>>,
    dynamic: Vec<(Regex, Option<String>)>,
}

impl RouteTable {
    /// Start declaring a table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The table covering the storefront and delivery-partner navigation
    /// surface.
    #[must_use]
    pub fn standard() -> &'static Self {
        static TABLE: LazyLock<RouteTable> = LazyLock::new(|| {
            RouteTable::builder()
                .route("/", "Home")
                .route("/account", "Account")
                .route("/account/orders", "Orders")
                .route("/account/addresses", "Addresses")
                .route("/cart", "Cart")
                .route("/checkout", "Checkout")
                .route("/search", "Search")
                .untitled("/category/deals")
                .route("/category/:market/:categoryid", "Products")
                .route("/product/:productid", "Product Details")
                .route("/orders/:orderid", "Order Details")
                .route("/deliveries", "Deliveries")
                .route("/deliveries/:deliveryid", "Delivery Details")
                .build()
                .expect("standard route table patterns compile")
        });
        &TABLE
    }

    /// Resolve the display title for a concrete navigation path.
    ///
    /// Returns the empty string when no pattern matches or the matching
    /// entry carries no title.
    #[must_use]
    pub fn resolve_title(&self, path: &str) -> &str {
        if let Some(title) = self.literals.get(path) {
            return title.as_deref().unwrap_or("");
        }

        self.dynamic
            .iter()
            .find(|(regex, _)| regex.is_match(path))
            .and_then(|(_, title)| title.as_deref())
            .unwrap_or("")
    }
}

/// True when the pattern contains at least one `:name` placeholder segment.
fn is_parameterized(pattern: &str) -> bool {
    pattern
        .split('/')
        .any(|segment| segment.len() > 1 && segment.starts_with(':'))
}

/// Compile a parameterized pattern into an anchored matcher.
///
/// Each placeholder segment becomes `[^/]+`; literal segments are escaped
/// verbatim. The whole path must match, not a prefix or suffix.
fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let segments: Vec<String> = pattern
        .split('/')
        .map(|segment| {
            if segment.len() > 1 && segment.starts_with(':') {
                "[^/]+".to_owned()
            } else {
                regex::escape(segment)
            }
        })
        .collect();

    Regex::new(&format!("^{}$", segments.join("/")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn table() -> &'static RouteTable {
        RouteTable::standard()
    }

    #[test]
    fn test_literal_match() {
        assert_eq!(table().resolve_title("/account"), "Account");
        assert_eq!(table().resolve_title("/"), "Home");
    }

    #[test]
    fn test_parameterized_match() {
        assert_eq!(table().resolve_title("/category/grocery/42"), "Products");
        assert_eq!(table().resolve_title("/product/sku-19"), "Product Details");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(table().resolve_title("/nonexistent/path"), "");
    }

    #[test]
    fn test_literal_shadows_parameterized() {
        // /category/deals is declared literally with no title, so it must
        // not fall through to /category/:market/:categoryid.
        assert_eq!(table().resolve_title("/category/deals"), "");
    }

    #[test]
    fn test_placeholder_never_matches_empty_segment() {
        assert_eq!(table().resolve_title("/category//42"), "");
        assert_eq!(table().resolve_title("/product/"), "");
    }

    #[test]
    fn test_placeholder_never_crosses_separator() {
        assert_eq!(table().resolve_title("/product/a/b"), "");
    }

    #[test]
    fn test_match_is_anchored_both_ends() {
        assert_eq!(table().resolve_title("/category/grocery/42/extra"), "");
        assert_eq!(table().resolve_title("/prefix/category/grocery/42"), "");
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let table = RouteTable::builder()
            .route("/a/:first", "First")
            .route("/a/:second", "Second")
            .build()
            .unwrap();
        assert_eq!(table.resolve_title("/a/x"), "First");
    }

    #[test]
    fn test_untitled_entry_resolves_to_empty() {
        let table = RouteTable::builder()
            .untitled("/bare")
            .untitled("/bare/:id")
            .build()
            .unwrap();
        assert_eq!(table.resolve_title("/bare"), "");
        assert_eq!(table.resolve_title("/bare/7"), "");
    }

    #[test]
    fn test_literal_segments_are_escaped_in_parameterized_patterns() {
        let table = RouteTable::builder()
            .route("/v1.0/:id", "Versioned")
            .build()
            .unwrap();
        // The '.' in the literal segment must not act as a wildcard.
        assert_eq!(table.resolve_title("/v1.0/5"), "Versioned");
        assert_eq!(table.resolve_title("/v1X0/5"), "");
    }
}
