//! Query AST types for the search language.

use serde::{Deserialize, Serialize};

/// A boolean connective between terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Both sides must match (`&`).
    And,
    /// Either side may match (`|`).
    Or,
}

/// One element of a parsed query.
///
/// The raw `!` token never appears here: parsing folds it into the `negated`
/// flag of the element that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchElement {
    /// A literal substring to search for, matched case-insensitively.
    Term { value: String, negated: bool },
    /// An AND/OR connective. When negated, the following term's contribution
    /// is inverted before combining.
    Operator { op: Operator, negated: bool },
}

impl SearchElement {
    /// An unnegated term.
    pub fn term(value: impl Into<String>) -> Self {
        SearchElement::Term {
            value: value.into(),
            negated: false,
        }
    }

    /// A negated term.
    pub fn negated_term(value: impl Into<String>) -> Self {
        SearchElement::Term {
            value: value.into(),
            negated: true,
        }
    }

    /// An unnegated operator.
    pub fn operator(op: Operator) -> Self {
        SearchElement::Operator { op, negated: false }
    }

    pub fn is_term(&self) -> bool {
        matches!(self, SearchElement::Term { .. })
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, SearchElement::Operator { .. })
    }
}

/// A parsed query: terms and operators in left-to-right source order.
///
/// For every successfully parsed input the sequence alternates term /
/// operator, starting and ending with a term (or is empty). The query is
/// immutable after parsing; [`SearchQuery::matches`] may be called any number
/// of times against different texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub elements: Vec<SearchElement>,
}

impl SearchQuery {
    /// A query with no elements. Matches nothing.
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Evaluate this query against a candidate text.
    ///
    /// See [`crate::search::matcher::evaluate`] for the combination rules.
    pub fn matches(&self, text: &str) -> bool {
        crate::search::matcher::evaluate(self, text)
    }
}
