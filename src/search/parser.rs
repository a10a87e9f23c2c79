//! Single-pass parser for search query strings.
//!
//! Syntax:
//! ```text
//! query    = element*
//! element  = term | "&" | "|" | "!" element
//! term     = bare word | quoted phrase ("..." or '...')
//! ```
//!
//! - `\` escapes the next character (inside or outside quotes).
//! - Adjacent terms with no explicit operator get an implicit `&`.
//! - `!` is folded into the `negated` flag of the next term or operator;
//!   it is never kept as a standalone element.
//! - Evaluation is strictly left to right with no operator precedence.

use crate::error::{QueryError, Result};
use crate::search::types::{Operator, SearchElement, SearchQuery};

// ============================================================================
// Builder
// ============================================================================

/// Accumulates the output element sequence during the character pass.
///
/// Negation is carried as a pending flag and applied to the next emitted
/// element, so the finished sequence never contains a `!` node.
struct QueryBuilder {
    elements: Vec<SearchElement>,
    pending_negation: bool,
}

impl QueryBuilder {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
            pending_negation: false,
        }
    }

    /// Flush the current term buffer as a `Term` element.
    ///
    /// Buffers that are empty after trimming are discarded (whitespace runs
    /// and empty quoted spans produce no elements). When the previous element
    /// is also a term, an implicit `&` is inserted first.
    fn flush_term(&mut self, buffer: &mut String) {
        if buffer.trim().is_empty() {
            buffer.clear();
            return;
        }

        if self.elements.last().is_some_and(|e| e.is_term()) {
            self.elements.push(SearchElement::Operator {
                op: Operator::And,
                negated: false,
            });
        }

        self.elements.push(SearchElement::Term {
            value: std::mem::take(buffer),
            negated: std::mem::take(&mut self.pending_negation),
        });
    }

    /// Append an `&`/`|` operator element.
    ///
    /// Two operators in a row are rejected. A preceding `!` does not count:
    /// it is folded into the operator's `negated` flag instead of being
    /// emitted, so `a !& b` parses as a negated AND.
    fn push_operator(&mut self, op: Operator) -> Result<()> {
        if self.elements.last().is_some_and(|e| e.is_operator()) {
            return Err(QueryError::ConsecutiveOperators);
        }

        self.elements.push(SearchElement::Operator {
            op,
            negated: std::mem::take(&mut self.pending_negation),
        });
        Ok(())
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Parse a search query string into a [`SearchQuery`].
///
/// Fails with [`QueryError::UnmatchedQuote`] when a quoted span is never
/// closed and [`QueryError::ConsecutiveOperators`] when two `&`/`|` tokens
/// appear with no term between them. Empty and whitespace-only input parse
/// to an empty query, which matches nothing.
pub fn parse(search_text: &str) -> Result<SearchQuery> {
    let mut builder = QueryBuilder::new();
    let mut term = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in search_text.chars() {
        // An escaped character is always literal, whatever it is. The
        // backslash itself is dropped.
        if escaped {
            term.push(ch);
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }

        // Either quote character toggles the same quoted mode, so opening
        // and closing quotes need not match. Closing flushes the phrase.
        if ch == '"' || ch == '\'' {
            if in_quotes {
                in_quotes = false;
                builder.flush_term(&mut term);
            } else {
                in_quotes = true;
            }
            continue;
        }

        if in_quotes {
            term.push(ch);
            continue;
        }

        match ch {
            '&' => {
                builder.flush_term(&mut term);
                builder.push_operator(Operator::And)?;
            }
            '|' => {
                builder.flush_term(&mut term);
                builder.push_operator(Operator::Or)?;
            }
            '!' => {
                builder.flush_term(&mut term);
                builder.pending_negation = true;
            }
            c if c.is_whitespace() => builder.flush_term(&mut term),
            c => term.push(c),
        }
    }

    if in_quotes {
        return Err(QueryError::UnmatchedQuote);
    }

    // A trailing backslash or dangling `!` escapes/negates nothing.
    builder.flush_term(&mut term);

    Ok(SearchQuery {
        elements: builder.elements,
    })
}

// ============================================================================
// Tests
// ============================================================================
