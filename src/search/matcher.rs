//! Query evaluation against candidate text.

use crate::search::types::{Operator, SearchElement, SearchQuery};

/// Evaluate a parsed query against a candidate text.
///
/// Terms match as case-insensitive contiguous substrings of `text` (no
/// tokenization or word-boundary awareness). Results combine strictly left
/// to right: there is no `&`-before-`|` precedence, `a | b & c` means
/// `(a | b) & c`. A negated term inverts its own result; a negated operator
/// additionally inverts the contribution of the term that follows it.
///
/// An empty query matches nothing. Evaluation never fails and never mutates
/// the query, so one query can be reused across any number of texts.
pub fn evaluate(query: &SearchQuery, text: &str) -> bool {
    if query.elements.is_empty() {
        return false;
    }

    let haystack = text.to_lowercase();
    let mut accumulator: Option<bool> = None;
    let mut pending: Option<(Operator, bool)> = None;

    for element in &query.elements {
        match element {
            SearchElement::Operator { op, negated } => {
                pending = Some((*op, *negated));
            }
            SearchElement::Term { value, negated } => {
                let mut contribution = haystack.contains(&value.to_lowercase());
                if *negated {
                    contribution = !contribution;
                }

                accumulator = Some(match (accumulator, pending.take()) {
                    // First term; a leading operator has no left operand and
                    // is ignored.
                    (None, _) => contribution,
                    (Some(lhs), Some((op, op_negated))) => {
                        let rhs = if op_negated { !contribution } else { contribution };
                        match op {
                            Operator::And => lhs && rhs,
                            Operator::Or => lhs || rhs,
                        }
                    }
                    // Adjacent terms cannot come out of the parser, but a
                    // hand-built sequence gets the implicit-AND treatment.
                    (Some(lhs), None) => lhs && contribution,
                });
            }
        }
    }

    // A trailing operator has no right operand and is ignored.
    accumulator.unwrap_or(false)
}
