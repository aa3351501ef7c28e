//! Front end of the prefix-notation calculator: token scanning and the
//! token-to-term mapping that produces a flat preorder expression tree.

pub mod lexer;
pub mod term;

use crate::diagnostic::Diagnostic;
use crate::span::Spanned;

use lexer::Lexer;
use term::Term;

/// A parsed expression: terms in preorder, each carrying its source span.
/// The sequence itself is the tree; no nodes are linked, the arity of each
/// term locates its subtree.
pub type Program = Vec<Spanned<Term>>;

/// Map an expression source to a flat preorder term sequence.
///
/// Shape problems (an operator short of operands, extra trailing terms) are
/// not detected here; they surface when the tree is walked. See
/// [`crate::eval::evaluate`].
pub fn parse_expression(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let mut terms = Vec::new();
    let mut diagnostics = Vec::new();

    for token in Lexer::new(source).tokenize() {
        match Term::from_token(token.node) {
            Some(term) => terms.push(Spanned::new(term, token.span)),
            None => diagnostics.push(
                Diagnostic::error(format!("unknown token '{}'", token.node), token.span)
                    .with_help(
                        "expected a number or one of `+`, `-`, `x`, `/`, `sqrt`, `pow`"
                            .to_string(),
                    ),
            ),
        }
    }

    if diagnostics.is_empty() {
        Ok(terms)
    } else {
        Err(diagnostics)
    }
}
