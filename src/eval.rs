//! Evaluation of parsed expressions through the traversal engine.
//!
//! The parser only maps tokens to terms; whether the sequence forms exactly
//! one complete tree is discovered here, by the checked traversals, and
//! reported as ordinary diagnostics.

use std::path::Path;

use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::span::{Span, Spanned};
use crate::syntax::term::Term;
use crate::syntax::Program;
use crate::walk::{FlatView, WalkError};

/// Evaluate a parsed expression to a single value.
///
/// Fails if the program is empty, ends while an operator still expects
/// operands, or keeps going after the first complete tree.
pub fn evaluate(program: &Program) -> Result<f64, Vec<Diagnostic>> {
    let Some(last) = program.last() else {
        return Err(vec![empty_expression()]);
    };

    let view = FlatView::new(program.as_slice(), oracle);
    match view.try_fold(0, |term, children| term.node.eval(children)) {
        Ok((value, next)) if next == program.len() => Ok(value),
        Ok((_, next)) => Err(vec![trailing_tokens(program, next)]),
        Err(WalkError::Truncated { .. }) => Err(vec![missing_operands(last.span)]),
    }
}

/// Render the root-to-node chain of every node of the expression tree,
/// preorder, one line per node.
pub fn paths(program: &Program) -> Result<Vec<String>, Vec<Diagnostic>> {
    let Some(last) = program.last() else {
        return Err(vec![empty_expression()]);
    };

    let view = FlatView::new(program.as_slice(), oracle);
    let mut lines = Vec::new();
    match view.try_ancestors(0, |chain| {
        let rendered: Vec<String> = chain
            .iter()
            .map(|&pos| program[pos].node.to_string())
            .collect();
        lines.push(rendered.join(" "));
    }) {
        Ok(next) if next == program.len() => Ok(lines),
        Ok(next) => Err(vec![trailing_tokens(program, next)]),
        Err(WalkError::Truncated { .. }) => Err(vec![missing_operands(last.span)]),
    }
}

fn oracle(term: &Spanned<Term>) -> usize {
    term.node.arity()
}

fn empty_expression() -> Diagnostic {
    Diagnostic::error("empty expression".to_string(), Span::new(0, 0))
        .with_help("provide a prefix expression, e.g. `- x 3 5 / 8 2`".to_string())
}

fn missing_operands(at: Span) -> Diagnostic {
    Diagnostic::error(
        "expression ended while an operator still expected operands".to_string(),
        at,
    )
    .with_help(
        "check that every operator has its full number of operands: `sqrt` takes 1, all others take 2"
            .to_string(),
    )
}

fn trailing_tokens(program: &Program, next: usize) -> Diagnostic {
    let span = program[next..]
        .iter()
        .fold(program[next].span, |acc, term| acc.merge(term.span));
    let extra = program.len() - next;
    let plural = if extra == 1 { "" } else { "s" };
    Diagnostic::error(
        format!("expression continues after the first complete tree ({extra} unused token{plural})"),
        span,
    )
    .with_note(format!("the first complete tree uses the first {next} tokens"))
    .with_help("a prefix expression must form exactly one tree".to_string())
}

/// JSON report emitted by `eval --json`.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub expression: String,
    pub value: f64,
}

/// Read an expression from a file.
pub fn read_expression(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse_expression;

    fn eval(source: &str) -> Result<f64, Vec<Diagnostic>> {
        evaluate(&parse_expression(source)?)
    }

    #[test]
    fn test_subtract_multiply_divide() {
        // (3 * 5) - (8 / 2) = 15 - 4
        assert_eq!(eval("- x 3 5 / 8 2").unwrap(), 11.0);
    }

    #[test]
    fn test_sqrt_of_sum_of_squares() {
        // sqrt(3^2 + 4^2)
        assert_eq!(eval("sqrt + pow 3 2 pow 4 2").unwrap(), 5.0);
    }

    #[test]
    fn test_single_number() {
        assert_eq!(eval("42").unwrap(), 42.0);
    }

    #[test]
    fn test_error_empty_expression() {
        let errors = eval("").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("empty expression"));
    }

    #[test]
    fn test_error_missing_operands() {
        let errors = eval("+ 1").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("still expected operands"));
        // The diagnostic points at the last token.
        assert_eq!(errors[0].span.start, 2);
        assert_eq!(errors[0].span.end, 3);
    }

    #[test]
    fn test_error_trailing_tokens() {
        let errors = eval("+ 1 2 3 4").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("after the first complete tree"));
        assert!(errors[0].message.contains("2 unused tokens"));
        assert_eq!(errors[0].notes.len(), 1);
        // Span covers the unused suffix `3 4`.
        assert_eq!(errors[0].span.start, 6);
        assert_eq!(errors[0].span.end, 9);
    }

    #[test]
    fn test_paths_lists_every_node_preorder() {
        let program = parse_expression("- x 3 5 / 8 2").unwrap();
        assert_eq!(
            paths(&program).unwrap(),
            vec![
                "-",
                "- x",
                "- x 3",
                "- x 5",
                "- /",
                "- / 8",
                "- / 2",
            ]
        );
    }

    #[test]
    fn test_paths_rejects_incomplete_tree() {
        let program = parse_expression("pow 2").unwrap();
        assert!(paths(&program).is_err());
    }

    #[test]
    fn test_read_expression_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sqrt + pow 3 2 pow 4 2").unwrap();
        let source = read_expression(file.path()).unwrap();
        assert_eq!(eval(&source).unwrap(), 5.0);
    }

    #[test]
    fn test_read_expression_missing_file() {
        let err = read_expression(Path::new("/nonexistent/expr.txt")).unwrap_err();
        assert!(err.contains("cannot read"));
    }
}
