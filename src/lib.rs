pub mod diagnostic;
pub mod eval;
pub mod span;
pub mod syntax;
pub mod walk;

// Re-exports: the traversal engine and the calculator front door
pub use syntax::{parse_expression, Program};
pub use walk::{FlatView, WalkError};

use diagnostic::{render_diagnostics, Diagnostic};

/// Parse and evaluate a prefix expression, rendering any diagnostics to
/// stderr.
pub fn evaluate_str(source: &str, filename: &str) -> Result<f64, Vec<Diagnostic>> {
    match evaluate_str_silent(source) {
        Ok(value) => Ok(value),
        Err(errors) => {
            render_diagnostics(&errors, filename, source);
            Err(errors)
        }
    }
}

/// Parse and evaluate a prefix expression without touching stderr.
pub fn evaluate_str_silent(source: &str) -> Result<f64, Vec<Diagnostic>> {
    let program = parse_expression(source)?;
    eval::evaluate(&program)
}
