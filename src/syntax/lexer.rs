use crate::span::{Span, Spanned};

/// Splits an expression into whitespace-separated raw tokens, each carrying
/// its byte offsets. Classification happens later, in the parser; any
/// non-whitespace run is a token here.
pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    pub fn tokenize(mut self) -> Vec<Spanned<&'src str>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<Spanned<&'src str>> {
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.source.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < self.source.len() && !self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        // Tokens are delimited by ASCII whitespace, so the run stays on
        // UTF-8 boundaries.
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap();
        Some(Spanned::new(
            text,
            Span::new(start as u32, self.pos as u32),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<&str> {
        Lexer::new(source).tokenize().into_iter().map(|t| t.node).collect()
    }

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(lex("- x 3 5 / 8 2"), vec!["-", "x", "3", "5", "/", "8", "2"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(lex("sqrt\t+  pow 3 2\npow 4 2"), vec![
            "sqrt", "+", "pow", "3", "2", "pow", "4", "2"
        ]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(lex("").is_empty());
        assert!(lex(" \r\t\n").is_empty());
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = Lexer::new("  pow 12").tokenize();
        assert_eq!(tokens[0].span, Span::new(2, 5));
        assert_eq!(tokens[1].span, Span::new(6, 8));
    }

    #[test]
    fn test_unrecognized_chunks_are_still_tokens() {
        assert_eq!(lex("1 @#! 2"), vec!["1", "@#!", "2"]);
    }
}
