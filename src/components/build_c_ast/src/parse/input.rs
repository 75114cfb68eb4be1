use super::{ParseError, ParseErrorKind};
use c_token::{CToken, CTokenKind, Punctuator};
use source_files::Source;

pub struct Input {
    tokens: Vec<CToken>,
    stack: Vec<usize>,
}

impl Input {
    pub fn new(mut tokens: Vec<CToken>) -> Self {
        if !tokens.last().is_some_and(|token| token.is_end_of_file()) {
            let source = tokens
                .last()
                .map_or_else(Source::internal, |token| token.source);

            tokens.push(CTokenKind::EndOfFile.at(source));
        }

        Self {
            tokens,
            stack: vec![0],
        }
    }

    fn position(&self) -> usize {
        *self.stack.last().expect("input position stack is never empty")
    }

    pub fn eof(&self) -> &CToken {
        self.tokens
            .last()
            .expect("input always ends with end-of-file token")
    }

    pub fn here(&self) -> Source {
        self.peek().source
    }

    pub fn peek(&self) -> &CToken {
        self.peek_nth(0)
    }

    pub fn peek_nth(&self, n: usize) -> &CToken {
        self.tokens
            .get(self.position() + n)
            .unwrap_or_else(|| self.eof())
    }

    pub fn peek_is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.peek().is_punctuator_of(punctuator)
    }

    pub fn advance(&mut self) -> &CToken {
        let index = self.position();

        if index < self.tokens.len() {
            if let Some(position) = self.stack.last_mut() {
                *position += 1;
            }
            &self.tokens[index]
        } else {
            self.eof()
        }
    }

    pub fn eat_punctuator(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_is_punctuator(punctuator) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect_punctuator(&mut self, punctuator: Punctuator) -> Result<Source, ParseError> {
        let token = self.peek();

        if token.is_punctuator_of(punctuator) {
            let source = token.source;
            self.advance();
            Ok(source)
        } else {
            Err(ParseErrorKind::Expected(punctuator, token.kind.clone()).at(token.source))
        }
    }

    pub fn speculate(&mut self) {
        self.stack.push(self.position());
    }

    pub fn backtrack(&mut self) {
        self.stack.pop();
        assert!(!self.stack.is_empty());
    }

    pub fn success(&mut self) {
        // Indicates that a speculation was successful,
        // so we can remove the backtrack point

        let success = self.position();
        self.stack.pop();
        self.stack.pop();
        self.stack.push(success);
    }
}
