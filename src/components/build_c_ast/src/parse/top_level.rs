use super::{ParseError, ParseErrorKind, Parser};
use c_ast::RecordDefinition;
use c_token::{CTokenKind, Punctuator};
use source_files::Source;

impl<'a> Parser<'a> {
    pub(crate) fn parse_external_declaration(
        &mut self,
        records: &mut Vec<RecordDefinition>,
    ) -> Result<(), ParseError> {
        let token = self.input.peek();
        let source = token.source;

        match &token.kind {
            CTokenKind::Invalid(invalid) => {
                self.recover(ParseErrorKind::Invalid(invalid.clone()).at(source))?;
                self.input.advance();
                return Ok(());
            }
            // Leftovers from conditional compilation, e.g. the closing brace of `extern "C" {`
            CTokenKind::Punctuator(Punctuator::Semicolon | Punctuator::CloseCurly) => {
                self.input.advance();
                return Ok(());
            }
            _ => (),
        }

        if self.eat_transparent_block_start() {
            return self.parse_block_declarations(records, source);
        }

        self.input.speculate();

        match self.parse_record_definition() {
            Ok(Some(record)) => {
                self.input.success();
                records.push(record);
                Ok(())
            }
            Ok(None) => {
                self.input.backtrack();
                self.skip_declaration(true)
            }
            // GCC attributes, C++ member functions and the like
            Err(error) => {
                self.input.backtrack();
                self.recover(error)?;
                self.skip_declaration(false)
            }
        }
    }

    // `namespace Name {` and `extern "C" {` only group declarations
    fn eat_transparent_block_start(&mut self) -> bool {
        let opens_block = match (&self.input.peek().kind, &self.input.peek_nth(1).kind) {
            (CTokenKind::Identifier(keyword), CTokenKind::Identifier(_)) if keyword == "namespace" => {
                self.input.peek_nth(2).is_open_curly()
            }
            (CTokenKind::Identifier(keyword), next) if keyword == "namespace" => {
                next.is_open_curly()
            }
            (CTokenKind::ExternKeyword, CTokenKind::StringLiteral(_)) => {
                self.input.peek_nth(2).is_open_curly()
            }
            _ => false,
        };

        if opens_block {
            while !self.input.advance().is_open_curly() {}
        }

        opens_block
    }

    fn parse_block_declarations(
        &mut self,
        records: &mut Vec<RecordDefinition>,
        source: Source,
    ) -> Result<(), ParseError> {
        loop {
            if self.input.eat_punctuator(Punctuator::CloseCurly) {
                return Ok(());
            }

            if self.input.peek().is_end_of_file() {
                return self.recover(ParseErrorKind::UnterminatedBlock.at(source));
            }

            self.parse_external_declaration(records)?;
        }
    }

    /// Returns `None` when the upcoming declaration doesn't define a struct or union
    fn parse_record_definition(&mut self) -> Result<Option<RecordDefinition>, ParseError> {
        let source = self.input.here();
        let mut is_typedef = false;

        loop {
            match &self.input.peek().kind {
                CTokenKind::TypedefKeyword => is_typedef = true,
                CTokenKind::StaticKeyword
                | CTokenKind::ExternKeyword
                | CTokenKind::ThreadLocalKeyword
                | CTokenKind::ConstKeyword
                | CTokenKind::VolatileKeyword => (),
                _ => break,
            }
            self.input.advance();
        }

        if !matches!(
            self.input.peek().kind,
            CTokenKind::StructKeyword | CTokenKind::UnionKeyword
        ) {
            return Ok(None);
        }

        let defines_body = match &self.input.peek_nth(1).kind {
            CTokenKind::Identifier(_) => self.input.peek_nth(2).is_open_curly(),
            next => next.is_open_curly(),
        };

        if !defines_body {
            return Ok(None);
        }

        let composite = self.parse_composite()?;
        let mut typedef_names = Vec::new();

        // Trailing qualifiers, e.g. `struct { ... } const x;`
        while matches!(
            self.input.peek().kind,
            CTokenKind::ConstKeyword | CTokenKind::VolatileKeyword
        ) {
            self.input.advance();
        }

        if !self.input.peek_is_punctuator(Punctuator::Semicolon) {
            loop {
                let declarator = self.parse_declarator()?;

                if is_typedef && declarator.is_plain() {
                    typedef_names.push(declarator.name().to_string());
                }

                if self.input.eat_punctuator(Punctuator::Assign) {
                    self.parse_opaque_until(&[Punctuator::Comma, Punctuator::Semicolon])?;
                }

                if !self.input.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
        }

        let token = self.input.peek();
        if !token.is_semicolon() {
            return Err(ParseErrorKind::ExpectedSemicolon(token.kind.clone()).at(token.source));
        }
        self.input.advance();

        Ok(Some(RecordDefinition {
            composite,
            typedef_names,
            source,
        }))
    }

    /// Invalid tokens of a record that already failed to parse are not reported again
    fn skip_declaration(&mut self, report_invalid: bool) -> Result<(), ParseError> {
        let mut depth = 0usize;

        loop {
            let token = self.input.peek();
            let source = token.source;

            match token.kind.clone() {
                CTokenKind::EndOfFile => return Ok(()),
                CTokenKind::Invalid(invalid) if report_invalid => {
                    self.recover(ParseErrorKind::Invalid(invalid).at(source))?;
                }
                CTokenKind::Punctuator(punctuator) => match punctuator {
                    Punctuator::OpenParen | Punctuator::OpenBracket | Punctuator::OpenCurly => {
                        depth += 1;
                    }
                    Punctuator::CloseParen | Punctuator::CloseBracket => {
                        depth = depth.saturating_sub(1);
                    }
                    // Closes an enclosing block instead
                    Punctuator::CloseCurly if depth == 0 => return Ok(()),
                    Punctuator::CloseCurly => {
                        depth -= 1;

                        if depth == 0 {
                            self.input.advance();
                            self.input.eat_punctuator(Punctuator::Semicolon);
                            return Ok(());
                        }
                    }
                    Punctuator::Semicolon if depth == 0 => {
                        self.input.advance();
                        return Ok(());
                    }
                    _ => (),
                },
                _ => (),
            }

            self.input.advance();
        }
    }
}
