use super::{ParseError, ParseErrorKind, Parser};
use c_ast::ConstExpr;
use c_token::{CTokenKind, Punctuator};

impl<'a> Parser<'a> {
    /// Collects the tokens up to (but not including) the first of `stops`
    /// that appears outside of brackets, reproducing the source spacing.
    pub(crate) fn parse_opaque_until(
        &mut self,
        stops: &[Punctuator],
    ) -> Result<ConstExpr, ParseError> {
        let source = self.input.here();
        let mut text = String::new();
        let mut previous_end = None;
        let mut depth = 0usize;

        loop {
            let token = self.input.peek();

            match &token.kind {
                CTokenKind::EndOfFile => break,
                CTokenKind::Invalid(invalid) => {
                    return Err(ParseErrorKind::Invalid(invalid.clone()).at(token.source));
                }
                CTokenKind::Punctuator(punctuator) => {
                    if depth == 0 && stops.contains(punctuator) {
                        break;
                    }

                    match punctuator {
                        Punctuator::OpenParen | Punctuator::OpenBracket | Punctuator::OpenCurly => {
                            depth += 1
                        }
                        Punctuator::CloseParen
                        | Punctuator::CloseBracket
                        | Punctuator::CloseCurly => {
                            // Unbalanced closer belongs to whoever called us
                            if depth == 0 {
                                break;
                            }
                            depth -= 1;
                        }
                        _ => (),
                    }
                }
                _ => (),
            }

            let spelling = token.kind.spelling();
            let location = token.source.location;

            if previous_end.is_some_and(|end| end != location) {
                text.push(' ');
            }

            text.push_str(&spelling);
            previous_end = Some(location.shift_column(spelling.chars().count() as u32));
            self.input.advance();
        }

        Ok(ConstExpr { text, source })
    }
}
