use c_token::{CToken, CTokenKind, Invalid, Punctuator};
use text::{Character, Text};

pub struct Lexer<T: Text> {
    text: T,
    at_line_start: bool,
}

impl<T: Text> Lexer<T> {
    pub fn new(text: T) -> Self {
        Self {
            text,
            at_line_start: true,
        }
    }

    pub fn next_token(&mut self) -> CToken {
        loop {
            if let Some(invalid) = self.skip_trivia() {
                return invalid;
            }

            let Character::At(c, source) = self.text.next() else {
                return CTokenKind::EndOfFile.at(self.text.source());
            };

            let line_start = std::mem::replace(&mut self.at_line_start, false);

            let kind = match c {
                // Preprocessing directives are not interpreted, only skipped
                '#' if line_start => {
                    self.skip_directive();
                    continue;
                }
                '"' => self.lex_quoted('"', CTokenKind::StringLiteral),
                '\'' => self.lex_quoted('\'', CTokenKind::CharacterConstant),
                '0'..='9' => self.lex_number(c),
                '.' if self.text.peek().is_digit() => self.lex_number(c),
                '.' if self.text.eat("..") => CTokenKind::Punctuator(Punctuator::Ellipses),
                _ if text::is_c_non_digit(c) => self.lex_identifier(c),
                _ => Punctuator::from_char(c)
                    .map(CTokenKind::Punctuator)
                    .unwrap_or(CTokenKind::Invalid(Invalid::UnrecognizedSymbol(c))),
            };

            return kind.at(source);
        }
    }

    fn skip_trivia(&mut self) -> Option<CToken> {
        loop {
            let peek = self.text.peek();

            if peek.is('\n') {
                self.text.next();
                self.at_line_start = true;
            } else if peek.is_spacing() {
                self.text.next();
            } else if self.text.eat("//") {
                while self.text.peek().is_present() && !self.text.peek().is('\n') {
                    self.text.next();
                }
            } else if let Ok(source) = self.text.eat_remember("/*") {
                loop {
                    if self.text.eat("*/") {
                        break;
                    }

                    match self.text.next() {
                        Character::At('\n', _) => self.at_line_start = true,
                        Character::At(..) => (),
                        Character::End(_) => {
                            return Some(
                                CTokenKind::Invalid(Invalid::UnterminatedComment).at(source),
                            );
                        }
                    }
                }
            } else {
                return None;
            }
        }
    }

    fn skip_directive(&mut self) {
        loop {
            match self.text.next() {
                Character::At('\\', _) if self.text.peek().is('\n') => {
                    self.text.next();
                }
                Character::At('\n', _) | Character::End(_) => break,
                Character::At(..) => (),
            }
        }

        self.at_line_start = true;
    }

    fn lex_identifier(&mut self, first: char) -> CTokenKind {
        let mut identifier = String::from(first);

        while self.text.peek().is_c_identifier_char() {
            identifier.push(self.text.next().or_nul());
        }

        // Encoding prefixes on literals
        if matches!(identifier.as_str(), "L" | "u" | "U" | "u8") {
            if self.text.eat('"') {
                return self.lex_quoted('"', CTokenKind::StringLiteral);
            }

            if self.text.eat('\'') {
                return self.lex_quoted('\'', CTokenKind::CharacterConstant);
            }
        }

        CTokenKind::keyword(&identifier).unwrap_or(CTokenKind::Identifier(identifier))
    }

    fn lex_number(&mut self, first: char) -> CTokenKind {
        let mut number = String::from(first);

        loop {
            let peek = self.text.peek();

            let continues = peek.is_c_identifier_char()
                || peek.is('.')
                || peek.is('\'')
                || ((peek.is('+') || peek.is('-'))
                    && matches!(number.chars().last(), Some('e' | 'E' | 'p' | 'P')));

            if !continues {
                break;
            }

            number.push(self.text.next().or_nul());
        }

        CTokenKind::Number(number)
    }

    fn lex_quoted(&mut self, terminator: char, make: fn(String) -> CTokenKind) -> CTokenKind {
        let mut content = String::new();

        loop {
            match self.text.next() {
                Character::At('\\', _) => {
                    content.push('\\');

                    if let Character::At(escaped, _) = self.text.next() {
                        content.push(escaped);
                    }
                }
                Character::At(c, _) if c == terminator => return make(content),
                Character::At('\n', _) | Character::End(_) => {
                    self.at_line_start = true;
                    return CTokenKind::Invalid(Invalid::UnterminatedLiteral);
                }
                Character::At(c, _) => content.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lex_c_code;
    use c_token::{CTokenKind, Invalid, Punctuator};
    use indoc::indoc;
    use source_files::{Location, SourceFiles};

    fn kinds(content: &str) -> Vec<CTokenKind> {
        lex_c_code(content, SourceFiles::INTERNAL_KEY)
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn lexes_union_member() {
        assert_eq!(
            kinds("union T { char *h; } t1;"),
            vec![
                CTokenKind::UnionKeyword,
                CTokenKind::Identifier("T".into()),
                CTokenKind::Punctuator(Punctuator::OpenCurly),
                CTokenKind::CharKeyword,
                CTokenKind::Punctuator(Punctuator::Multiply),
                CTokenKind::Identifier("h".into()),
                CTokenKind::Punctuator(Punctuator::Semicolon),
                CTokenKind::Punctuator(Punctuator::CloseCurly),
                CTokenKind::Identifier("t1".into()),
                CTokenKind::Punctuator(Punctuator::Semicolon),
                CTokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn skips_comments_and_directives() {
        let content = indoc! {r#"
            // config
            #define IMGUI_DISABLE_OBSOLETE_FUNCTIONS
            #define LONG_MACRO(x) \
                x + 1
            /* block
               comment */ int a; // trailing
            #include "imgui.h"
        "#};

        assert_eq!(
            kinds(content),
            vec![
                CTokenKind::IntKeyword,
                CTokenKind::Identifier("a".into()),
                CTokenKind::Punctuator(Punctuator::Semicolon),
                CTokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn hash_inside_a_line_is_not_a_directive() {
        assert_eq!(
            kinds("int a; # b"),
            vec![
                CTokenKind::IntKeyword,
                CTokenKind::Identifier("a".into()),
                CTokenKind::Punctuator(Punctuator::Semicolon),
                CTokenKind::Invalid(Invalid::UnrecognizedSymbol('#')),
                CTokenKind::Identifier("b".into()),
                CTokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn keeps_array_sizes_as_text() {
        assert_eq!(
            kinds("char TempBuffer[1024*3+1];")[2..7],
            [
                CTokenKind::Punctuator(Punctuator::OpenBracket),
                CTokenKind::Number("1024".into()),
                CTokenKind::Punctuator(Punctuator::Multiply),
                CTokenKind::Number("3".into()),
                CTokenKind::Punctuator(Punctuator::Add),
            ]
        );
        assert_eq!(kinds("1.5e-3f")[0], CTokenKind::Number("1.5e-3f".into()));
    }

    #[test]
    fn reports_unterminated_comment() {
        let tokens = lex_c_code("int a;\n/* never closed", SourceFiles::INTERNAL_KEY);
        let invalid = &tokens[3];

        assert_eq!(
            invalid.kind,
            CTokenKind::Invalid(Invalid::UnterminatedComment)
        );
        assert_eq!(invalid.source.location, Location::new(2, 1));
    }

    #[test]
    fn records_token_locations() {
        let tokens = lex_c_code("struct A {\n    int x;\n};", SourceFiles::INTERNAL_KEY);
        assert_eq!(tokens[3].source.location, Location::new(2, 5));
        assert_eq!(tokens[4].source.location, Location::new(2, 9));
    }
}
