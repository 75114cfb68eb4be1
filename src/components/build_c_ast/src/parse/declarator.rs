use super::{ParseError, ParseErrorKind, Parser};
use c_ast::{
    ArrayQualifier, Declarator, DeclaratorKind, ParameterTypeList, Pointer, TypeQualifier,
    TypeQualifierKind,
};
use c_token::{CTokenKind, Punctuator};

impl<'a> Parser<'a> {
    pub(crate) fn parse_declarator(&mut self) -> Result<Declarator, ParseError> {
        let source = self.input.here();

        if self.input.eat_punctuator(Punctuator::Multiply) {
            let pointer = Pointer {
                type_qualifiers: self.parse_type_qualifiers(),
            };

            let inner = self.parse_declarator()?;
            return Ok(DeclaratorKind::Pointer(Box::new(inner), pointer).at(source));
        }

        let mut declarator = self.parse_direct_declarator_base()?;

        loop {
            let source = self.input.here();

            if self.input.eat_punctuator(Punctuator::OpenBracket) {
                let is_static = self.input.peek().is_static_keyword();
                if is_static {
                    self.input.advance();
                }

                let type_qualifiers = self.parse_type_qualifiers();

                let expression = if self.input.peek_is_punctuator(Punctuator::CloseBracket) {
                    None
                } else {
                    Some(self.parse_opaque_until(&[Punctuator::CloseBracket])?)
                };

                self.input.expect_punctuator(Punctuator::CloseBracket)?;

                declarator = DeclaratorKind::Array(
                    Box::new(declarator),
                    ArrayQualifier {
                        expression,
                        type_qualifiers,
                        is_static,
                    },
                )
                .at(source);
            } else if self.input.eat_punctuator(Punctuator::OpenParen) {
                let parameters = self.parse_opaque_until(&[Punctuator::CloseParen])?;
                self.input.expect_punctuator(Punctuator::CloseParen)?;

                declarator = DeclaratorKind::Function(
                    Box::new(declarator),
                    ParameterTypeList {
                        text: parameters.text,
                    },
                )
                .at(source);
            } else {
                return Ok(declarator);
            }
        }
    }

    fn parse_direct_declarator_base(&mut self) -> Result<Declarator, ParseError> {
        let token = self.input.peek();
        let source = token.source;

        match &token.kind {
            CTokenKind::Identifier(name) => {
                let name = name.clone();
                self.input.advance();
                Ok(DeclaratorKind::Named(name).at(source))
            }
            CTokenKind::Punctuator(Punctuator::OpenParen) => {
                self.input.advance();
                let inner = self.parse_declarator()?;
                self.input.expect_punctuator(Punctuator::CloseParen)?;
                Ok(inner)
            }
            CTokenKind::Invalid(invalid) => {
                Err(ParseErrorKind::Invalid(invalid.clone()).at(source))
            }
            got => Err(ParseErrorKind::ExpectedMemberDeclarator(got.clone()).at(source)),
        }
    }

    fn parse_type_qualifiers(&mut self) -> Vec<TypeQualifier> {
        let mut type_qualifiers = Vec::new();

        loop {
            let token = self.input.peek();

            let kind = match &token.kind {
                CTokenKind::ConstKeyword => TypeQualifierKind::Const,
                CTokenKind::RestrictKeyword => TypeQualifierKind::Restrict,
                CTokenKind::VolatileKeyword => TypeQualifierKind::Volatile,
                CTokenKind::AtomicKeyword => TypeQualifierKind::Atomic,
                _ => return type_qualifiers,
            };

            type_qualifiers.push(TypeQualifier {
                kind,
                source: token.source,
            });
            self.input.advance();
        }
    }
}
