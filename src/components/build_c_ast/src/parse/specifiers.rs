use super::{ParseError, ParseErrorKind, Parser};
use c_ast::{
    AlignmentSpecifier, Enumeration, SpecifierQualifierList, TypeQualifier, TypeQualifierKind,
    TypeSpecifier, TypeSpecifierKind, TypeSpecifierQualifier,
};
use c_token::{CTokenKind, Punctuator};

impl<'a> Parser<'a> {
    pub(crate) fn parse_specifier_qualifier_list(
        &mut self,
    ) -> Result<SpecifierQualifierList, ParseError> {
        let source = self.input.here();
        let mut list = SpecifierQualifierList {
            type_specifier_qualifiers: Vec::new(),
            source,
        };

        loop {
            let token = self.input.peek();
            let token_source = token.source;

            let simple = match &token.kind {
                CTokenKind::VoidKeyword => Some(TypeSpecifierKind::Void),
                CTokenKind::BoolKeyword => Some(TypeSpecifierKind::Bool),
                CTokenKind::CharKeyword => Some(TypeSpecifierKind::Char),
                CTokenKind::ShortKeyword => Some(TypeSpecifierKind::Short),
                CTokenKind::IntKeyword => Some(TypeSpecifierKind::Int),
                CTokenKind::LongKeyword => Some(TypeSpecifierKind::Long),
                CTokenKind::FloatKeyword => Some(TypeSpecifierKind::Float),
                CTokenKind::DoubleKeyword => Some(TypeSpecifierKind::Double),
                CTokenKind::SignedKeyword => Some(TypeSpecifierKind::Signed),
                CTokenKind::UnsignedKeyword => Some(TypeSpecifierKind::Unsigned),
                CTokenKind::ComplexKeyword => Some(TypeSpecifierKind::Complex),
                CTokenKind::Identifier(name) if !list.has_type_specifier() => {
                    Some(TypeSpecifierKind::TypedefName(name.clone()))
                }
                _ => None,
            };

            if let Some(kind) = simple {
                self.input.advance();
                list.type_specifier_qualifiers.push(
                    TypeSpecifier {
                        kind,
                        source: token_source,
                    }
                    .into(),
                );
                continue;
            }

            let qualifier = match &self.input.peek().kind {
                CTokenKind::ConstKeyword => Some(TypeQualifierKind::Const),
                CTokenKind::RestrictKeyword => Some(TypeQualifierKind::Restrict),
                CTokenKind::VolatileKeyword => Some(TypeQualifierKind::Volatile),
                CTokenKind::AtomicKeyword
                    if !self.input.peek_nth(1).is_punctuator_of(Punctuator::OpenParen) =>
                {
                    Some(TypeQualifierKind::Atomic)
                }
                _ => None,
            };

            if let Some(kind) = qualifier {
                self.input.advance();
                list.type_specifier_qualifiers.push(
                    TypeQualifier {
                        kind,
                        source: token_source,
                    }
                    .into(),
                );
                continue;
            }

            let specifier_qualifier: TypeSpecifierQualifier = match &self.input.peek().kind {
                CTokenKind::StructKeyword | CTokenKind::UnionKeyword => TypeSpecifier {
                    kind: TypeSpecifierKind::Composite(self.parse_composite()?),
                    source: token_source,
                }
                .into(),
                CTokenKind::EnumKeyword => TypeSpecifier {
                    kind: TypeSpecifierKind::Enumeration(self.parse_enumeration()?),
                    source: token_source,
                }
                .into(),
                CTokenKind::AtomicKeyword => {
                    // `_Atomic(type)` is kept as written
                    self.input.advance();
                    self.input.expect_punctuator(Punctuator::OpenParen)?;
                    let inner = self.parse_opaque_until(&[Punctuator::CloseParen])?;
                    self.input.expect_punctuator(Punctuator::CloseParen)?;

                    TypeSpecifier {
                        kind: TypeSpecifierKind::TypedefName(format!("_Atomic({})", inner.text)),
                        source: token_source,
                    }
                    .into()
                }
                CTokenKind::AlignasKeyword => {
                    self.input.advance();
                    self.input.expect_punctuator(Punctuator::OpenParen)?;
                    let argument = self.parse_opaque_until(&[Punctuator::CloseParen])?;
                    self.input.expect_punctuator(Punctuator::CloseParen)?;

                    AlignmentSpecifier {
                        argument: argument.text,
                        source: token_source,
                    }
                    .into()
                }
                CTokenKind::StaticKeyword
                | CTokenKind::ExternKeyword
                | CTokenKind::RegisterKeyword
                | CTokenKind::AutoKeyword
                | CTokenKind::ThreadLocalKeyword
                | CTokenKind::TypedefKeyword => {
                    return Err(ParseError::message(
                        "Storage classes not supported here",
                        token_source,
                    ));
                }
                CTokenKind::InlineKeyword => {
                    return Err(ParseError::message(
                        "Function specifiers cannot be used here",
                        token_source,
                    ));
                }
                _ => break,
            };

            list.type_specifier_qualifiers.push(specifier_qualifier);
        }

        if !list.has_type_specifier() {
            let token = self.input.peek();
            return Err(ParseErrorKind::ExpectedTypeSpecifier(token.kind.clone()).at(token.source));
        }

        Ok(list)
    }

    fn parse_enumeration(&mut self) -> Result<Enumeration, ParseError> {
        let source = self.input.here();
        self.input.advance();

        let name = match &self.input.peek().kind {
            CTokenKind::Identifier(name) => {
                let name = name.clone();
                self.input.advance();
                Some(name)
            }
            _ => None,
        };

        // Fixed underlying type, e.g. `enum E : int`
        if self.input.eat_punctuator(Punctuator::Colon) {
            self.parse_opaque_until(&[
                Punctuator::OpenCurly,
                Punctuator::Semicolon,
                Punctuator::Comma,
            ])?;
        }

        let body = if self.input.eat_punctuator(Punctuator::OpenCurly) {
            let body = self.parse_opaque_until(&[Punctuator::CloseCurly])?;

            if !self.input.eat_punctuator(Punctuator::CloseCurly) {
                return Err(ParseErrorKind::UnterminatedBlock.at(source));
            }

            Some(body.text)
        } else {
            None
        };

        if name.is_none() && body.is_none() {
            return Err(ParseErrorKind::ExpectedTypeNameOrMemberDeclarationList.at(source));
        }

        Ok(Enumeration { name, body, source })
    }
}
