use super::{ParseError, ParseErrorKind, Parser};
use c_ast::{
    Composite, CompositeKind, Member, MemberDeclaration, MemberDeclarator,
    StaticAssertDeclaration,
};
use c_token::{CTokenKind, Punctuator};

impl<'a> Parser<'a> {
    pub(crate) fn parse_composite(&mut self) -> Result<Composite, ParseError> {
        let source = self.input.here();

        let kind = match &self.input.advance().kind {
            CTokenKind::StructKeyword => CompositeKind::Struct,
            CTokenKind::UnionKeyword => CompositeKind::Union,
            _ => return Err(ParseError::message("Expected 'struct' or 'union'", source)),
        };

        let name = match &self.input.peek().kind {
            CTokenKind::Identifier(name) => {
                let name = name.clone();
                self.input.advance();
                Some(name)
            }
            _ => None,
        };

        let members = if self.input.eat_punctuator(Punctuator::OpenCurly) {
            let mut members = Vec::new();

            loop {
                if self.input.eat_punctuator(Punctuator::CloseCurly) {
                    break;
                }

                if self.input.peek().is_end_of_file() {
                    return Err(ParseErrorKind::UnterminatedBlock.at(source));
                }

                // Stray semicolons are allowed between members
                if self.input.eat_punctuator(Punctuator::Semicolon) {
                    continue;
                }

                members.push(self.parse_member_declaration()?);
            }

            Some(members)
        } else {
            None
        };

        if name.is_none() && members.is_none() {
            return Err(ParseErrorKind::ExpectedTypeNameOrMemberDeclarationList.at(source));
        }

        Ok(Composite {
            kind,
            source,
            name,
            members,
        })
    }

    fn parse_member_declaration(&mut self) -> Result<MemberDeclaration, ParseError> {
        if self.input.peek().is_static_assert_keyword() {
            return self.parse_static_assert().map(MemberDeclaration::from);
        }

        let source = self.input.here();
        let specifier_qualifiers = self.parse_specifier_qualifier_list()?;
        let mut member_declarators = Vec::new();

        if !self.input.peek_is_punctuator(Punctuator::Semicolon) {
            loop {
                member_declarators.push(self.parse_member_declarator()?);

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

        Ok(MemberDeclaration::Member(Member {
            specifier_qualifiers,
            member_declarators,
            source,
        }))
    }

    fn parse_member_declarator(&mut self) -> Result<MemberDeclarator, ParseError> {
        const WIDTH_END: &[Punctuator] = &[Punctuator::Comma, Punctuator::Semicolon];

        if self.input.eat_punctuator(Punctuator::Colon) {
            let width = self.parse_opaque_until(WIDTH_END)?;
            return Ok(MemberDeclarator::BitField(None, width));
        }

        let declarator = self.parse_declarator()?;

        if self.input.eat_punctuator(Punctuator::Colon) {
            let width = self.parse_opaque_until(WIDTH_END)?;
            return Ok(MemberDeclarator::BitField(Some(declarator), width));
        }

        Ok(MemberDeclarator::Declarator(declarator))
    }

    fn parse_static_assert(&mut self) -> Result<StaticAssertDeclaration, ParseError> {
        let source = self.input.here();
        self.input.advance();
        self.input.expect_punctuator(Punctuator::OpenParen)?;

        let condition = self.parse_opaque_until(&[Punctuator::Comma, Punctuator::CloseParen])?;

        let message = if self.input.eat_punctuator(Punctuator::Comma) {
            let mut message = String::new();

            // Adjacent string literals are concatenated
            while let CTokenKind::StringLiteral(content) = &self.input.peek().kind {
                message.push_str(content);
                self.input.advance();
            }

            Some(message)
        } else {
            None
        };

        self.input.expect_punctuator(Punctuator::CloseParen)?;

        let token = self.input.peek();
        if !token.is_semicolon() {
            return Err(ParseErrorKind::ExpectedSemicolon(token.kind.clone()).at(token.source));
        }
        self.input.advance();

        Ok(StaticAssertDeclaration {
            condition,
            message,
            source,
        })
    }
}
