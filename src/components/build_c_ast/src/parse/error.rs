use c_token::{CTokenKind, Invalid, Punctuator};
use diagnostics::{Diagnostic, Show, minimal_filename};
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};

#[derive(Clone, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: Source,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: Source) -> Self {
        Self { kind, source }
    }

    pub fn message(message: &'static str, source: Source) -> Self {
        Self {
            kind: ParseErrorKind::Misc(message),
            source,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.source.location)
    }
}

impl Show for ParseError {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        write!(
            w,
            "{}:{}:{}: error: {}",
            minimal_filename(self.source, source_files, project_root),
            self.source.location.line,
            self.source.location.column,
            self.kind,
        )
    }
}

impl Diagnostic for ParseError {
    fn is_error(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
pub enum ParseErrorKind {
    Invalid(Invalid),
    Expected(Punctuator, CTokenKind),
    ExpectedSemicolon(CTokenKind),
    ExpectedMemberDeclarator(CTokenKind),
    ExpectedTypeSpecifier(CTokenKind),
    ExpectedTypeNameOrMemberDeclarationList,
    UnterminatedBlock,
    Misc(&'static str),
}

impl ParseErrorKind {
    pub fn at(self, source: Source) -> ParseError {
        ParseError { kind: self, source }
    }
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Invalid(invalid) => write!(f, "Invalid token, {}", invalid),
            ParseErrorKind::Expected(punctuator, got) => {
                write!(f, "Expected '{}', got {}", punctuator, got)
            }
            ParseErrorKind::ExpectedSemicolon(got) => write!(f, "Expected ';', got {}", got),
            ParseErrorKind::ExpectedMemberDeclarator(got) => {
                write!(f, "Expected member declarator, got {}", got)
            }
            ParseErrorKind::ExpectedTypeSpecifier(got) => {
                write!(f, "Expected type specifier, got {}", got)
            }
            ParseErrorKind::ExpectedTypeNameOrMemberDeclarationList => {
                f.write_str("Expected type name or member declaration list")
            }
            ParseErrorKind::UnterminatedBlock => f.write_str("Missing closing '}' for block"),
            ParseErrorKind::Misc(message) => f.write_str(message),
        }
    }
}
