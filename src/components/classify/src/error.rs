use diagnostics::{Diagnostic, Show, minimal_filename};
use record_shape::{AggregateKind, Tag};
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};

/// A member whose declared type can't be placed in any group
#[derive(Clone, Debug)]
pub struct InvalidDeclaration {
    pub kind: InvalidDeclarationKind,
    pub source: Source,
    pub source_order: usize,
}

#[derive(Clone, Debug)]
pub enum InvalidDeclarationKind {
    AnonymousWithoutSignature,
    AnonymousNotAggregate(String),
    TagOnNonAggregate(String, String),
    ConflictingTagKind {
        name: String,
        declared: AggregateKind,
        used: AggregateKind,
    },
    ConflictingTagBody(Tag),
    InconsistentStatement(String),
    UnknownType(String),
    DuplicateSourceOrder(String),
}

impl InvalidDeclarationKind {
    pub fn at(self, source: Source, source_order: usize) -> InvalidDeclaration {
        InvalidDeclaration {
            kind: self,
            source,
            source_order,
        }
    }
}

impl Display for InvalidDeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDeclarationKind::AnonymousWithoutSignature => {
                f.write_str("Anonymous member has no known layout")
            }
            InvalidDeclarationKind::AnonymousNotAggregate(signature) => write!(
                f,
                "Anonymous member must be a struct or union, got '{}'",
                signature
            ),
            InvalidDeclarationKind::TagOnNonAggregate(tag, signature) => write!(
                f,
                "Tag '{}' cannot name non-aggregate type '{}'",
                tag, signature
            ),
            InvalidDeclarationKind::ConflictingTagKind {
                name,
                declared,
                used,
            } => write!(
                f,
                "'{}' is declared as a {} but used as a {}",
                name, declared, used
            ),
            InvalidDeclarationKind::ConflictingTagBody(tag) => {
                write!(f, "'{}' is defined with conflicting bodies", tag)
            }
            InvalidDeclarationKind::InconsistentStatement(name) => write!(
                f,
                "Member '{}' disagrees on its type with the rest of its declaration",
                name
            ),
            InvalidDeclarationKind::UnknownType(name) => {
                write!(f, "Member '{}' has neither a tag nor a type", name)
            }
            InvalidDeclarationKind::DuplicateSourceOrder(name) => {
                write!(f, "Member '{}' shares its position with another member", name)
            }
        }
    }
}

impl Display for InvalidDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (member #{})", self.kind, self.source_order)
    }
}

impl Show for InvalidDeclaration {
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

impl Diagnostic for InvalidDeclaration {
    fn is_error(&self) -> bool {
        true
    }
}
