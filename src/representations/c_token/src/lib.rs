mod punctuator;

use derive_more::{Deref, IsVariant, Unwrap};
pub use punctuator::Punctuator;
use source_files::Source;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, IsVariant, Unwrap)]
pub enum CTokenKind {
    EndOfFile,
    Invalid(Invalid),
    Identifier(String),
    Punctuator(Punctuator),
    Number(String),
    CharacterConstant(String),
    StringLiteral(String),
    AlignasKeyword,
    AtomicKeyword,
    AutoKeyword,
    BoolKeyword,
    CharKeyword,
    ComplexKeyword,
    ConstKeyword,
    DoubleKeyword,
    EnumKeyword,
    ExternKeyword,
    FloatKeyword,
    InlineKeyword,
    IntKeyword,
    LongKeyword,
    RegisterKeyword,
    RestrictKeyword,
    ShortKeyword,
    SignedKeyword,
    StaticKeyword,
    StaticAssertKeyword,
    StructKeyword,
    ThreadLocalKeyword,
    TypedefKeyword,
    UnionKeyword,
    UnsignedKeyword,
    VoidKeyword,
    VolatileKeyword,
}

impl CTokenKind {
    pub fn at(self, source: Source) -> CToken {
        CToken { kind: self, source }
    }

    pub fn keyword(identifier: &str) -> Option<Self> {
        Some(match identifier {
            "alignas" | "_Alignas" => Self::AlignasKeyword,
            "_Atomic" => Self::AtomicKeyword,
            "auto" => Self::AutoKeyword,
            "bool" | "_Bool" => Self::BoolKeyword,
            "char" => Self::CharKeyword,
            "_Complex" => Self::ComplexKeyword,
            "const" => Self::ConstKeyword,
            "double" => Self::DoubleKeyword,
            "enum" => Self::EnumKeyword,
            "extern" => Self::ExternKeyword,
            "float" => Self::FloatKeyword,
            "inline" => Self::InlineKeyword,
            "int" => Self::IntKeyword,
            "long" => Self::LongKeyword,
            "register" => Self::RegisterKeyword,
            "restrict" => Self::RestrictKeyword,
            "short" => Self::ShortKeyword,
            "signed" => Self::SignedKeyword,
            "static" => Self::StaticKeyword,
            "static_assert" | "_Static_assert" => Self::StaticAssertKeyword,
            "struct" => Self::StructKeyword,
            "thread_local" | "_Thread_local" => Self::ThreadLocalKeyword,
            "typedef" => Self::TypedefKeyword,
            "union" => Self::UnionKeyword,
            "unsigned" => Self::UnsignedKeyword,
            "void" => Self::VoidKeyword,
            "volatile" => Self::VolatileKeyword,
            _ => return None,
        })
    }

    /// The token as it would be written in source
    pub fn spelling(&self) -> String {
        match self {
            CTokenKind::EndOfFile | CTokenKind::Invalid(_) => String::new(),
            CTokenKind::Identifier(identifier) | CTokenKind::Number(identifier) => {
                identifier.clone()
            }
            CTokenKind::Punctuator(punctuator) => punctuator.as_str().into(),
            CTokenKind::CharacterConstant(content) => format!("'{}'", content),
            CTokenKind::StringLiteral(content) => format!("\"{}\"", content),
            CTokenKind::AlignasKeyword => "alignas".into(),
            CTokenKind::AtomicKeyword => "_Atomic".into(),
            CTokenKind::AutoKeyword => "auto".into(),
            CTokenKind::BoolKeyword => "bool".into(),
            CTokenKind::CharKeyword => "char".into(),
            CTokenKind::ComplexKeyword => "_Complex".into(),
            CTokenKind::ConstKeyword => "const".into(),
            CTokenKind::DoubleKeyword => "double".into(),
            CTokenKind::EnumKeyword => "enum".into(),
            CTokenKind::ExternKeyword => "extern".into(),
            CTokenKind::FloatKeyword => "float".into(),
            CTokenKind::InlineKeyword => "inline".into(),
            CTokenKind::IntKeyword => "int".into(),
            CTokenKind::LongKeyword => "long".into(),
            CTokenKind::RegisterKeyword => "register".into(),
            CTokenKind::RestrictKeyword => "restrict".into(),
            CTokenKind::ShortKeyword => "short".into(),
            CTokenKind::SignedKeyword => "signed".into(),
            CTokenKind::StaticKeyword => "static".into(),
            CTokenKind::StaticAssertKeyword => "static_assert".into(),
            CTokenKind::StructKeyword => "struct".into(),
            CTokenKind::ThreadLocalKeyword => "thread_local".into(),
            CTokenKind::TypedefKeyword => "typedef".into(),
            CTokenKind::UnionKeyword => "union".into(),
            CTokenKind::UnsignedKeyword => "unsigned".into(),
            CTokenKind::VoidKeyword => "void".into(),
            CTokenKind::VolatileKeyword => "volatile".into(),
        }
    }

    pub fn is_punctuator_of(&self, expected: Punctuator) -> bool {
        matches!(self, CTokenKind::Punctuator(punctuator) if *punctuator == expected)
    }

    pub fn is_semicolon(&self) -> bool {
        self.is_punctuator_of(Punctuator::Semicolon)
    }

    pub fn is_comma(&self) -> bool {
        self.is_punctuator_of(Punctuator::Comma)
    }

    pub fn is_open_curly(&self) -> bool {
        self.is_punctuator_of(Punctuator::OpenCurly)
    }

    pub fn is_close_curly(&self) -> bool {
        self.is_punctuator_of(Punctuator::CloseCurly)
    }

    pub fn is_open_paren(&self) -> bool {
        self.is_punctuator_of(Punctuator::OpenParen)
    }

    pub fn is_close_paren(&self) -> bool {
        self.is_punctuator_of(Punctuator::CloseParen)
    }
}

#[derive(Clone, Debug, Deref)]
pub struct CToken {
    #[deref]
    pub kind: CTokenKind,

    pub source: Source,
}

impl CToken {
    pub fn new(kind: CTokenKind, source: Source) -> CToken {
        CToken { kind, source }
    }
}

impl Display for CTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CTokenKind::EndOfFile => write!(f, "<end-of-file>"),
            CTokenKind::Invalid(invalid) => invalid.fmt(f),
            CTokenKind::Identifier(identifier) => write!(f, "identifier '{}'", identifier),
            CTokenKind::Punctuator(punctuator) => write!(f, "'{}'", punctuator),
            CTokenKind::Number(_) => write!(f, "number literal"),
            CTokenKind::CharacterConstant(_) => write!(f, "character literal"),
            CTokenKind::StringLiteral(_) => write!(f, "string literal"),
            CTokenKind::AlignasKeyword => write!(f, "'alignas' keyword"),
            CTokenKind::AtomicKeyword => write!(f, "'_Atomic' keyword"),
            CTokenKind::AutoKeyword => write!(f, "'auto' keyword"),
            CTokenKind::BoolKeyword => write!(f, "'bool' keyword"),
            CTokenKind::CharKeyword => write!(f, "'char' keyword"),
            CTokenKind::ComplexKeyword => write!(f, "'_Complex' keyword"),
            CTokenKind::ConstKeyword => write!(f, "'const' keyword"),
            CTokenKind::DoubleKeyword => write!(f, "'double' keyword"),
            CTokenKind::EnumKeyword => write!(f, "'enum' keyword"),
            CTokenKind::ExternKeyword => write!(f, "'extern' keyword"),
            CTokenKind::FloatKeyword => write!(f, "'float' keyword"),
            CTokenKind::InlineKeyword => write!(f, "'inline' keyword"),
            CTokenKind::IntKeyword => write!(f, "'int' keyword"),
            CTokenKind::LongKeyword => write!(f, "'long' keyword"),
            CTokenKind::RegisterKeyword => write!(f, "'register' keyword"),
            CTokenKind::RestrictKeyword => write!(f, "'restrict' keyword"),
            CTokenKind::ShortKeyword => write!(f, "'short' keyword"),
            CTokenKind::SignedKeyword => write!(f, "'signed' keyword"),
            CTokenKind::StaticKeyword => write!(f, "'static' keyword"),
            CTokenKind::StaticAssertKeyword => write!(f, "'static_assert' keyword"),
            CTokenKind::StructKeyword => write!(f, "'struct' keyword"),
            CTokenKind::ThreadLocalKeyword => write!(f, "'thread_local' keyword"),
            CTokenKind::TypedefKeyword => write!(f, "'typedef' keyword"),
            CTokenKind::UnionKeyword => write!(f, "'union' keyword"),
            CTokenKind::UnsignedKeyword => write!(f, "'unsigned' keyword"),
            CTokenKind::VoidKeyword => write!(f, "'void' keyword"),
            CTokenKind::VolatileKeyword => write!(f, "'volatile' keyword"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Invalid {
    UnrecognizedSymbol(char),
    UnterminatedComment,
    UnterminatedLiteral,
}

impl Display for Invalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Invalid::UnrecognizedSymbol(c) => write!(f, "unrecognized symbol '{}'", c),
            Invalid::UnterminatedComment => write!(f, "unterminated block comment"),
            Invalid::UnterminatedLiteral => write!(f, "unterminated literal"),
        }
    }
}
