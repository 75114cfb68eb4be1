mod display;

use derive_more::{From, IsVariant};
use source_files::Source;

/// Every struct/union definition found at file scope
#[derive(Clone, Debug, Default)]
pub struct File {
    pub records: Vec<RecordDefinition>,
}

#[derive(Clone, Debug)]
pub struct RecordDefinition {
    pub composite: Composite,
    pub typedef_names: Vec<String>,
    pub source: Source,
}

impl RecordDefinition {
    /// Tag name, or the first typedef name for `typedef struct { ... } Name;`
    pub fn name(&self) -> Option<&str> {
        self.composite
            .name
            .as_deref()
            .or_else(|| self.typedef_names.first().map(String::as_str))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum CompositeKind {
    Struct,
    Union,
}

#[derive(Clone, Debug)]
pub struct Composite {
    pub kind: CompositeKind,
    pub source: Source,
    pub name: Option<String>,
    pub members: Option<Vec<MemberDeclaration>>,
}

impl Composite {
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

#[derive(Clone, Debug, From)]
pub enum MemberDeclaration {
    Member(Member),
    StaticAssert(StaticAssertDeclaration),
}

#[derive(Clone, Debug)]
pub struct StaticAssertDeclaration {
    pub condition: ConstExpr,
    pub message: Option<String>,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct Member {
    pub specifier_qualifiers: SpecifierQualifierList,
    pub member_declarators: Vec<MemberDeclarator>,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub enum MemberDeclarator {
    Declarator(Declarator),
    BitField(Option<Declarator>, ConstExpr),
}

impl MemberDeclarator {
    pub fn declarator(&self) -> Option<&Declarator> {
        match self {
            MemberDeclarator::Declarator(declarator) => Some(declarator),
            MemberDeclarator::BitField(declarator, _) => declarator.as_ref(),
        }
    }
}

/// Expression kept as its source text
#[derive(Clone, Debug)]
pub struct ConstExpr {
    pub text: String,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct Declarator {
    pub kind: DeclaratorKind,
    pub source: Source,
}

#[derive(Clone, Debug, IsVariant)]
pub enum DeclaratorKind {
    Named(String),
    Pointer(Box<Declarator>, Pointer),
    Function(Box<Declarator>, ParameterTypeList),
    Array(Box<Declarator>, ArrayQualifier),
}

impl DeclaratorKind {
    pub fn at(self, source: Source) -> Declarator {
        Declarator { kind: self, source }
    }
}

impl Declarator {
    pub fn name(&self) -> &str {
        match &self.kind {
            DeclaratorKind::Named(name) => name,
            DeclaratorKind::Pointer(inner, _)
            | DeclaratorKind::Function(inner, _)
            | DeclaratorKind::Array(inner, _) => inner.name(),
        }
    }

    /// Whether the declared entity has exactly the specifier type
    pub fn is_plain(&self) -> bool {
        self.kind.is_named()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Pointer {
    pub type_qualifiers: Vec<TypeQualifier>,
}

#[derive(Clone, Debug)]
pub struct ArrayQualifier {
    pub expression: Option<ConstExpr>,
    pub type_qualifiers: Vec<TypeQualifier>,
    pub is_static: bool,
}

/// Parameters are never interpreted, only reproduced
#[derive(Clone, Debug)]
pub struct ParameterTypeList {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct SpecifierQualifierList {
    pub type_specifier_qualifiers: Vec<TypeSpecifierQualifier>,
    pub source: Source,
}

impl SpecifierQualifierList {
    pub fn composite(&self) -> Option<&Composite> {
        self.type_specifier_qualifiers
            .iter()
            .find_map(|tsq| match tsq {
                TypeSpecifierQualifier::TypeSpecifier(TypeSpecifier {
                    kind: TypeSpecifierKind::Composite(composite),
                    ..
                }) => Some(composite),
                _ => None,
            })
    }

    pub fn has_type_specifier(&self) -> bool {
        self.type_specifier_qualifiers
            .iter()
            .any(TypeSpecifierQualifier::is_type_specifier)
    }
}

#[derive(Clone, Debug, From, IsVariant)]
pub enum TypeSpecifierQualifier {
    TypeSpecifier(TypeSpecifier),
    TypeQualifier(TypeQualifier),
    AlignmentSpecifier(AlignmentSpecifier),
}

#[derive(Clone, Debug)]
pub struct TypeSpecifier {
    pub kind: TypeSpecifierKind,
    pub source: Source,
}

#[derive(Clone, Debug, IsVariant)]
pub enum TypeSpecifierKind {
    Void,
    Bool,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Signed,
    Unsigned,
    Complex,
    Composite(Composite),
    Enumeration(Enumeration),
    TypedefName(String),
}

#[derive(Clone, Debug)]
pub struct TypeQualifier {
    pub kind: TypeQualifierKind,
    pub source: Source,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeQualifierKind {
    Const,
    Restrict,
    Volatile,
    Atomic,
}

#[derive(Clone, Debug)]
pub struct AlignmentSpecifier {
    pub argument: String,
    pub source: Source,
}

/// Enumerations only matter as member types, so their bodies stay opaque
#[derive(Clone, Debug)]
pub struct Enumeration {
    pub name: Option<String>,
    pub body: Option<String>,
    pub source: Source,
}
