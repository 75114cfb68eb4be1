use crate::{
    ArrayQualifier, Composite, CompositeKind, Declarator, DeclaratorKind, Enumeration,
    Member, MemberDeclaration, MemberDeclarator, SpecifierQualifierList, TypeQualifier,
    TypeQualifierKind, TypeSpecifierKind, TypeSpecifierQualifier,
};
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

impl Display for CompositeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            CompositeKind::Struct => "struct",
            CompositeKind::Union => "union",
        })
    }
}

impl Composite {
    /// `union T`, `union { ... }` or `union T { ... }`
    pub fn to_c(&self) -> String {
        let head = match &self.name {
            Some(name) => format!("{} {}", self.kind, name),
            None => self.kind.to_string(),
        };

        match &self.members {
            Some(members) => format!("{} {}", head, body_to_c(members)),
            None => head,
        }
    }
}

fn body_to_c(members: &[MemberDeclaration]) -> String {
    if members.is_empty() {
        return "{}".into();
    }

    format!("{{ {} }}", members.iter().map(ToString::to_string).join(" "))
}

impl Display for MemberDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MemberDeclaration::Member(member) => member.fmt(f),
            MemberDeclaration::StaticAssert(static_assert) => {
                match &static_assert.message {
                    Some(message) => write!(
                        f,
                        "static_assert({}, \"{}\");",
                        static_assert.condition.text, message
                    ),
                    None => write!(f, "static_assert({});", static_assert.condition.text),
                }
            }
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.specifier_qualifiers)?;

        if !self.member_declarators.is_empty() {
            write!(
                f,
                " {}",
                self.member_declarators.iter().map(member_declarator_to_c).join(", ")
            )?;
        }

        f.write_str(";")
    }
}

fn member_declarator_to_c(member_declarator: &MemberDeclarator) -> String {
    match member_declarator {
        MemberDeclarator::Declarator(declarator) => declarator.to_c(),
        MemberDeclarator::BitField(Some(declarator), width) => {
            format!("{} : {}", declarator.to_c(), width.text)
        }
        MemberDeclarator::BitField(None, width) => format!(": {}", width.text),
    }
}

impl MemberDeclarator {
    pub fn to_c(&self) -> String {
        member_declarator_to_c(self)
    }
}

impl Display for SpecifierQualifierList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let rendered = self
            .type_specifier_qualifiers
            .iter()
            .map(|tsq| match tsq {
                TypeSpecifierQualifier::TypeSpecifier(type_specifier) => {
                    type_specifier.kind.to_c()
                }
                TypeSpecifierQualifier::TypeQualifier(type_qualifier) => {
                    type_qualifier.to_string()
                }
                TypeSpecifierQualifier::AlignmentSpecifier(alignment) => {
                    format!("alignas({})", alignment.argument)
                }
            })
            .join(" ");

        f.write_str(&rendered)
    }
}

impl TypeSpecifierKind {
    pub fn to_c(&self) -> String {
        match self {
            TypeSpecifierKind::Void => "void".into(),
            TypeSpecifierKind::Bool => "bool".into(),
            TypeSpecifierKind::Char => "char".into(),
            TypeSpecifierKind::Short => "short".into(),
            TypeSpecifierKind::Int => "int".into(),
            TypeSpecifierKind::Long => "long".into(),
            TypeSpecifierKind::Float => "float".into(),
            TypeSpecifierKind::Double => "double".into(),
            TypeSpecifierKind::Signed => "signed".into(),
            TypeSpecifierKind::Unsigned => "unsigned".into(),
            TypeSpecifierKind::Complex => "_Complex".into(),
            TypeSpecifierKind::Composite(composite) => composite.to_c(),
            TypeSpecifierKind::Enumeration(enumeration) => enumeration.to_c(),
            TypeSpecifierKind::TypedefName(name) => name.clone(),
        }
    }
}

impl Enumeration {
    pub fn to_c(&self) -> String {
        match (&self.name, &self.body) {
            (Some(name), Some(body)) => format!("enum {} {{ {} }}", name, body),
            (Some(name), None) => format!("enum {}", name),
            (None, Some(body)) => format!("enum {{ {} }}", body),
            (None, None) => "enum".into(),
        }
    }
}

impl Display for TypeQualifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self.kind {
            TypeQualifierKind::Const => "const",
            TypeQualifierKind::Restrict => "restrict",
            TypeQualifierKind::Volatile => "volatile",
            TypeQualifierKind::Atomic => "_Atomic",
        })
    }
}

impl Declarator {
    /// The declarator as written, e.g. `*h` or `(*callback)(void *data)`
    pub fn to_c(&self) -> String {
        render_declarator(self, Some(self.name()))
    }

    /// The declarator with its name removed, e.g. `*` or `(*)(void *data)`
    pub fn to_abstract_c(&self) -> String {
        render_declarator(self, None)
    }
}

fn render_declarator(declarator: &Declarator, name: Option<&str>) -> String {
    match &declarator.kind {
        DeclaratorKind::Named(_) => name.unwrap_or_default().into(),
        DeclaratorKind::Pointer(inner, pointer) => {
            let qualifiers = pointer
                .type_qualifiers
                .iter()
                .map(|qualifier| format!("{} ", qualifier))
                .join("");

            format!("*{}{}", qualifiers, render_declarator(inner, name))
                .trim_end()
                .into()
        }
        DeclaratorKind::Function(inner, parameters) => {
            format!("{}({})", parenthesized(inner, name), parameters.text)
        }
        DeclaratorKind::Array(inner, qualifier) => {
            format!("{}[{}]", parenthesized(inner, name), array_qualifier_to_c(qualifier))
        }
    }
}

fn parenthesized(inner: &Declarator, name: Option<&str>) -> String {
    let rendered = render_declarator(inner, name);

    if inner.kind.is_pointer() {
        format!("({})", rendered)
    } else {
        rendered
    }
}

fn array_qualifier_to_c(qualifier: &ArrayQualifier) -> String {
    let mut parts = Vec::new();

    if qualifier.is_static {
        parts.push("static".to_string());
    }

    parts.extend(qualifier.type_qualifiers.iter().map(ToString::to_string));

    if let Some(expression) = &qualifier.expression {
        parts.push(expression.text.clone());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use crate::*;
    use source_files::Source;

    fn named(name: &str) -> Declarator {
        DeclaratorKind::Named(name.into()).at(Source::internal())
    }

    fn pointer(inner: Declarator) -> Declarator {
        DeclaratorKind::Pointer(Box::new(inner), Pointer::default()).at(Source::internal())
    }

    fn array(inner: Declarator, size: &str) -> Declarator {
        DeclaratorKind::Array(
            Box::new(inner),
            ArrayQualifier {
                expression: Some(ConstExpr {
                    text: size.into(),
                    source: Source::internal(),
                }),
                type_qualifiers: vec![],
                is_static: false,
            },
        )
        .at(Source::internal())
    }

    #[test]
    fn renders_pointer_to_array_with_parentheses() {
        let pointer_to_array = array(pointer(named("rows")), "4");
        assert_eq!(pointer_to_array.to_c(), "(*rows)[4]");
        assert_eq!(pointer_to_array.to_abstract_c(), "(*)[4]");

        let array_of_pointers = pointer(array(named("rows"), "4"));
        assert_eq!(array_of_pointers.to_c(), "*rows[4]");
        assert_eq!(array_of_pointers.to_abstract_c(), "*[4]");
    }

    #[test]
    fn renders_function_pointer() {
        let callback = DeclaratorKind::Function(
            Box::new(pointer(named("callback"))),
            ParameterTypeList {
                text: "void *data, int idx".into(),
            },
        )
        .at(Source::internal());

        assert_eq!(callback.name(), "callback");
        assert_eq!(callback.to_c(), "(*callback)(void *data, int idx)");
        assert_eq!(callback.to_abstract_c(), "(*)(void *data, int idx)");
    }

    #[test]
    fn renders_const_pointer() {
        let const_pointer = DeclaratorKind::Pointer(
            Box::new(named("p")),
            Pointer {
                type_qualifiers: vec![TypeQualifier {
                    kind: TypeQualifierKind::Const,
                    source: Source::internal(),
                }],
            },
        )
        .at(Source::internal());

        assert_eq!(const_pointer.to_c(), "*const p");
        assert_eq!(const_pointer.to_abstract_c(), "*const");
    }

    #[test]
    fn renders_composite_with_body() {
        let composite = Composite {
            kind: CompositeKind::Union,
            source: Source::internal(),
            name: Some("T".into()),
            members: Some(vec![MemberDeclaration::Member(Member {
                specifier_qualifiers: SpecifierQualifierList {
                    type_specifier_qualifiers: vec![
                        TypeSpecifier {
                            kind: TypeSpecifierKind::Char,
                            source: Source::internal(),
                        }
                        .into(),
                    ],
                    source: Source::internal(),
                },
                member_declarators: vec![MemberDeclarator::Declarator(pointer(named("h")))],
                source: Source::internal(),
            })]),
        };

        assert_eq!(composite.to_c(), "union T { char *h; }");
    }
}
