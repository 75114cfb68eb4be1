use crate::{AggregateKind, Member, Signature, Tag};
use derive_more::IsVariant;
use std::fmt::Display;

/// What ties the members of a group together
#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum GroupKey {
    /// Every member declared with this tag name, across statements
    Tag(String),
    /// The declarators of one tag-less aggregate statement
    Statement(usize),
    /// A member sharing its type with nobody, keyed by its source order
    Single(usize),
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Tag(name) => write!(f, "tag {}", name),
            GroupKey::Statement(_) => f.write_str("statement"),
            GroupKey::Single(_) => f.write_str("single"),
        }
    }
}

/// Members that are declared with one and the same type
#[derive(Clone, Debug)]
pub struct AnonymousGroup {
    pub key: GroupKey,
    pub members: Vec<Member>,
}

impl AnonymousGroup {
    pub fn new(key: GroupKey, first: Member) -> Self {
        Self {
            key,
            members: vec![first],
        }
    }

    pub fn first(&self) -> &Member {
        &self.members[0]
    }

    /// The first known signature, members of a tag group may not all carry the body
    pub fn signature(&self) -> Option<&Signature> {
        self.members
            .iter()
            .find_map(|member| member.signature.as_ref())
    }

    pub fn tag(&self) -> Option<&Tag> {
        if !self.key.is_tag() {
            return None;
        }

        self.members
            .iter()
            .find_map(|member| member.enclosing_tag.as_ref())
    }

    pub fn aggregate_kind(&self) -> Option<AggregateKind> {
        self.tag()
            .map(|tag| tag.kind)
            .or_else(|| self.signature().and_then(Signature::aggregate).map(|a| a.kind))
    }

    /// A tag-less aggregate type, which is distinct from every other one
    pub fn is_anonymous_type(&self) -> bool {
        self.key.is_statement()
    }

    /// `union { int a1; };`
    pub fn is_embedded(&self) -> bool {
        self.members.len() == 1 && self.first().is_anonymous()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AggregateSignature, SignatureField};
    use source_files::Source;

    fn member(name: &str, order: usize, signature: Option<Signature>) -> Member {
        Member {
            name: name.into(),
            signature,
            source_order: order,
            enclosing_tag: None,
            statement: order,
            declarator: name.into(),
            defines_body: false,
            source: Source::internal(),
        }
    }

    fn union_of(fields: &[(&str, &str)]) -> Signature {
        Signature::Aggregate(AggregateSignature {
            kind: AggregateKind::Union,
            fields: fields
                .iter()
                .map(|(ty, name)| SignatureField::new(*ty, *name, format!("{}{}", ty, name)))
                .collect(),
        })
    }

    #[test]
    fn signature_comes_from_first_member_that_has_one() {
        let tag = Tag::new(AggregateKind::Union, "T");

        let mut t2 = member("t2", 0, None);
        t2.enclosing_tag = Some(tag.clone());
        let mut t1 = member("t1", 1, Some(union_of(&[("char *", "h")])));
        t1.enclosing_tag = Some(tag.clone());

        let mut group = AnonymousGroup::new(GroupKey::Tag("T".into()), t2);
        group.members.push(t1);

        assert_eq!(group.signature().unwrap().to_string(), "{char *h;}");
        assert_eq!(group.tag(), Some(&tag));
        assert_eq!(group.aggregate_kind(), Some(AggregateKind::Union));
        assert_eq!(group.names().collect::<Vec<_>>(), vec!["t2", "t1"]);
        assert!(!group.is_anonymous_type());
    }

    #[test]
    fn embedded_group() {
        let group = AnonymousGroup::new(
            GroupKey::Statement(1),
            member("", 1, Some(union_of(&[("int ", "a1")]))),
        );

        assert!(group.is_embedded());
        assert!(group.is_anonymous_type());
        assert_eq!(group.key.to_string(), "statement");
    }

    #[test]
    fn same_shape_ignores_spelling() {
        let spelled = AggregateSignature {
            kind: AggregateKind::Struct,
            fields: vec![SignatureField::new("char *", "h", "char* h")],
        };
        let other = AggregateSignature {
            kind: AggregateKind::Struct,
            fields: vec![SignatureField::new("char *", "h", "char *h")],
        };

        assert!(spelled.same_shape(&other));
        assert_ne!(spelled, other);

        let union = AggregateSignature {
            kind: AggregateKind::Union,
            ..other.clone()
        };
        assert!(!union.same_shape(&other));
        assert_eq!(other.body_to_c(), "{ char *h; }");
    }
}
