mod group;
mod signature;

pub use group::{AnonymousGroup, GroupKey};
pub use signature::{AggregateKind, AggregateSignature, Signature, SignatureField};
use source_files::Source;
use std::fmt::Display;

/// One declarator of a record's member declaration list
#[derive(Clone, Debug)]
pub struct Member {
    /// Empty for an anonymous embedded aggregate
    pub name: String,
    /// Shape of the specifier type, pointer/array derivation lives in `declarator`
    pub signature: Option<Signature>,
    pub source_order: usize,
    pub enclosing_tag: Option<Tag>,
    /// Index of the member declaration statement this declarator belongs to
    pub statement: usize,
    pub declarator: String,
    /// Whether this member's own declaration spells out the aggregate body,
    /// false for `union T t2;` and for `struct Node *next;` inside `Node`
    pub defines_body: bool,
    pub source: Source,
}

impl Member {
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn aggregate(&self) -> Option<&AggregateSignature> {
        self.signature.as_ref().and_then(Signature::aggregate)
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if self.is_anonymous() {
            "<anonymous>"
        } else {
            &self.name
        };

        write!(f, "#{} {} (statement {})", self.source_order, name, self.statement)?;

        if let Some(tag) = &self.enclosing_tag {
            write!(f, " tag={}", tag)?;
        }

        match &self.signature {
            Some(signature) => write!(f, " signature={}", signature),
            None => write!(f, " signature=?"),
        }
    }
}

/// `union T` in `union T { ... } t1;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub kind: AggregateKind,
    pub name: String,
}

impl Tag {
    pub fn new(kind: AggregateKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
