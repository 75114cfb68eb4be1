use derive_more::IsVariant;
use itertools::Itertools;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum AggregateKind {
    Struct,
    Union,
}

impl Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AggregateKind::Struct => "struct",
            AggregateKind::Union => "union",
        })
    }
}

/// Structural description of a member's type
#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Signature {
    Named(String),
    Aggregate(AggregateSignature),
}

impl Signature {
    pub fn aggregate(&self) -> Option<&AggregateSignature> {
        match self {
            Signature::Named(_) => None,
            Signature::Aggregate(aggregate) => Some(aggregate),
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signature::Named(name) => f.write_str(name),
            Signature::Aggregate(aggregate) => aggregate.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AggregateSignature {
    pub kind: AggregateKind,
    pub fields: Vec<SignatureField>,
}

impl AggregateSignature {
    /// Whether two bodies describe the same layout, ignoring how they were spelled
    pub fn same_shape(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a.ty == b.ty && a.name == b.name)
    }

    /// `{ char *h; }`
    pub fn body_to_c(&self) -> String {
        if self.fields.is_empty() {
            return "{}".into();
        }

        format!(
            "{{ {} }}",
            self.fields
                .iter()
                .map(|field| format!("{};", field.declaration))
                .join(" ")
        )
    }
}

impl Display for AggregateSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.fields
                .iter()
                .map(|field| format!("{};", field.declaration))
                .join(" ")
        )
    }
}

/// One sub-member of an aggregate body
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureField {
    /// Type with the name removed, e.g. `char *`
    pub ty: String,
    pub name: String,
    /// The field as written, e.g. `char *h`
    pub declaration: String,
}

impl SignatureField {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            declaration: declaration.into(),
        }
    }
}
