use derive_more::IsVariant;

#[derive(Clone, Debug)]
pub struct ClassifyOptions {
    pub emit: EmitKind,
    pub warn_duplicate_shapes: bool,
    pub strict: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            emit: EmitKind::Groups,
            warn_duplicate_shapes: true,
            strict: false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, IsVariant)]
pub enum EmitKind {
    // One line per group
    #[default]
    Groups,
    // One C declaration per group
    C,
    // The lowered members, before grouping
    Members,
}

impl EmitKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "groups" => Some(Self::Groups),
            "c" => Some(Self::C),
            "members" => Some(Self::Members),
            _ => None,
        }
    }
}
