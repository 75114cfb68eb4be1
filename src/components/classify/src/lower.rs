use c_ast::{Composite, CompositeKind, Declarator, File, MemberDeclaration, MemberDeclarator};
use indexmap::IndexMap;
use record_shape::{AggregateKind, AggregateSignature, Member, Signature, SignatureField, Tag};

/// Bodies of the tagged structs and unions seen so far.
/// C tags share one namespace regardless of nesting, so one table serves a whole file.
#[derive(Clone, Debug, Default)]
pub struct TagTable {
    tags: IndexMap<String, AggregateSignature>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: &File) -> Self {
        let mut tags = Self::new();

        for record in file.records.iter() {
            tags.register(&record.composite);
        }

        tags
    }

    /// Records the body of `composite` and of every tagged composite nested in it.
    /// The first definition of a tag wins.
    pub fn register(&mut self, composite: &Composite) {
        let Some(members) = &composite.members else {
            return;
        };

        if let Some(name) = &composite.name {
            if !self.tags.contains_key(name) {
                if let Some(signature) = signature_of(composite) {
                    self.tags.insert(name.clone(), signature);
                }
            }
        }

        for nested in members.iter().filter_map(declared_composite) {
            self.register(nested);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AggregateSignature> {
        self.tags.get(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Turns a record body into one [`Member`] per declarator
pub fn lower_record(composite: &Composite, tags: &mut TagTable) -> Vec<Member> {
    let Some(declarations) = &composite.members else {
        return Vec::new();
    };

    tags.register(composite);

    let mut members = Vec::new();

    for (statement, declaration) in declarations.iter().enumerate() {
        let MemberDeclaration::Member(declaration) = declaration else {
            continue;
        };

        let (signature, enclosing_tag) = specifier_shape(declaration, tags);
        let defines_body = declaration
            .specifier_qualifiers
            .composite()
            .is_some_and(|composite| composite.members.is_some());

        if declaration.member_declarators.is_empty() {
            // `union { ... };` is embedded, while `union T { ... };` only declares its tag
            if let Some(embedded) = declaration
                .specifier_qualifiers
                .composite()
                .filter(|composite| composite.is_anonymous() && composite.members.is_some())
            {
                members.push(Member {
                    name: String::new(),
                    signature,
                    source_order: members.len(),
                    enclosing_tag: None,
                    statement,
                    declarator: String::new(),
                    defines_body: true,
                    source: embedded.source,
                });
            }
            continue;
        }

        for member_declarator in declaration.member_declarators.iter() {
            // Unnamed bit-fields are padding
            let Some(declarator) = member_declarator.declarator() else {
                continue;
            };

            members.push(Member {
                name: declarator.name().into(),
                signature: signature.clone(),
                source_order: members.len(),
                enclosing_tag: enclosing_tag.clone(),
                statement,
                declarator: member_declarator.to_c(),
                defines_body,
                source: declarator.source,
            });
        }
    }

    members
}

/// Shape of a struct or union body, `None` if it has no body
pub fn signature_of(composite: &Composite) -> Option<AggregateSignature> {
    let members = composite.members.as_ref()?;

    let fields = members
        .iter()
        .filter_map(|declaration| match declaration {
            MemberDeclaration::Member(member) => Some(member),
            MemberDeclaration::StaticAssert(_) => None,
        })
        .flat_map(fields_of)
        .collect();

    Some(AggregateSignature {
        kind: aggregate_kind(composite.kind),
        fields,
    })
}

fn specifier_shape(member: &c_ast::Member, tags: &TagTable) -> (Option<Signature>, Option<Tag>) {
    let Some(composite) = member.specifier_qualifiers.composite() else {
        return (
            Some(Signature::Named(member.specifier_qualifiers.to_string())),
            None,
        );
    };

    let kind = aggregate_kind(composite.kind);
    let tag = composite.name.as_ref().map(|name| Tag::new(kind, name));

    let signature = signature_of(composite).or_else(|| {
        composite
            .name
            .as_deref()
            .and_then(|name| tags.get(name))
            .cloned()
    });

    (signature.map(Signature::Aggregate), tag)
}

fn fields_of(member: &c_ast::Member) -> Vec<SignatureField> {
    let specifiers = member.specifier_qualifiers.to_string();

    if member.member_declarators.is_empty() {
        return vec![SignatureField::new(specifiers.clone(), "", specifiers)];
    }

    member
        .member_declarators
        .iter()
        .map(|member_declarator| {
            let abstract_declarator = match member_declarator {
                MemberDeclarator::Declarator(declarator) => declarator.to_abstract_c(),
                MemberDeclarator::BitField(declarator, width) => join_words(
                    &declarator
                        .as_ref()
                        .map(Declarator::to_abstract_c)
                        .unwrap_or_default(),
                    &format!(": {}", width.text),
                ),
            };

            SignatureField::new(
                join_words(&specifiers, &abstract_declarator),
                member_declarator
                    .declarator()
                    .map(Declarator::name)
                    .unwrap_or_default(),
                join_words(&specifiers, &member_declarator.to_c()),
            )
        })
        .collect()
}

fn declared_composite(declaration: &MemberDeclaration) -> Option<&Composite> {
    match declaration {
        MemberDeclaration::Member(member) => member.specifier_qualifiers.composite(),
        MemberDeclaration::StaticAssert(_) => None,
    }
}

pub fn aggregate_kind(kind: CompositeKind) -> AggregateKind {
    match kind {
        CompositeKind::Struct => AggregateKind::Struct,
        CompositeKind::Union => AggregateKind::Union,
    }
}

fn join_words(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (_, true) => left.into(),
        (true, false) => right.into(),
        (false, false) => format!("{} {}", left, right),
    }
}
