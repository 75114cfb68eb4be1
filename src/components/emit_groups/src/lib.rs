use itertools::Itertools;
use record_shape::{AggregateKind, AnonymousGroup, Member, Signature};

/// How a record introduces itself: `struct Tag`, `typedef struct { ... } Name` or both
#[derive(Clone, Copy, Debug)]
pub struct RecordHead<'a> {
    pub kind: AggregateKind,
    pub tag: Option<&'a str>,
    pub typedef_name: Option<&'a str>,
}

/// Prints a group as a single C declaration, e.g. `union { float bb; } z1, z2;`
pub fn emit_group(group: &AnonymousGroup) -> String {
    emit_declaration(group, &group.members.iter().collect_vec())
}

/// Declarations of a record body in source order.
/// Members of one group share a declaration only while they are adjacent,
/// so the layout of the record never changes.
pub fn emit_declarations(groups: &[AnonymousGroup]) -> Vec<String> {
    let ordered = groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| group.members.iter().map(move |member| (index, member)))
        .sorted_by_key(|(_, member)| member.source_order)
        .collect_vec();

    let runs = ordered.into_iter().chunk_by(|(index, _)| *index);

    runs.into_iter()
        .map(|(index, run)| {
            let members = run.map(|(_, member)| member).collect_vec();
            emit_declaration(&groups[index], &members)
        })
        .collect()
}

/// Prints a whole record, e.g. `struct S { ... };` or `typedef union { ... } U;`
pub fn emit_record(head: &RecordHead, groups: &[AnonymousGroup]) -> String {
    let mut introducer = match head.tag {
        Some(tag) => format!("{} {}", head.kind, tag),
        None => head.kind.to_string(),
    };

    if head.typedef_name.is_some() {
        introducer.insert_str(0, "typedef ");
    }

    let declarations = emit_declarations(groups);

    let body = if declarations.is_empty() {
        "{}".to_string()
    } else {
        format!(
            "{{\n{}\n}}",
            declarations
                .iter()
                .map(|declaration| format!("    {}", declaration))
                .join("\n")
        )
    };

    match head.typedef_name {
        Some(name) => format!("{} {} {};", introducer, body, name),
        None => format!("{} {};", introducer, body),
    }
}

fn emit_declaration(group: &AnonymousGroup, members: &[&Member]) -> String {
    let specifier = specifier_of(group, members);

    let declarators = members
        .iter()
        .map(|member| member.declarator.as_str())
        .filter(|declarator| !declarator.is_empty())
        .join(", ");

    if declarators.is_empty() {
        format!("{};", specifier)
    } else {
        format!("{} {};", specifier, declarators)
    }
}

/// Tagged bodies are only spelled out by the declaration that defined them
fn specifier_of(group: &AnonymousGroup, members: &[&Member]) -> String {
    let defines_body = members.iter().any(|member| member.defines_body);

    match (group.tag(), group.signature()) {
        (Some(tag), Some(Signature::Aggregate(aggregate))) if defines_body => {
            format!("{} {}", tag, aggregate.body_to_c())
        }
        (Some(tag), _) => tag.to_string(),
        (None, Some(Signature::Aggregate(aggregate))) => {
            format!("{} {}", aggregate.kind, aggregate.body_to_c())
        }
        (None, Some(Signature::Named(name))) => name.clone(),
        (None, None) => "<unknown>".into(),
    }
}
