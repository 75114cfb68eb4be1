use crate::error::{InvalidDeclaration, InvalidDeclarationKind};
use indexmap::{IndexMap, map::Entry};
use record_shape::{AnonymousGroup, GroupKey, Member, Signature};

/// Partitions the members of one record into groups that share a single type.
///
/// Members are walked in source order. Members naming the same tag always end up
/// together, even across statements. A tag-less aggregate is only shared by the
/// declarators of the statement that wrote it: two separately written bodies are
/// distinct types even when they look the same. Everything else stands alone.
pub fn classify(mut members: Vec<Member>) -> Result<Vec<AnonymousGroup>, InvalidDeclaration> {
    members.sort_by_key(|member| member.source_order);

    let mut groups = IndexMap::<GroupKey, AnonymousGroup>::new();

    for member in members {
        validate(&member)?;

        match groups.entry(group_key(&member)) {
            Entry::Occupied(mut occupied) => {
                check_joins(occupied.get(), &member)?;
                occupied.get_mut().members.push(member);
            }
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(AnonymousGroup::new(key, member));
            }
        }
    }

    Ok(groups.into_values().collect())
}

fn group_key(member: &Member) -> GroupKey {
    if let Some(tag) = &member.enclosing_tag {
        return GroupKey::Tag(tag.name.clone());
    }

    match &member.signature {
        Some(Signature::Aggregate(_)) => GroupKey::Statement(member.statement),
        _ => GroupKey::Single(member.source_order),
    }
}

fn validate(member: &Member) -> Result<(), InvalidDeclaration> {
    let error = |kind: InvalidDeclarationKind| Err(kind.at(member.source, member.source_order));

    if member.is_anonymous() {
        match &member.signature {
            None => return error(InvalidDeclarationKind::AnonymousWithoutSignature),
            Some(Signature::Named(name)) => {
                return error(InvalidDeclarationKind::AnonymousNotAggregate(name.clone()));
            }
            Some(Signature::Aggregate(_)) => (),
        }
    }

    match (&member.enclosing_tag, &member.signature) {
        (Some(tag), Some(Signature::Named(name))) => error(
            InvalidDeclarationKind::TagOnNonAggregate(tag.name.clone(), name.clone()),
        ),
        (Some(tag), Some(Signature::Aggregate(aggregate))) if aggregate.kind != tag.kind => {
            error(InvalidDeclarationKind::ConflictingTagKind {
                name: tag.name.clone(),
                declared: aggregate.kind,
                used: tag.kind,
            })
        }
        (None, None) => error(InvalidDeclarationKind::UnknownType(member.name.clone())),
        _ => Ok(()),
    }
}

fn check_joins(group: &AnonymousGroup, member: &Member) -> Result<(), InvalidDeclaration> {
    let error = |kind: InvalidDeclarationKind| Err(kind.at(member.source, member.source_order));

    match &group.key {
        GroupKey::Tag(_) => {
            let Some(used) = &member.enclosing_tag else {
                return Ok(());
            };

            if let Some(declared) = group.tag() {
                if declared.kind != used.kind {
                    return error(InvalidDeclarationKind::ConflictingTagKind {
                        name: used.name.clone(),
                        declared: declared.kind,
                        used: used.kind,
                    });
                }
            }

            match (group.signature().and_then(Signature::aggregate), member.aggregate()) {
                (Some(existing), Some(incoming)) if !existing.same_shape(incoming) => {
                    error(InvalidDeclarationKind::ConflictingTagBody(used.clone()))
                }
                _ => Ok(()),
            }
        }
        GroupKey::Statement(_) => {
            let same = match (group.signature().and_then(Signature::aggregate), member.aggregate()) {
                (Some(existing), Some(incoming)) => existing.same_shape(incoming),
                _ => false,
            };

            if same {
                Ok(())
            } else {
                error(InvalidDeclarationKind::InconsistentStatement(member.name.clone()))
            }
        }
        GroupKey::Single(_) => error(InvalidDeclarationKind::DuplicateSourceOrder(
            member.name.clone(),
        )),
    }
}
