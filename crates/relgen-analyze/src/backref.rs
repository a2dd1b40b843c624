use relgen_schema::node::{Entity, Field};
use std::collections::BTreeSet;

///
/// BackRef
///
/// Outcome of back-reference resolution. `NoCandidates` (the target has no
/// relation field typed back at the source) and `Unmatched` (candidates
/// existed but none paired) both classify as unidirectional, but staying
/// distinguishable keeps the ambiguity visible to callers.
///

#[derive(Clone, Copy, Debug)]
pub enum BackRef<'a> {
    /// The paired field on the target entity.
    Paired(&'a Field),

    /// The target declares no relation field typed as the source entity.
    NoCandidates,

    /// Candidates existed but label/structural matching ruled them all out.
    Unmatched,
}

impl BackRef<'_> {
    #[must_use]
    pub const fn is_paired(&self) -> bool {
        matches!(self, Self::Paired(_))
    }
}

/// Find the reciprocal relation field on `target_entity` for
/// `source_field`, if the relation is bidirectional.
///
/// Candidates are the target's relation fields whose declared type is the
/// source entity; for self-relations the source field itself is not its own
/// candidate. A sole candidate pairs unconditionally. With several, the
/// first label or structural match in declaration order wins; a label
/// mismatch or a one-sided label skips that candidate, never falling back
/// to structural comparison.
#[must_use]
pub fn find_back_reference<'a>(
    source_entity: &Entity,
    source_field: &Field,
    target_entity: &'a Entity,
) -> BackRef<'a> {
    let candidates: Vec<&Field> = target_entity
        .relation_fields()
        .filter(|f| f.type_name == source_entity.name)
        .filter(|f| {
            // Self-relation: a field cannot be its own back-reference.
            !(target_entity.name == source_entity.name && f.name == source_field.name)
        })
        .collect();

    match candidates.as_slice() {
        [] => BackRef::NoCandidates,
        [only] => BackRef::Paired(only),
        _ => {
            for candidate in candidates {
                match (&source_field.relation_name, &candidate.relation_name) {
                    (Some(source_label), Some(candidate_label)) => {
                        if source_label == candidate_label {
                            return BackRef::Paired(candidate);
                        }
                    }
                    (Some(_), None) | (None, Some(_)) => {}
                    (None, None) => {
                        if fields_pair(source_field, candidate) {
                            return BackRef::Paired(candidate);
                        }
                    }
                }
            }

            BackRef::Unmatched
        }
    }
}

/// Structural pairing: one side's own FK fields name exactly the fields the
/// other side references. Empty sets never pair (two bare relations would
/// otherwise match through `{} == {}`).
fn fields_pair(source: &Field, candidate: &Field) -> bool {
    (!source.relation_fields.is_empty()
        && as_set(&source.relation_fields) == as_set(&candidate.relation_references))
        || (!candidate.relation_fields.is_empty()
            && as_set(&candidate.relation_fields) == as_set(&source.relation_references))
}

fn as_set(names: &[String]) -> BTreeSet<&str> {
    names.iter().map(String::as_str).collect()
}
