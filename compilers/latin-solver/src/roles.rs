use latin_ecs::components::Syntax;
use latin_ecs::SentenceWorld;
use latin_protocol::{Case, Role, RoleAssignment, Variant};
use tracing::{debug, trace};

type Stage = fn(&mut SentenceWorld) -> Option<RoleAssignment>;

/// Fixed stage order. Each stage only sees the words earlier stages left
/// available; none of them backtracks.
const STAGES: [Stage; 3] = [subject, verb, object];

/// Greedy subject-verb-object extraction.
///
/// Each stage takes the first available word with a fitting reading, using
/// the first such reading and ignoring the word's other readings. Words a
/// stage skips over stay available to later stages. A missing role is not
/// an error; it simply yields no assignment.
pub fn extract_roles(sentence: &mut SentenceWorld) -> Vec<RoleAssignment> {
    STAGES.iter().filter_map(|stage| stage(sentence)).collect()
}

fn subject(sentence: &mut SentenceWorld) -> Option<RoleAssignment> {
    nominal_constituent(sentence, Role::Subject, Case::Nominative)
}

fn object(sentence: &mut SentenceWorld) -> Option<RoleAssignment> {
    nominal_constituent(sentence, Role::Object, Case::Accusative)
}

fn verb(sentence: &mut SentenceWorld) -> Option<RoleAssignment> {
    let Some((position, verb)) = first_available(sentence, Variant::is_verb) else {
        trace!("no verb found");
        return None;
    };

    sentence.consume(position, Syntax { role: Role::Verb, head: None });
    debug!(position, english = %verb.english_equivalent, "assigned verb");

    Some(RoleAssignment {
        role: Role::Verb,
        adjectives: Vec::new(),
        head: verb.english_equivalent,
        head_position: position,
        modifier_positions: Vec::new(),
    })
}

/// A noun-like head in `case` plus the adjectives directly after it.
fn nominal_constituent(sentence: &mut SentenceWorld, role: Role, case: Case) -> Option<RoleAssignment> {
    let Some((head_position, head)) = first_available(sentence, |v| v.is_nominal_in(case)) else {
        trace!(?role, ?case, "no head found");
        return None;
    };
    let head_entity = sentence.entity(head_position)?;

    // Attached adjectives must be contiguous: the scan stops at the first
    // word that is consumed or has no adjective reading.
    let mut adjectives = Vec::new();
    let mut modifier_positions = Vec::new();
    let mut position = head_position + 1;
    while sentence.is_available(position) {
        let Some(adjective) = sentence.find_variant(position, Variant::is_adjective) else {
            break;
        };
        sentence.consume(position, Syntax { role, head: Some(head_entity) });
        trace!(?role, position, english = %adjective.english_equivalent, "attached adjective");

        adjectives.push(adjective.english_equivalent);
        modifier_positions.push(position);
        position += 1;
    }

    sentence.consume(head_position, Syntax { role, head: None });
    debug!(?role, position = head_position, english = %head.english_equivalent, adjectives = adjectives.len(), "assigned constituent");

    Some(RoleAssignment {
        role,
        adjectives,
        head: head.english_equivalent,
        head_position,
        modifier_positions,
    })
}

fn first_available<P>(sentence: &SentenceWorld, predicate: P) -> Option<(usize, Variant)>
where
    P: Fn(&Variant) -> bool,
{
    sentence
        .available()
        .find_map(|position| sentence.find_variant(position, &predicate).map(|v| (position, v)))
}
