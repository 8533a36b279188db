use latin_protocol::RoleAssignment;

/// Renders assignments in the order given, adjectives before their head.
/// Multi-word equivalents are split so that repeats across constituent
/// boundaries ("we" + "we are") collapse too.
pub fn compose(assignments: &[RoleAssignment]) -> String {
    let tokens = assignments
        .iter()
        .flat_map(|assignment| assignment.tokens())
        .flat_map(str::split_whitespace);

    collapse_repeats(tokens).join(" ")
}

/// Drops every token equal to the one right before it. Repeats further
/// apart survive.
pub fn collapse_repeats<'a, I>(tokens: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collapsed: Vec<&str> = Vec::new();
    for token in tokens {
        if collapsed.last() != Some(&token) {
            collapsed.push(token);
        }
    }
    collapsed
}
