use super::{DiceSet, DiceStyle, Die, DieType};

/// Die types every built-in set carries, in display order.
const STANDARD_TYPES: [DieType; 7] = [
    DieType::D4,
    DieType::D6,
    DieType::D8,
    DieType::D10,
    DieType::D12,
    DieType::D20,
    DieType::D100,
];

// (id, display name). The first entry is the default set.
const BUILTIN: [(&str, &str); 4] = [
    ("GALAXY", "Galaxy"),
    ("NEBULA", "Nebula"),
    ("SUNRISE", "Sunrise"),
    ("WALNUT", "Walnut"),
];

/// Id of the set selected when nothing else is configured.
pub const DEFAULT_SET_ID: &str = BUILTIN[0].0;

/// All built-in dice sets.
pub fn builtin() -> Vec<DiceSet> {
    BUILTIN
        .iter()
        .map(|(id, name)| standard_set(id, name))
        .collect()
}

/// Looks a built-in set up by id, ignoring case.
pub fn find(id: &str) -> Option<DiceSet> {
    BUILTIN
        .iter()
        .find(|(set_id, _)| set_id.eq_ignore_ascii_case(id))
        .map(|(id, name)| standard_set(id, name))
}

pub fn default_set() -> DiceSet {
    let (id, name) = BUILTIN[0];
    standard_set(id, name)
}

/// Builds a set with one die of each standard type, ids like `GALAXY_STANDARD_D6`.
fn standard_set(id: &str, name: &str) -> DiceSet {
    let style = DiceStyle::new(id);
    let dice = STANDARD_TYPES
        .iter()
        .map(|kind| Die::new(format!("{id}_STANDARD_{kind}"), *kind, style.clone()))
        .collect();

    DiceSet::new(id, name, dice)
}
