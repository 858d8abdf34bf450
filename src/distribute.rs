use rand::{thread_rng, Rng};
use serde::Serialize;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::dice::{DiceStyle, Die, DieCatalog, DieCountMap, DieType};

/// Roll every die twice and keep one of the two results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvantageMode {
    #[default]
    None,
    Advantage,
    Disadvantage,
}

impl AdvantageMode {
    pub fn combination(self) -> Option<Combination> {
        match self {
            AdvantageMode::None => None,
            AdvantageMode::Advantage => Some(Combination::Highest),
            AdvantageMode::Disadvantage => Some(Combination::Lowest),
        }
    }
}

/// Which of the two candidate totals of a [`RollNode::Combination`] is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Combination {
    Highest,
    Lowest,
}

/// A single physical die to roll. Ids are never reused across rolls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieInstance {
    pub(crate) id: Uuid,
    pub(crate) style: DiceStyle,
    #[serde(rename = "type")]
    pub(crate) kind: DieType,
}

impl DieInstance {
    fn generate(style: &DiceStyle, kind: DieType, rng: &mut impl Rng) -> Self {
        Self {
            id: Builder::from_random_bytes(rng.gen()).into_uuid(),
            style: style.clone(),
            kind,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn style(&self) -> &DiceStyle {
        &self.style
    }
    pub fn kind(&self) -> DieType {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollNode {
    Single(DieInstance),
    /// A D100 result made of a hundreds die and a tens die, always rolled together.
    PercentilePair {
        hundreds: DieInstance,
        tens: DieInstance,
    },
    /// Two candidate rolls of the same die type; the totals are compared as a unit.
    Combination {
        combination: Combination,
        candidates: Box<[RollNode; 2]>,
    },
}

impl RollNode {
    pub fn combination(&self) -> Option<Combination> {
        match self {
            RollNode::Combination { combination, .. } => Some(*combination),
            _ => None,
        }
    }

    /// Every physical die of the node, depth first.
    pub fn instances(&self) -> Vec<&DieInstance> {
        match self {
            RollNode::Single(die) => vec![die],
            RollNode::PercentilePair { hundreds, tens } => vec![hundreds, tens],
            RollNode::Combination { candidates, .. } => {
                candidates.iter().flat_map(RollNode::instances).collect()
            }
        }
    }
}

/// Expands die counts into the dice to roll.
/// Uses rand::thread_rng() for the ids, if you want to choose the rng yourself use `distribute_with()`
pub fn distribute(
    counts: &DieCountMap,
    advantage: AdvantageMode,
    catalog: &DieCatalog,
) -> Vec<RollNode> {
    distribute_with(counts, advantage, catalog, &mut thread_rng())
}

/// Emits exactly `count` nodes per die id, in the iteration order of `counts`.
/// Ids missing from the catalog are skipped.
pub fn distribute_with(
    counts: &DieCountMap,
    advantage: AdvantageMode,
    catalog: &DieCatalog,
    rng: &mut impl Rng,
) -> Vec<RollNode> {
    let mut dice = Vec::new();

    for (id, &count) in counts {
        if count == 0 {
            continue;
        }
        let Some(die) = catalog.get(id) else {
            debug!(id = %id, count, "skipping dice missing from the catalog");
            continue;
        };

        for _ in 0..count {
            let node = match advantage.combination() {
                None => die_node(die, rng),
                Some(combination) => RollNode::Combination {
                    combination,
                    candidates: Box::new([die_node(die, rng), die_node(die, rng)]),
                },
            };
            dice.push(node);
        }
    }

    dice
}

fn die_node(die: &Die, rng: &mut impl Rng) -> RollNode {
    match die.kind() {
        DieType::D100 => RollNode::PercentilePair {
            hundreds: DieInstance::generate(die.style(), DieType::D100, rng),
            tens: DieInstance::generate(die.style(), DieType::D10, rng),
        },
        kind => RollNode::Single(DieInstance::generate(die.style(), kind, rng)),
    }
}
