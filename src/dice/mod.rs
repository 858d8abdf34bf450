pub mod sets;

use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered catalog of the dice available in the active set, keyed by die id.
pub type DieCatalog = IndexMap<String, Die>;

/// Insertion-ordered die id to count mapping. Absent ids count as zero.
pub type DieCountMap = IndexMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DieType {
    D2,
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    /// Percentile die, rolled as a hundreds die paired with a tens die.
    D100,
}

impl DieType {
    pub const ALL: [DieType; 8] = [
        DieType::D2,
        DieType::D4,
        DieType::D6,
        DieType::D8,
        DieType::D10,
        DieType::D12,
        DieType::D20,
        DieType::D100,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DieType::D2 => 2,
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }

    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.sides() == sides)
    }

    pub fn is_percentile(self) -> bool {
        self == DieType::D100
    }
}

/// Opaque visual theme tag carried by every die of a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DiceStyle(String);

impl DiceStyle {
    pub fn new(style: impl Into<String>) -> Self {
        Self(style.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A die definition inside a dice set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Die {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) kind: DieType,
    pub(crate) style: DiceStyle,
}

impl Die {
    pub fn new(id: impl Into<String>, kind: DieType, style: DiceStyle) -> Self {
        Self {
            id: id.into(),
            kind,
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn kind(&self) -> DieType {
        self.kind
    }
    pub fn style(&self) -> &DiceStyle {
        &self.style
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceSet {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dice: Vec<Die>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dice,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn catalog(&self) -> DieCatalog {
        self.dice
            .iter()
            .map(|die| (die.id.clone(), die.clone()))
            .collect()
    }

    /// Every die of the set with a count of zero, in set order.
    pub fn default_counts(&self) -> DieCountMap {
        self.dice.iter().map(|die| (die.id.clone(), 0)).collect()
    }

    /// First die of the set with the given type.
    pub fn find_by_type(&self, kind: DieType) -> Option<&Die> {
        self.dice.iter().find(|die| die.kind == kind)
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.sides())
    }
}

impl std::fmt::Display for DiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
