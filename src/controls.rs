use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use crate::{
    config::{Config, DEFAULT_SPECIFIER},
    dice::{sets, DiceSet, DieCatalog, DieCountMap},
    distribute::{distribute_with, AdvantageMode, RollNode},
    error::{Error, Result},
    evaluate::RollSpecification,
    parse::Specifier,
};

/// Dice tray state: how many of each die to roll, the bonus, advantage mode
/// and the quick roll specifier text.
///
/// Every key of the counts is a die of the active set, mutators never add
/// ids the catalog does not know about.
#[derive(Debug, Clone)]
pub struct DiceControls {
    dice_set: DiceSet,
    catalog: DieCatalog,
    counts: DieCountMap,
    bonus: i32,
    advantage: AdvantageMode,
    hidden: bool,
    specifier: String,
    default_specifier: String,
}

impl Default for DiceControls {
    fn default() -> Self {
        Self::with_dice_set(sets::default_set(), DEFAULT_SPECIFIER)
    }
}

impl DiceControls {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let dice_set = sets::find(&config.dice_set)
            .ok_or_else(|| Error::UnknownDiceSet(config.dice_set.clone()))?;

        Ok(Self::with_dice_set(
            dice_set,
            config.default_specifier.as_str(),
        ))
    }

    pub fn with_dice_set(dice_set: DiceSet, default_specifier: impl Into<String>) -> Self {
        let default_specifier = default_specifier.into();
        Self {
            catalog: dice_set.catalog(),
            counts: dice_set.default_counts(),
            dice_set,
            bonus: 0,
            advantage: AdvantageMode::None,
            hidden: false,
            specifier: default_specifier.clone(),
            default_specifier,
        }
    }

    pub fn dice_set(&self) -> &DiceSet {
        &self.dice_set
    }
    pub fn catalog(&self) -> &DieCatalog {
        &self.catalog
    }
    pub fn counts(&self) -> &DieCountMap {
        &self.counts
    }
    pub fn count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }
    pub fn total_dice(&self) -> u64 {
        self.counts.values().map(|count| u64::from(*count)).sum()
    }
    pub fn bonus(&self) -> i32 {
        self.bonus
    }
    pub fn advantage(&self) -> AdvantageMode {
        self.advantage
    }
    pub fn hidden(&self) -> bool {
        self.hidden
    }
    pub fn specifier_text(&self) -> &str {
        &self.specifier
    }

    /// Switches to another set. Counts start over from the new set's defaults.
    pub fn change_dice_set(&mut self, dice_set: DiceSet) {
        debug!(set = dice_set.id(), "change dice set");
        self.catalog = dice_set.catalog();
        self.counts = dice_set.default_counts();
        self.dice_set = dice_set;
    }

    pub fn reset_counts(&mut self) {
        debug!("reset dice counts");
        self.counts = self.dice_set.default_counts();
    }

    pub fn set_count(&mut self, id: &str, count: u32) {
        debug!(id, count, "set die count");
        match self.counts.get_mut(id) {
            Some(current) => *current = count,
            None => warn!(id, "set die count: id not in the active set"),
        }
    }

    pub fn increment_count(&mut self, id: &str) {
        debug!(id, "increment die count");
        match self.counts.get_mut(id) {
            Some(current) => *current = current.saturating_add(1),
            None => warn!(id, "increment die count: id not in the active set"),
        }
    }

    /// Never goes below zero.
    pub fn decrement_count(&mut self, id: &str) {
        debug!(id, "decrement die count");
        match self.counts.get_mut(id) {
            Some(current) => *current = current.saturating_sub(1),
            None => warn!(id, "decrement die count: id not in the active set"),
        }
    }

    pub fn set_bonus(&mut self, bonus: i32) {
        debug!(bonus, "set dice bonus");
        self.bonus = bonus;
    }

    pub fn set_advantage(&mut self, advantage: AdvantageMode) {
        debug!(?advantage, "set dice advantage");
        self.advantage = advantage;
    }

    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
        debug!(hidden = self.hidden, "toggle dice hidden");
    }

    /// Edits the quick roll text. Counts and bonus only change on `confirm_specifier`.
    pub fn set_specifier_text(&mut self, specifier: impl Into<String>) {
        self.specifier = specifier.into();
        debug!(specifier = %self.specifier, "set roll specifier");
    }

    /// Leaving the field empty puts the default specifier back. Whitespace is
    /// left for the parser to reject.
    pub fn commit_specifier_text(&mut self) {
        if self.specifier.is_empty() {
            debug!(default = %self.default_specifier, "empty roll specifier, using default");
            self.specifier = self.default_specifier.clone();
        }
    }

    /// Quick roll. Uses rand::thread_rng(), if you want to choose the rng yourself use
    /// `confirm_specifier_with()`
    pub fn confirm_specifier(&mut self) -> Result<RollSpecification> {
        self.confirm_specifier_with(&mut thread_rng())
    }

    /// Rolls the specifier text and loads it into the tray: counts are reset, the
    /// matching die gets one count per roll and the bonus becomes the modifier.
    ///
    /// On error nothing but an empty specifier text (see `commit_specifier_text`) changes.
    pub fn confirm_specifier_with(&mut self, rng: &mut impl Rng) -> Result<RollSpecification> {
        self.commit_specifier_text();
        let rolled = Specifier::parse(&self.specifier)?.roll_with(rng);

        let die_id = self
            .dice_set
            .find_by_type(rolled.sides())
            .map(|die| die.id().to_owned())
            .ok_or(Error::NoMatchingDie(rolled.sides()))?;

        self.reset_counts();
        for _ in 0..rolled.rolls().len() {
            self.increment_count(&die_id);
        }
        self.set_bonus(rolled.modifier());

        Ok(rolled)
    }

    /// The dice for the current counts and advantage.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `dice_to_roll_with()`
    pub fn dice_to_roll(&self) -> Vec<RollNode> {
        self.dice_to_roll_with(&mut thread_rng())
    }

    pub fn dice_to_roll_with(&self, rng: &mut impl Rng) -> Vec<RollNode> {
        distribute_with(&self.counts, self.advantage, &self.catalog, rng)
    }
}
