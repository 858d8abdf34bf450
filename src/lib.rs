//! Quick roll specifiers and dice distribution for a dice tray.
//!
//! ```rust
//! # use dice_tray::{roll, roll_with, AdvantageMode, DiceControls};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Roll 3 d6 and subtract 2.
//! let rolled = roll("3d6-2")?;
//! println!("{rolled}"); // [4, 1, 6] - 2 = 9
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("1d20+5", &mut rng)?;
//! assert_eq!(rolled.rolls().len(), 1);
//!
//! // Load the specifier into the tray and get the dice to throw
//! let mut controls = DiceControls::default();
//! controls.set_specifier_text("2d20");
//! controls.confirm_specifier()?;
//! controls.set_advantage(AdvantageMode::Advantage);
//! let dice = controls.dice_to_roll();
//! assert_eq!(dice.len(), 2);
//! # Ok(())
//! # }
//! ```

mod config;
mod controls;
pub mod dice;
mod distribute;
mod error;
mod evaluate;
mod parse;

pub use config::{Config, DEFAULT_SPECIFIER};
pub use controls::DiceControls;
pub use dice::{DiceSet, DiceStyle, Die, DieCatalog, DieCountMap, DieType};
pub use distribute::{distribute, distribute_with, AdvantageMode, Combination, DieInstance, RollNode};
pub use error::{Error, MalformedSpecifier, Result};
pub use evaluate::RollSpecification;
pub use parse::{Specifier, MAX_QUANTITY};

/// Parses the specifier without rolling the dice.
pub fn parse(specifier: &str) -> Result<Specifier, MalformedSpecifier> {
    Specifier::parse(specifier)
}

/// Parses the specifier returning the result of rolling all the dice parsed.
/// Every call rolls again.
pub fn roll(specifier: &str) -> Result<RollSpecification, MalformedSpecifier> {
    Ok(Specifier::parse(specifier)?.roll())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(
    specifier: &str,
    rng: &mut impl rand::Rng,
) -> Result<RollSpecification, MalformedSpecifier> {
    Ok(Specifier::parse(specifier)?.roll_with(rng))
}
