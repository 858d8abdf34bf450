use rand::{thread_rng, Rng};
use serde::Serialize;

use crate::{dice::DieType, parse::Specifier};

/// The outcome of rolling a [`Specifier`]: every individual die plus the modified total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollSpecification {
    pub(crate) sides: DieType,
    pub(crate) modifier: i32,
    pub(crate) rolls: Vec<u32>,
    pub(crate) total: i64,
}

impl RollSpecification {
    pub fn sides(&self) -> DieType {
        self.sides
    }
    pub fn modifier(&self) -> i32 {
        self.modifier
    }
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
    /// Sum of every roll plus the modifier.
    pub fn total(&self) -> i64 {
        self.total
    }
}

impl Specifier {
    /// Roll every die of the specifier.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> RollSpecification {
        self.roll_with(&mut thread_rng())
    }

    /// Every roll is an independent uniform draw in `1..=sides`.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollSpecification {
        let sides = self.sides.sides();
        let rolls: Vec<u32> = (0..self.quantity)
            .map(|_| rng.gen_range(1..=sides))
            .collect();
        let sum: i64 = rolls.iter().map(|roll| i64::from(*roll)).sum();
        let total = sum + i64::from(self.modifier);

        RollSpecification {
            sides: self.sides,
            modifier: self.modifier,
            rolls,
            total,
        }
    }
}

impl std::fmt::Display for RollSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "[{rolls}]")?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_roll_count_and_range() {
        let specifier = Specifier::new(50, DieType::D8, 0);
        let rolled = specifier.roll_with(&mut test_rng());

        assert_eq!(rolled.rolls().len(), 50);
        assert!(rolled.rolls().iter().all(|r| (1..=8).contains(r)));
    }

    #[test]
    fn test_total_includes_modifier() {
        let specifier = Specifier::new(3, DieType::D6, -2);
        let rolled = specifier.roll_with(&mut test_rng());

        let sum: i64 = rolled.rolls().iter().map(|r| i64::from(*r)).sum();
        assert_eq!(rolled.total(), sum - 2);
        assert_eq!(rolled.sides(), DieType::D6);
        assert_eq!(rolled.modifier(), -2);
    }

    #[test]
    fn test_zero_dice_total_is_modifier() {
        let rolled = Specifier::new(0, DieType::D20, 7).roll_with(&mut test_rng());
        assert!(rolled.rolls().is_empty());
        assert_eq!(rolled.total(), 7);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let specifier = Specifier::new(10, DieType::D12, 1);
        assert_eq!(
            specifier.roll_with(&mut test_rng()),
            specifier.roll_with(&mut test_rng())
        );
    }

    #[test]
    fn test_percentile_rolls_reach_past_twenty() {
        let rolled = Specifier::new(200, DieType::D100, 0).roll_with(&mut test_rng());
        assert!(rolled.rolls().iter().all(|r| (1..=100).contains(r)));
        assert!(rolled.rolls().iter().any(|r| *r > 20));
    }

    #[test]
    fn test_extreme_modifier_does_not_overflow() {
        let rolled = Specifier::new(5, DieType::D20, i32::MAX).roll_with(&mut test_rng());
        assert!(rolled.total() > i64::from(i32::MAX));
    }

    #[test]
    fn test_display() {
        let rolled = RollSpecification {
            sides: DieType::D6,
            modifier: -2,
            rolls: vec![4, 1, 6],
            total: 9,
        };
        assert_eq!(rolled.to_string(), "[4, 1, 6] - 2 = 9");

        let rolled = RollSpecification {
            sides: DieType::D20,
            modifier: 5,
            rolls: vec![13],
            total: 18,
        };
        assert_eq!(rolled.to_string(), "[13] + 5 = 18");

        let rolled = RollSpecification {
            sides: DieType::D4,
            modifier: 0,
            rolls: vec![],
            total: 0,
        };
        assert_eq!(rolled.to_string(), "[] = 0");
    }
}
