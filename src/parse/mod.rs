mod specifier;

use std::str::FromStr;

use winnow::Parser;

use crate::{dice::DieType, error::MalformedSpecifier};

/// Largest dice quantity a specifier may ask for.
pub const MAX_QUANTITY: u32 = 999;

/// A quick roll like `3d6-2`, parsed but not yet rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifier {
    pub(crate) quantity: u32,
    pub(crate) sides: DieType,
    pub(crate) modifier: i32,
}

impl Specifier {
    pub fn new(quantity: u32, sides: DieType, modifier: i32) -> Self {
        Self {
            quantity,
            sides,
            modifier,
        }
    }

    /// Parses the whole input, failing on anything the grammar does not cover
    /// instead of stopping at the first unknown character.
    pub fn parse(input: &str) -> Result<Self, MalformedSpecifier> {
        specifier::specifier
            .parse(input)
            .map_err(|e| MalformedSpecifier::new(input, e.offset(), e.to_string()))
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
    pub fn sides(&self) -> DieType {
        self.sides
    }
    pub fn modifier(&self) -> i32 {
        self.modifier
    }
}

impl FromStr for Specifier {
    type Err = MalformedSpecifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Specifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.quantity, self.sides.sides())?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
