use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    dice::sets,
    error::{Error, Result},
    parse::Specifier,
};

/// Specifier used when the quick roll field is left empty.
pub const DEFAULT_SPECIFIER: &str = "3d6-2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fallback for an empty specifier, must itself be a valid specifier.
    pub default_specifier: String,
    /// Id of the built-in dice set selected at startup.
    pub dice_set: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_specifier: DEFAULT_SPECIFIER.to_owned(),
            dice_set: sets::DEFAULT_SET_ID.to_owned(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing fields take their default value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_owned(),
            source,
        })?;

        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Specifier::parse(&self.default_specifier).map_err(|e| {
            Error::Config(format!(
                "default_specifier {:?} is not a valid roll: {}",
                self.default_specifier,
                e.message()
            ))
        })?;

        if sets::find(&self.dice_set).is_none() {
            return Err(Error::UnknownDiceSet(self.dice_set.clone()));
        }

        Ok(())
    }
}
