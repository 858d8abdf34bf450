use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dice_tray::{dice::sets, roll, AdvantageMode, Config, DiceControls, MAX_QUANTITY};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Quick roll specifiers and dice to throw")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Roll a specifier like 3d6-2 and print every die
    Roll {
        specifier: String,
    },
    /// Fill the dice tray and print the dice to throw as JSON
    Tray {
        /// Dice set id
        #[arg(long)]
        set: Option<String>,
        /// Quick roll specifier loaded into the tray before the other options
        #[arg(long, allow_hyphen_values = true)]
        specifier: Option<String>,
        /// Die count as ID=COUNT, repeatable
        #[arg(long = "die", value_parser = parse_die_count)]
        dice: Vec<(String, u32)>,
        /// Bonus added to the total
        #[arg(long, allow_hyphen_values = true)]
        bonus: Option<i32>,
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,
        #[arg(long)]
        disadvantage: bool,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the built-in dice sets
    Sets,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dice_tray=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Cmd::Roll { specifier } => {
            let rolled = roll(&specifier)?;
            println!("{specifier}: {rolled}");
        }
        Cmd::Tray {
            set,
            specifier,
            dice,
            bonus,
            advantage,
            disadvantage,
            pretty,
        } => {
            let mut controls = DiceControls::new(&config)?;
            if let Some(id) = set {
                let Some(dice_set) = sets::find(&id) else {
                    bail!("unknown dice set {id:?}");
                };
                controls.change_dice_set(dice_set);
            }
            if let Some(specifier) = specifier {
                controls.set_specifier_text(specifier);
                let rolled = controls.confirm_specifier()?;
                tracing::info!(specifier = controls.specifier_text(), %rolled, "quick roll");
            }
            for (id, count) in dice {
                if !controls.catalog().contains_key(&id) {
                    bail!("die {id:?} is not part of the {} set", controls.dice_set().id());
                }
                controls.set_count(&id, count);
            }
            if let Some(bonus) = bonus {
                controls.set_bonus(bonus);
            }
            if advantage {
                controls.set_advantage(AdvantageMode::Advantage);
            } else if disadvantage {
                controls.set_advantage(AdvantageMode::Disadvantage);
            }

            let output = serde_json::json!({
                "set": controls.dice_set().id(),
                "bonus": controls.bonus(),
                "advantage": controls.advantage(),
                "dice": controls.dice_to_roll(),
            });
            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{json}");
        }
        Cmd::Sets => {
            for set in sets::builtin() {
                let dice: Vec<_> = set.dice().iter().map(|die| die.id()).collect();
                println!("{} ({}): {}", set.id(), set.name(), dice.join(", "));
            }
        }
    }

    Ok(())
}

fn parse_die_count(arg: &str) -> Result<(String, u32), String> {
    let (id, count) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=COUNT, got {arg:?}"))?;
    let count: u32 = count
        .trim()
        .parse()
        .map_err(|e| format!("invalid count {count:?}: {e}"))?;
    if count > MAX_QUANTITY {
        return Err(format!("at most {MAX_QUANTITY} dice of one kind, got {count}"));
    }
    Ok((id.trim().to_owned(), count))
}
