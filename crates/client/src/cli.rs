//! Command-line interface.
use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use grimoire_core::{ActionId, Category, FilterKey, Grimoire, Shortcut, filter_panel};

use crate::presentation;
use crate::unlock::LifecycleEvent;

/// Browse and filter the blue magic spell catalog
#[derive(Parser)]
#[command(name = "grimoire")]
#[command(about = "Browse and filter the spell catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding rows.ron and config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Unlock snapshot file (RON list of unlock keys)
    #[arg(long, global = true)]
    pub unlocks: Option<PathBuf>,

    /// Lifecycle event that triggers the unlock refresh
    #[arg(long, global = true, value_enum, default_value_t)]
    pub event: LifecycleEvent,

    /// Hide spells that are not unlocked
    #[arg(long, global = true)]
    pub hide_locked: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the spells that pass the given filters
    List(ListArgs),

    /// Print the filter panel
    Filters,

    /// Print every field of one spell
    Show {
        /// Action id of the spell
        action_id: u32,
    },
}

/// Filter values, by label or name. Values within one category are OR-ed;
/// categories are AND-ed.
#[derive(Args, Default)]
pub struct ListArgs {
    #[arg(long = "type", value_name = "TYPE")]
    pub spell_type: Vec<String>,

    #[arg(long)]
    pub rank: Vec<String>,

    #[arg(long)]
    pub target: Vec<String>,

    #[arg(long)]
    pub aspect: Vec<String>,

    #[arg(long)]
    pub effect: Vec<String>,

    #[arg(long)]
    pub cast: Vec<String>,

    #[arg(long)]
    pub recast: Vec<String>,

    #[arg(long, value_enum)]
    pub shortcut: Vec<ShortcutArg>,
}

impl ListArgs {
    /// Resolves every argument to a filter key.
    pub fn keys(&self) -> Result<BTreeSet<FilterKey>> {
        let groups = [
            (Category::Type, &self.spell_type),
            (Category::Rank, &self.rank),
            (Category::Target, &self.target),
            (Category::Aspect, &self.aspect),
            (Category::Effect, &self.effect),
            (Category::Cast, &self.cast),
            (Category::Recast, &self.recast),
        ];

        let mut keys = BTreeSet::new();
        for (category, values) in groups {
            for value in values {
                let key = category
                    .find(value)
                    .ok_or_else(|| anyhow!("unknown {category} filter '{value}'"))?;
                keys.insert(key);
            }
        }
        Ok(keys)
    }

    /// Switches on every requested filter.
    pub fn apply(&self, grimoire: &mut Grimoire) -> Result<()> {
        for key in self.keys()? {
            grimoire.toggle(key);
        }
        let shortcuts: BTreeSet<Shortcut> = self.shortcut.iter().map(|&s| s.into()).collect();
        for shortcut in shortcuts {
            if !grimoire.filter_state().shortcut_enabled(shortcut) {
                grimoire.apply_shortcut(shortcut);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShortcutArg {
    SelfAllyOrEnemy,
    PiercingFire,
    BluntEarth,
}

impl From<ShortcutArg> for Shortcut {
    fn from(value: ShortcutArg) -> Self {
        match value {
            ShortcutArg::SelfAllyOrEnemy => Shortcut::SelfAllyOrEnemy,
            ShortcutArg::PiercingFire => Shortcut::PiercingFire,
            ShortcutArg::BluntEarth => Shortcut::BluntEarth,
        }
    }
}

impl Command {
    pub fn execute(&self, grimoire: &mut Grimoire) -> Result<()> {
        match self {
            Command::List(args) => {
                args.apply(grimoire)?;
                for record in grimoire.visible() {
                    println!("{}", presentation::entry(record));
                }
                println!(
                    "\n{} of {} spells",
                    grimoire.visible_len(),
                    grimoire.catalog().len()
                );
            }
            Command::Filters => {
                print!("{}", presentation::panel(&filter_panel(grimoire.filter_state())));
            }
            Command::Show { action_id } => {
                let record = grimoire
                    .catalog()
                    .get(ActionId(*action_id))
                    .ok_or_else(|| anyhow!("no spell with action id {action_id}"))?;
                print!("{}", presentation::detail(record));
            }
        }
        Ok(())
    }
}
