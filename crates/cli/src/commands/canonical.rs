//! `keymaps canonical`: print the storage key each combination resolves to.

use anyhow::{Context, Result};
use keymaps_config::KeymapConfig;
use keymaps_config::keybind::normalize_key;

pub fn run(config: &KeymapConfig, combos: &[String]) -> Result<()> {
    for combo in combos {
        let storage_key = normalize_key(combo, config.separator)
            .with_context(|| format!("Failed to canonicalize '{combo}'"))?;
        println!("{combo}\t{storage_key}");
    }
    Ok(())
}
