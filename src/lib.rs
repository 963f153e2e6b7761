mod utils;

pub mod config;
pub mod render;
pub mod sheet;
pub mod template;
pub mod time;

use std::fs;

use log::info;

use crate::config::Config;
use crate::render::{Page, TextPage};

/// Generates the attendance sheet described by `config` and writes it to
/// the configured output path.
///
/// All validation happens before the first cell is placed, a request
/// either produces a complete document or fails without output.
pub fn generate_cra(config: &Config) -> anyhow::Result<()> {
    let plan = sheet::attendance_grid(config.month(), config.worked_days())?;
    info!(
        "{}: {} worked days out of {}",
        config.month(),
        plan.worked_total(),
        config.month().days_in_month()
    );

    let mut page = TextPage::new();
    template::render(config, &plan, &mut page);

    let output = config.output();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    page.save(output)?;
    info!("wrote {}", output.display());

    Ok(())
}
