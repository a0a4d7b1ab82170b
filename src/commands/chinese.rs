//! Chinese zodiac command implementation.

use anyhow::Result;
use serde_json::json;

use crate::zodiac::{chinese_animal, chinese_element};

/// Handle the chinese command - print the animal and stem for a year.
pub fn handle_chinese_command(year: i32, json: bool) -> Result<()> {
    let animal = chinese_animal(year);
    let stem = chinese_element(year);

    if json {
        return super::print_json(&json!({
            "year": year,
            "animal": animal,
            "element": stem.element,
            "polarity": stem.polarity,
            "stem": stem.pinyin(),
        }));
    }

    log_version!();
    log_block_start!("Chinese zodiac for {}", year);
    log_indented!("Animal: {}", animal);
    log_indented!("Element: {} ({})", stem, stem.pinyin());
    log_end!();
    Ok(())
}

/// Display help for the chinese command
pub fn display_help() {
    log_version!();
    log_block_start!("chinese - Chinese animal and element for a year");
    log_block_start!("Usage: astrofacts chinese <year>");
    log_block_start!("Arguments:");
    log_indented!("year  Gregorian year, negative years allowed");
    log_block_start!("Notes:");
    log_indented!("The cycle follows the Gregorian year number, not the lunar new year");
    log_block_start!("Examples:");
    log_indented!("astrofacts chinese 1986");
    log_indented!("astrofacts chinese --json 2024");
    log_end!();
}
