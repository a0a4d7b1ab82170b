//! Sun command implementation.

use anyhow::Result;
use serde_json::json;

use crate::zodiac::sun_sign;

/// Handle the sun command - print the sun sign for a calendar day.
pub fn handle_sun_command(month: u32, day: u32, json: bool) -> Result<()> {
    let sign = sun_sign(month, day);
    log_debug!("Sun sign lookup for month {} day {}", month, day);

    if json {
        return super::print_json(&json!({
            "month": month,
            "day": day,
            "sun_sign": sign,
        }));
    }

    log_version!();
    log_block_start!("Sun sign for {:02}-{:02}", month, day);
    log_indented!("{}", sign);
    log_end!();
    Ok(())
}

/// Display help for the sun command
pub fn display_help() {
    log_version!();
    log_block_start!("sun - Sun sign for a calendar day");
    log_block_start!("Usage: astrofacts sun <month> <day>");
    log_block_start!("Arguments:");
    log_indented!("month  1-12");
    log_indented!("day    1-31");
    log_block_start!("Notes:");
    log_indented!("Uses fixed tropical date ranges, the same for every year");
    log_block_start!("Examples:");
    log_indented!("astrofacts sun 3 21");
    log_indented!("astrofacts sun --json 12 25");
    log_end!();
}
