use crate::error::Result;
use crate::models::{SizeUnit, SizeValue};
use tracing::debug;

pub fn cmd_format(size: i64, unit: SizeUnit) -> Result<()> {
    println!("{}", format_output(size, unit)?);
    Ok(())
}

pub fn format_output(size: i64, unit: SizeUnit) -> Result<String> {
    let value = SizeValue::new(size, unit)?;
    debug!(size, unit = %unit, singles = value.singles(), "格式化大小");
    Ok(value.to_string())
}
