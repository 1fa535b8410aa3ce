use crate::error::Result;
use crate::models::{SizeUnit, SizeValue};
use crate::utils::format::format_one_decimal;

pub fn cmd_convert(text: &str, to: SizeUnit, frac: bool) -> Result<()> {
    println!("{}", convert_output(text, to, frac)?);
    Ok(())
}

pub fn convert_output(text: &str, to: SizeUnit, frac: bool) -> Result<String> {
    let value = SizeValue::parse(text)?;
    let magnitude = if frac {
        format_one_decimal(value.frac_in(to))
    } else {
        value.in_unit(to).to_string()
    };
    Ok(format!("{}{}", magnitude, to.suffix()))
}
