use crate::error::Result;
use crate::models::SizeValue;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub input: String,
    pub singles: i64,
    pub display: String,
}

impl ParseReport {
    fn new(input: &str, value: SizeValue) -> Self {
        Self {
            input: input.to_string(),
            singles: value.singles(),
            display: value.to_string(),
        }
    }
}

pub fn cmd_parse(text: Option<String>, default: Option<String>, json: bool) -> Result<()> {
    println!("{}", parse_output(text.as_deref(), default.as_deref(), json)?);
    Ok(())
}

/// 没有输入时回退到默认值，两者都没有时输出 `none`（或 JSON `null`）
pub fn parse_output(text: Option<&str>, default: Option<&str>, json: bool) -> Result<String> {
    let default_value = SizeValue::parse_opt(default)?;
    let value = SizeValue::parse_or(text, default_value)?;
    let input = text.or(default).unwrap_or_default();
    let report = value.map(|value| ParseReport::new(input, value));

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(match report {
        Some(report) => format!("{} ({} bytes)", report.display, report.singles),
        None => "none".to_string(),
    })
}
