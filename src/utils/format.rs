use crate::models::unit::SizeUnit;

/// 用能达到的最大单位格式化字节数，保留一位小数，数字与后缀之间没有空格：
/// `1536` -> `"1.5k"`
pub fn format_size(singles: i64) -> String {
    let unit = SizeUnit::ALL
        .iter()
        .rev()
        .copied()
        .find(|unit| *unit != SizeUnit::Single && singles >= unit.multiplier())
        .unwrap_or(SizeUnit::Single);
    let value = singles as f64 / unit.multiplier() as f64;
    format!("{}{}", format_one_decimal(value), unit.suffix())
}

/// 保留一位小数，恰好居中时远离零舍入。`{:.1}` 对恰好居中的值按偶数舍入，
/// 而 1.25 这类字节分数正好是居中值。
pub fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}
