use crate::error::{NumberFormatError, SizeError, SizeResult};
use crate::models::unit::{C1, C2, C3, C4, C5, SizeUnit};
use crate::utils::format_size;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// 非负的字节大小，同时记录数值原本使用的单位。
///
/// 相等性和哈希比较的是存储的 `(size, unit)`，而不是换算后的字节数：
/// `1 kilo` 与 `1024 singles` 的 [`SizeValue::singles`] 相同，但两者不相等。
///
/// ```
/// use size_value::{SizeUnit, SizeValue};
///
/// let value = SizeValue::new(3, SizeUnit::Mega).unwrap();
/// assert_eq!(value.kilo(), 3 * 1024);
/// assert_eq!(value.to_string(), "3.0m");
///
/// let parsed: SizeValue = "1.5k".parse().unwrap();
/// assert_eq!(parsed.singles(), 1536);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeValue {
    size: i64,
    unit: SizeUnit,
}

impl SizeValue {
    pub const ZERO: SizeValue = SizeValue {
        size: 0,
        unit: SizeUnit::Single,
    };

    /// `size < 0` 时返回 [`SizeError::NegativeSize`]
    pub fn new(size: i64, unit: SizeUnit) -> SizeResult<Self> {
        if size < 0 {
            return Err(SizeError::NegativeSize(size));
        }
        Ok(Self { size, unit })
    }

    pub fn from_singles(singles: i64) -> SizeResult<Self> {
        Self::new(singles, SizeUnit::Single)
    }

    /// 存储的数值，单位为 [`SizeValue::unit`]
    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn unit(&self) -> SizeUnit {
        self.unit
    }

    pub fn singles(&self) -> i64 {
        self.unit.to_singles(self.size)
    }

    pub fn kilo(&self) -> i64 {
        self.unit.to_kilo(self.size)
    }

    pub fn mega(&self) -> i64 {
        self.unit.to_mega(self.size)
    }

    pub fn giga(&self) -> i64 {
        self.unit.to_giga(self.size)
    }

    pub fn tera(&self) -> i64 {
        self.unit.to_tera(self.size)
    }

    pub fn peta(&self) -> i64 {
        self.unit.to_peta(self.size)
    }

    /// 换算到任意单位，向零截断
    pub fn in_unit(&self, target: SizeUnit) -> i64 {
        self.unit.convert(self.size, target)
    }

    pub fn kilo_frac(&self) -> f64 {
        self.singles() as f64 / C1 as f64
    }

    pub fn mega_frac(&self) -> f64 {
        self.singles() as f64 / C2 as f64
    }

    pub fn giga_frac(&self) -> f64 {
        self.singles() as f64 / C3 as f64
    }

    pub fn tera_frac(&self) -> f64 {
        self.singles() as f64 / C4 as f64
    }

    pub fn peta_frac(&self) -> f64 {
        self.singles() as f64 / C5 as f64
    }

    /// 换算到任意单位的小数值，始终由字节数计算
    pub fn frac_in(&self, target: SizeUnit) -> f64 {
        self.singles() as f64 / target.multiplier() as f64
    }

    /// 解析 `"100b"`、`"1.5k"`、`"2G"`、`"4096"` 这类大小字符串。
    ///
    /// 由最后一个字符决定单位：`b` 后跟整数字节数；`k`/`m`/`g`/`t`/`p`
    /// （不区分大小写）前面是实数，乘以倍数后截断；其他情况整个字符串按
    /// 整数字节数解析。结果统一以 single 存储。
    pub fn parse(text: &str) -> SizeResult<Self> {
        let singles = parse_singles(text).map_err(|source| {
            debug!(input = %text, error = %source, "无法解析大小");
            SizeError::parse(text, source)
        })?;
        trace!(input = %text, singles, "解析大小");
        Self::from_singles(singles)
    }

    /// 输入为 `None` 时返回 `None`
    pub fn parse_opt(text: Option<&str>) -> SizeResult<Option<Self>> {
        Self::parse_or(text, None)
    }

    /// 输入为 `None` 时原样返回 `default`
    pub fn parse_or(text: Option<&str>, default: Option<SizeValue>) -> SizeResult<Option<Self>> {
        match text {
            Some(text) => Self::parse(text).map(Some),
            None => Ok(default),
        }
    }
}

fn parse_singles(text: &str) -> Result<i64, NumberFormatError> {
    if let Some(prefix) = text.strip_suffix('b') {
        return Ok(prefix.parse::<i64>()?);
    }
    if let Some(last) = text.chars().last() {
        if let Some(unit) = SizeUnit::from_suffix(last) {
            let prefix = &text[..text.len() - last.len_utf8()];
            let value = prefix.trim().parse::<f64>()?;
            // `as` 转换会饱和：NaN 得 0，溢出得 i64::MAX
            return Ok((value * unit.multiplier() as f64) as i64);
        }
    }
    Ok(text.parse::<i64>()?)
}

impl Default for SizeValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<i64> for SizeValue {
    type Error = SizeError;

    fn try_from(singles: i64) -> Result<Self, Self::Error> {
        Self::from_singles(singles)
    }
}

impl FromStr for SizeValue {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_size(self.singles()))
    }
}

impl Serialize for SizeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.singles())
    }
}

impl<'de> Deserialize<'de> for SizeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SizeValueVisitor)
    }
}

struct SizeValueVisitor;

impl<'de> Visitor<'de> for SizeValueVisitor {
    type Value = SizeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a whole byte count or a size string such as \"512k\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        SizeValue::from_singles(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let singles = i64::try_from(v).map_err(|_| E::custom(format!("size {} out of range", v)))?;
        SizeValue::from_singles(singles).map_err(E::custom)
    }

    // 只接受整数值的浮点数（如 YAML 的 1000.0），小数字节数需要带单位
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() || v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
            return Err(E::custom(format!(
                "byte count {} is not a whole number, use a unit suffix such as \"{}k\"",
                v,
                v
            )));
        }
        SizeValue::from_singles(v as i64).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        SizeValue::parse(v).map_err(E::custom)
    }
}
