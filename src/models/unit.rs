use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const C0: i64 = 1;
pub const C1: i64 = C0 * 1024;
pub const C2: i64 = C1 * 1024;
pub const C3: i64 = C2 * 1024;
pub const C4: i64 = C3 * 1024;
pub const C5: i64 = C4 * 1024;

/// 大小单位，相邻单位相差 1024 倍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Single,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

/// 一个 `unit` 对应的字节数
pub const fn multiplier_for(unit: SizeUnit) -> i64 {
    match unit {
        SizeUnit::Single => C0,
        SizeUnit::Kilo => C1,
        SizeUnit::Mega => C2,
        SizeUnit::Giga => C3,
        SizeUnit::Tera => C4,
        SizeUnit::Peta => C5,
    }
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 6] = [
        SizeUnit::Single,
        SizeUnit::Kilo,
        SizeUnit::Mega,
        SizeUnit::Giga,
        SizeUnit::Tera,
        SizeUnit::Peta,
    ];

    pub const fn multiplier(self) -> i64 {
        multiplier_for(self)
    }

    /// 把以 `self` 为单位的 `size` 换算为 `target` 单位。
    ///
    /// 换算到更大的单位时向零截断；换算到更小的单位时在 `i64` 边界处饱和，不会溢出。
    pub const fn convert(self, size: i64, target: SizeUnit) -> i64 {
        let from = self.multiplier();
        let to = target.multiplier();
        if from >= to {
            size.saturating_mul(from / to)
        } else {
            size / (to / from)
        }
    }

    pub const fn to_singles(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Single)
    }

    pub const fn to_kilo(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Kilo)
    }

    pub const fn to_mega(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Mega)
    }

    pub const fn to_giga(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Giga)
    }

    pub const fn to_tera(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Tera)
    }

    pub const fn to_peta(self, size: i64) -> i64 {
        self.convert(size, SizeUnit::Peta)
    }

    /// 格式化时使用的后缀
    pub const fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Single => "",
            SizeUnit::Kilo => "k",
            SizeUnit::Mega => "m",
            SizeUnit::Giga => "g",
            SizeUnit::Tera => "t",
            SizeUnit::Peta => "p",
        }
    }

    /// 根据后缀字母查找单位，不区分大小写；`b` 不属于倍数后缀，返回 `None`
    pub fn from_suffix(c: char) -> Option<SizeUnit> {
        match c.to_ascii_lowercase() {
            'k' => Some(SizeUnit::Kilo),
            'm' => Some(SizeUnit::Mega),
            'g' => Some(SizeUnit::Giga),
            't' => Some(SizeUnit::Tera),
            'p' => Some(SizeUnit::Peta),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SizeUnit::Single => "single",
            SizeUnit::Kilo => "kilo",
            SizeUnit::Mega => "mega",
            SizeUnit::Giga => "giga",
            SizeUnit::Tera => "tera",
            SizeUnit::Peta => "peta",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "b" || lower == "single" || lower == "bytes" {
            return Ok(SizeUnit::Single);
        }
        if let Some(unit) = SizeUnit::ALL.iter().copied().find(|u| u.name() == lower) {
            return Ok(unit);
        }
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                SizeUnit::from_suffix(c).ok_or_else(|| format!("unknown size unit: {}", s))
            }
            _ => Err(format!("unknown size unit: {}", s)),
        }
    }
}
