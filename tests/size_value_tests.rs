mod common;

use size_value::{C1, C2, C3, C4, C5, SizeError, SizeUnit, SizeValue};

/// 各单位下的字节换算
#[test]
fn test_singles_for_every_unit() {
    common::init_logging();
    let cases = [
        (SizeUnit::Single, 1),
        (SizeUnit::Kilo, C1),
        (SizeUnit::Mega, C2),
        (SizeUnit::Giga, C3),
        (SizeUnit::Tera, C4),
        (SizeUnit::Peta, C5),
    ];
    for (unit, multiplier) in cases {
        for n in [0_i64, 1, 3, 1000] {
            let value = SizeValue::new(n, unit).unwrap();
            assert_eq!(value.singles(), n * multiplier, "{n} {unit}");
        }
    }
}

#[test]
fn test_parse_and_display_examples() {
    common::init_logging();
    assert_eq!(SizeValue::parse_opt(None).unwrap(), None);
    let default = SizeValue::new(9, SizeUnit::Giga).unwrap();
    assert_eq!(SizeValue::parse_or(None, Some(default)).unwrap(), Some(default));

    assert_eq!(SizeValue::parse("100b").unwrap().singles(), 100);
    assert_eq!(SizeValue::parse("1k").unwrap().singles(), 1024);
    assert_eq!(SizeValue::parse("1K").unwrap().singles(), 1024);
    assert_eq!(
        SizeValue::parse("2.5m").unwrap().singles(),
        (2.5 * 1024.0 * 1024.0) as i64
    );

    let err = SizeValue::parse("abc").unwrap_err();
    assert!(matches!(err, SizeError::Parse { ref input, .. } if input == "abc"));
    assert!(std::error::Error::source(&err).is_some());

    assert_eq!(SizeValue::from_singles(1024).unwrap().to_string(), "1.0k");
    assert_eq!(SizeValue::from_singles(1536).unwrap().to_string(), "1.5k");
    assert_eq!(SizeValue::from_singles(500).unwrap().to_string(), "500.0");
}

#[test]
fn test_negative_construction_fails() {
    for unit in SizeUnit::ALL {
        let err = SizeValue::new(-42, unit).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "size in SizeValue may not be negative");
    }
}

/// 相等性比较原始的 (size, unit)，而不是换算后的字节数
#[test]
fn test_equality_compares_stored_unit() {
    let kilo = SizeValue::new(1, SizeUnit::Kilo).unwrap();
    let singles = SizeValue::new(1024, SizeUnit::Single).unwrap();
    assert_eq!(kilo.singles(), singles.singles());
    assert_ne!(kilo, singles);
    assert_eq!(kilo, SizeValue::new(1, SizeUnit::Kilo).unwrap());
}

#[test]
fn test_display_picks_largest_unit() {
    let cases = [
        (SizeValue::new(3, SizeUnit::Mega).unwrap(), "3.0m"),
        (SizeValue::new(1536, SizeUnit::Mega).unwrap(), "1.5g"),
        (SizeValue::new(1, SizeUnit::Tera).unwrap(), "1.0t"),
        (SizeValue::new(1024, SizeUnit::Tera).unwrap(), "1.0p"),
        (SizeValue::new(1023, SizeUnit::Single).unwrap(), "1023.0"),
        (SizeValue::ZERO, "0.0"),
    ];
    for (value, expected) in cases {
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn test_display_then_parse_is_lossy() {
    let original = SizeValue::from_singles(123_456_789).unwrap();
    let shown = original.to_string();
    assert_eq!(shown, "117.7m");
    let reparsed: SizeValue = shown.parse().unwrap();
    assert_ne!(reparsed, original);
    assert_eq!(reparsed.mega(), original.mega());
}

#[test]
fn test_conversion_accessors() {
    let value = SizeValue::new(5, SizeUnit::Giga).unwrap();
    assert_eq!(value.kilo(), 5 * 1024 * 1024);
    assert_eq!(value.mega(), 5 * 1024);
    assert_eq!(value.giga(), 5);
    assert_eq!(value.tera(), 0);
    assert_eq!(value.peta(), 0);
    assert_eq!(value.giga_frac(), 5.0);
    assert_eq!(value.tera_frac(), 5.0 / 1024.0);
    assert_eq!(value.kilo_frac(), (5 * 1024 * 1024) as f64);
}
