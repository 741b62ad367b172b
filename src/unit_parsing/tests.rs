// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;

use approx::assert_abs_diff_eq;

#[test]
fn test_parse_position() {
    assert_eq!(parse_position("512"), Ok((512, PositionFormat::Absolute)));
    assert_eq!(parse_position(" 0 "), Ok((0, PositionFormat::Absolute)));
    assert_eq!(parse_position("+10"), Ok((10, PositionFormat::Offset)));
    assert_eq!(parse_position("-3"), Ok((-3, PositionFormat::Offset)));
    assert_eq!(parse_position(" -0"), Ok((0, PositionFormat::Offset)));

    for bad in ["", "ten", "1.5", "+", "12px"] {
        assert!(
            matches!(parse_position(bad), Err(UnitParseError::Unknown { .. })),
            "{bad}"
        );
    }
}

#[test]
fn test_parse_value_without_units() {
    let (n, format) = parse_value("1").unwrap();
    assert_abs_diff_eq!(n, 1.0);
    assert_eq!(format, ValueFormat::NoUnit);

    let (n, format) = parse_value(" -0.25 ").unwrap();
    assert_abs_diff_eq!(n, -0.25);
    assert_eq!(format, ValueFormat::NoUnit);
}

#[test]
fn test_parse_value_with_units() {
    for s in ["80%", " 80%", "80 %", "80.0% "] {
        let result = parse_value(s);
        assert!(result.is_ok(), "{:?}", result.unwrap_err());
        let (n, format) = result.unwrap();
        assert_abs_diff_eq!(n, 80.0);
        assert_eq!(format, ValueFormat::Percent);
    }

    let (n, format) = parse_value("-50%").unwrap();
    assert_abs_diff_eq!(n, -50.0);
    assert_eq!(format, ValueFormat::Percent);
}

#[test]
fn test_parse_value_errors() {
    assert_eq!(
        parse_value("lots%"),
        Err(UnitParseError::GotPercentButCantParse("lots%".to_string()))
    );
    assert!(matches!(
        parse_value("1.0 deg"),
        Err(UnitParseError::Unknown { .. })
    ));
    assert!(matches!(parse_value(""), Err(UnitParseError::Unknown { .. })));
}

#[test]
fn test_parse_fraction() {
    assert_abs_diff_eq!(parse_fraction("80%").unwrap(), 0.8);
    assert_abs_diff_eq!(parse_fraction("0.8").unwrap(), 0.8);
    assert_abs_diff_eq!(parse_fraction("-100%").unwrap(), -1.0);
    assert!(parse_fraction("%").is_err());
}
