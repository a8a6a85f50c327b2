use tempconv::conversion::{
    convert_text, parse_temperature, to_celsius, to_fahrenheit, ConversionError, Scale, NO_VALUE,
};

#[test]
fn reference_points() {
    assert_eq!(to_fahrenheit("0"), "32.0");
    assert_eq!(to_fahrenheit("100"), "212.0");
    assert_eq!(to_celsius("32"), "0.0");
    assert_eq!(to_celsius("212"), "100.0");
    assert_eq!(to_fahrenheit("-40"), "-40.0");
    assert_eq!(to_celsius("-40"), "-40.0");
}

#[test]
fn invalid_input_yields_sentinel() {
    assert_eq!(to_fahrenheit(""), NO_VALUE);
    assert_eq!(to_fahrenheit("abc"), NO_VALUE);
    assert_eq!(to_celsius(""), NO_VALUE);
    assert_eq!(to_celsius("12..5"), NO_VALUE);
}

#[test]
fn sentinel_is_blank() {
    assert_eq!(NO_VALUE, "");
}

#[test]
fn partially_typed_numbers_are_invalid() {
    for text in ["-", ".", "1e", "+"] {
        assert_eq!(to_fahrenheit(text), NO_VALUE, "input {text:?}");
    }
}

#[test]
fn conversion_is_idempotent() {
    for text in ["36.6", "", "abc", "-273.15", "1e5"] {
        assert_eq!(to_fahrenheit(text), to_fahrenheit(text));
        assert_eq!(to_celsius(text), to_celsius(text));
    }
}

#[test]
fn round_trip_recovers_value() {
    for text in ["0", "37", "-17.5", "36.6", "1000.25", "-273.15", "0.001"] {
        let original = parse_temperature(text).unwrap();
        let back = parse_temperature(&to_celsius(&to_fahrenheit(text))).unwrap();
        let tolerance = 1e-9 * original.abs().max(1.0);
        assert!(
            (back - original).abs() <= tolerance,
            "{text}: got {back}, expected {original}"
        );
    }
}

#[test]
fn typed_api_distinguishes_empty_from_malformed() {
    assert_eq!(convert_text("   ", Scale::Celsius), Err(ConversionError::Empty));
    assert_eq!(
        convert_text("hot", Scale::Celsius),
        Err(ConversionError::Invalid {
            input: "hot".to_string()
        })
    );
    assert_eq!(convert_text("100", Scale::Celsius), Ok("212.0".to_string()));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ConversionError::Empty.to_string(), "no temperature entered");
    assert_eq!(
        ConversionError::Invalid {
            input: "hot".to_string()
        }
        .to_string(),
        "'hot' is not a valid decimal number"
    );
}

#[test]
fn special_values_need_exact_spelling() {
    for text in ["inf", "infinity", "INF", "-inf", "nan"] {
        assert_eq!(to_fahrenheit(text), NO_VALUE, "input {text:?}");
    }
    assert_eq!(to_fahrenheit("Infinity"), "Infinity");
    assert_eq!(to_celsius("-Infinity"), "-Infinity");
    assert_eq!(to_fahrenheit("NaN"), "NaN");
}

#[test]
fn only_ascii_controls_and_space_are_trimmed() {
    assert_eq!(to_fahrenheit(" 10\t"), "50.0");
    assert_eq!(to_fahrenheit("\u{2003}10"), NO_VALUE);
    assert_eq!(to_celsius("50\u{a0}"), NO_VALUE);
}

#[test]
fn large_results_stay_positional() {
    assert_eq!(to_fahrenheit("10000000"), "18000032.0");
}
