// tests/value_parser.rs
//
// The value parser is the single source of numeric interpretation for
// catalogue cells; these pin down its whole contract.

use photocat::core::value::parse_numeric;

#[test]
fn plain_decimals_parse_like_f64() {
    for s in ["30", "0.5", "12.25", "100", "99.9"] {
        assert_eq!(parse_numeric(s), Some(s.parse::<f64>().unwrap()), "input {:?}", s);
    }
    // surrounding whitespace is noise
    assert_eq!(parse_numeric("  42  "), Some(42.0));
}

#[test]
fn na_markers_mean_absent() {
    for s in ["", "na", "NA", "n/a", "N/A", "none", "None", "  n/a  "] {
        assert_eq!(parse_numeric(s), None, "input {:?}", s);
    }
}

#[test]
fn trailing_plus_is_at_least() {
    assert_eq!(parse_numeric("50+"), Some(50.0));
    assert_eq!(parse_numeric("50 +"), Some(50.0));
}

#[test]
fn trailing_percent_is_bare_magnitude() {
    assert_eq!(parse_numeric("12%"), Some(12.0));
    assert_eq!(parse_numeric("98.7%"), Some(98.7));
    // '+' is stripped before '%'
    assert_eq!(parse_numeric("95%+"), Some(95.0));
}

#[test]
fn non_finite_text_is_absent() {
    // literal "nan" cells are placeholders, and f64::parse would accept them
    for s in ["nan", "NaN", "NAN", "inf", "-inf", "infinity"] {
        assert_eq!(parse_numeric(s), None, "input {:?}", s);
    }
}

#[test]
fn garbage_is_absent_not_an_error() {
    for s in ["abc", "12abc", "£10", "+", "%", "--"] {
        assert_eq!(parse_numeric(s), None, "input {:?}", s);
    }
}
