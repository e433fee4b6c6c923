use polysolve_parser::{format_number, parse};

#[test]
fn zero_coefficient_terms_are_dropped() {
    let eq = parse("8 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 = 3").unwrap();

    assert_eq!(eq.degree, 1);
    assert_eq!(eq.terms.len(), 2);
    assert_eq!(eq.coefficient(2), 0.0);
    assert_eq!(eq.coefficient(1), -6.0);
    assert!((eq.coefficient(0) - -0.6).abs() < 1e-9);
}

#[test]
fn like_terms_combine_within_one_side() {
    let eq = parse("2 * X + 3 * X = 10").unwrap();

    assert_eq!(eq.coefficient(1), 5.0);
    assert_eq!(eq.coefficient(0), -10.0);
}

#[test]
fn reduced_form_renders_ascending_with_signs() {
    let eq = parse("4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0").unwrap();
    assert_eq!(eq.to_string(), "4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0");
}

#[test]
fn leading_negative_term_is_prefixed() {
    let eq = parse("0 = 5").unwrap();
    assert_eq!(eq.to_string(), "-5 * X^0 = 0");
}

#[test]
fn coefficient_lookup_defaults_to_zero() {
    let eq = parse("X^2 = 0").unwrap();
    assert_eq!(eq.coefficient(7), 0.0);
}

#[test]
fn without_exponent_recomputes_the_degree() {
    let eq = parse("X^2 + X + 1 = 0").unwrap();
    let lowered = eq.without_exponent(2);

    assert_eq!(lowered.degree, 1);
    assert_eq!(lowered.terms.len(), 2);
    // the original value is untouched
    assert_eq!(eq.degree, 2);
    assert_eq!(eq.terms.len(), 3);
}

#[test]
fn format_number_trims_the_fractional_part_only() {
    assert_eq!(format_number(2.0), "2");
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(-0.25), "-0.25");
    assert_eq!(format_number(1.0 / 3.0), "0.333333");
    // integer digits are never eroded
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(10.0), "10");
    // negative zero normalizes
    assert_eq!(format_number(-0.0), "0");
}
