//! Constraint-aware numeric generators.
//!
//! Both generators derive an effective window from `minimum`, `maximum` and
//! the exclusivity flags, then honour `multipleOf` inside that window.
//!
//! - Integers step exclusive bounds by one.
//! - Floats treat exclusive bounds as strict inequalities. Windows no wider
//!   than [`NARROW_FLOAT_WINDOW`] resolve to the non-excluded endpoint.
//! - With `multipleOf`, the qualifying multiple closest to the upper bound
//!   is returned.
//! - A `minimum` given without a `maximum` is treated as exclusive, so the
//!   value lands strictly above it.

use crate::generator::AlgorithmError;
use rand::Rng;
use render_core::{Attribute, Constraints};

/// Lower bound when neither `minimum` nor `maximum` is given.
pub const DEFAULT_MINIMUM: i64 = -1_000_000;

/// Upper bound when neither `minimum` nor `maximum` is given.
pub const DEFAULT_MAXIMUM: i64 = 1_000_000;

/// Width of the window opened on the missing side of a single bound.
pub const DEFAULT_SPAN: i64 = DEFAULT_MAXIMUM - DEFAULT_MINIMUM;

/// Float windows at most this wide collapse to an endpoint.
pub const NARROW_FLOAT_WINDOW: f64 = 1.0;

const FLOAT_TOLERANCE: f64 = 1e-9;

fn lower_is_exclusive(constraints: &Constraints) -> bool {
    constraints.exclusive_minimum || constraints.maximum.is_none()
}

/// Effective inclusive integer window.
pub fn integer_bounds(constraints: &Constraints) -> (i64, i64) {
    let lower = constraints.minimum.map(|minimum| {
        let lower = minimum.ceil() as i64;
        if lower_is_exclusive(constraints) && minimum.fract() == 0.0 {
            lower.saturating_add(1)
        } else {
            lower
        }
    });
    let upper = constraints.maximum.map(|maximum| {
        let upper = maximum.floor() as i64;
        if constraints.exclusive_maximum && maximum.fract() == 0.0 {
            upper.saturating_sub(1)
        } else {
            upper
        }
    });

    match (lower, upper) {
        (Some(lower), Some(upper)) => (lower, upper),
        (Some(lower), None) => (lower, lower.saturating_add(DEFAULT_SPAN)),
        (None, Some(upper)) => (upper.saturating_sub(DEFAULT_SPAN), upper),
        (None, None) => (DEFAULT_MINIMUM, DEFAULT_MAXIMUM),
    }
}

/// Generate an integer satisfying the attribute's numeric constraints.
pub fn generate_integer<R: Rng + ?Sized>(
    rng: &mut R,
    attribute: &dyn Attribute,
) -> Result<i64, AlgorithmError> {
    let constraints = attribute.constraints();
    let (lower, upper) = integer_bounds(constraints);

    if lower > upper {
        return Err(AlgorithmError::invalid_constraint(
            attribute,
            format!("no integer lies between {lower} and {upper}"),
        ));
    }

    let Some(multiple_of) = constraints.multiple_of else {
        return Ok(if lower == upper {
            lower
        } else {
            rng.gen_range(lower..=upper)
        });
    };

    if multiple_of <= 0.0 || multiple_of.fract() != 0.0 {
        return Err(AlgorithmError::invalid_constraint(
            attribute,
            format!("multipleOf {multiple_of} is not a positive integer"),
        ));
    }

    let step = multiple_of as i64;
    let highest = upper.div_euclid(step) * step;
    Ok(if highest >= lower { highest } else { upper })
}

/// Effective float window, before exclusivity is applied.
pub fn float_bounds(constraints: &Constraints) -> (f64, f64) {
    let span = DEFAULT_SPAN as f64;
    match (constraints.minimum, constraints.maximum) {
        (Some(lower), Some(upper)) => (lower, upper),
        (Some(lower), None) => (lower, lower + span),
        (None, Some(upper)) => (upper - span, upper),
        (None, None) => (DEFAULT_MINIMUM as f64, DEFAULT_MAXIMUM as f64),
    }
}

/// Generate a float satisfying the attribute's numeric constraints.
///
/// When no multiple of `multipleOf` fits the window the plain window value is
/// returned.
pub fn generate_float<R: Rng + ?Sized>(
    rng: &mut R,
    attribute: &dyn Attribute,
) -> Result<f64, AlgorithmError> {
    let constraints = attribute.constraints();
    let (lower, upper) = float_bounds(constraints);
    let exclusive_lower = lower_is_exclusive(constraints);
    let exclusive_upper = constraints.exclusive_maximum;

    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        return Err(AlgorithmError::invalid_constraint(
            attribute,
            format!("no number lies between {lower} and {upper}"),
        ));
    }
    if lower == upper && (exclusive_lower || exclusive_upper) {
        return Err(AlgorithmError::invalid_constraint(
            attribute,
            format!("the window at {lower} excludes its only value"),
        ));
    }

    if let Some(multiple_of) = constraints.multiple_of {
        if !multiple_of.is_finite() || multiple_of <= 0.0 {
            return Err(AlgorithmError::invalid_constraint(
                attribute,
                format!("multipleOf {multiple_of} is not a positive number"),
            ));
        }
        if let Some(value) =
            highest_float_multiple(lower, upper, multiple_of, exclusive_lower, exclusive_upper)
        {
            return Ok(value);
        }
    }

    Ok(float_in_window(
        rng,
        lower,
        upper,
        exclusive_lower,
        exclusive_upper,
    ))
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn highest_float_multiple(
    lower: f64,
    upper: f64,
    step: f64,
    exclusive_lower: bool,
    exclusive_upper: bool,
) -> Option<f64> {
    let mut first = (lower / step - FLOAT_TOLERANCE).ceil();
    let mut last = (upper / step + FLOAT_TOLERANCE).floor();

    if exclusive_lower && approx_eq(first * step, lower) {
        first += 1.0;
    }
    if exclusive_upper && approx_eq(last * step, upper) {
        last -= 1.0;
    }

    if first > last {
        return None;
    }

    // Snap to an endpoint the product only misses by rounding.
    let value = last * step;
    let value = if approx_eq(value, upper) {
        upper
    } else if approx_eq(value, lower) {
        lower
    } else {
        value
    };
    Some(value.clamp(lower, upper))
}

fn float_in_window<R: Rng + ?Sized>(
    rng: &mut R,
    lower: f64,
    upper: f64,
    exclusive_lower: bool,
    exclusive_upper: bool,
) -> f64 {
    if lower == upper {
        return lower;
    }

    let midpoint = lower + (upper - lower) / 2.0;

    if upper - lower <= NARROW_FLOAT_WINDOW {
        return match (exclusive_lower, exclusive_upper) {
            (true, false) => upper,
            (false, true) => lower,
            (true, true) => midpoint,
            (false, false) => rng.gen_range(lower..=upper),
        };
    }

    let value = if exclusive_upper {
        rng.gen_range(lower..upper)
    } else {
        rng.gen_range(lower..=upper)
    };

    if exclusive_lower && value <= lower {
        midpoint
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use render_core::{HashAttribute, TypeTag};

    fn integer(constraints: Constraints) -> HashAttribute {
        HashAttribute::new("_to_match", TypeTag::Integer).with_constraints(constraints)
    }

    fn number(constraints: Constraints) -> HashAttribute {
        HashAttribute::new("_to_match", TypeTag::Float).with_constraints(constraints)
    }

    fn assert_multiple(value: f64, step: f64) {
        let remainder = value % step;
        assert!(
            remainder.abs() < 1e-6 || (step - remainder).abs() < 1e-6,
            "{value} is not a multiple of {step} (remainder {remainder})"
        );
    }

    #[test]
    fn test_integer_multiple_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            multiple_of: Some(13.0),
            ..Default::default()
        });

        let value = generate_integer(&mut rng, &attribute).unwrap();
        assert_eq!(value % 13, 0);
    }

    #[test]
    fn test_integer_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(100.0),
            ..Default::default()
        });

        for _ in 0..100 {
            assert!(generate_integer(&mut rng, &attribute).unwrap() > 100);
        }
    }

    #[test]
    fn test_integer_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            maximum: Some(100.0),
            ..Default::default()
        });

        for _ in 0..100 {
            assert!(generate_integer(&mut rng, &attribute).unwrap() <= 100);
        }
    }

    #[test]
    fn test_integer_exclusive_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(4.0),
            maximum: Some(5.0),
            exclusive_minimum: true,
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 5);
    }

    #[test]
    fn test_integer_exclusive_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(4.0),
            maximum: Some(5.0),
            exclusive_maximum: true,
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 4);
    }

    #[test]
    fn test_integer_minimum_and_multiple_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(60.0),
            maximum: Some(70.0),
            multiple_of: Some(13.0),
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 65);
    }

    #[test]
    fn test_integer_multiple_prefers_upper_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(0.0),
            maximum: Some(100.0),
            multiple_of: Some(7.0),
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 98);
    }

    #[test]
    fn test_integer_multiple_with_negative_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(-20.0),
            maximum: Some(-1.0),
            multiple_of: Some(6.0),
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), -6);
    }

    #[test]
    fn test_integer_no_multiple_in_window_returns_upper() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(14.0),
            maximum: Some(20.0),
            multiple_of: Some(13.0),
            ..Default::default()
        });

        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 20);
    }

    #[test]
    fn test_integer_fractional_bounds_round_inward() {
        let attribute = integer(Constraints {
            minimum: Some(1.5),
            maximum: Some(2.5),
            exclusive_minimum: true,
            exclusive_maximum: true,
            ..Default::default()
        });

        assert_eq!(integer_bounds(attribute.constraints()), (2, 2));
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_integer(&mut rng, &attribute).unwrap(), 2);
    }

    #[test]
    fn test_integer_empty_window_is_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            minimum: Some(4.0),
            maximum: Some(5.0),
            exclusive_minimum: true,
            exclusive_maximum: true,
            ..Default::default()
        });

        let result = generate_integer(&mut rng, &attribute);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidConstraint { attribute, .. }) if attribute == "_to_match"
        ));
    }

    #[test]
    fn test_integer_fractional_multiple_is_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = integer(Constraints {
            multiple_of: Some(1.5),
            ..Default::default()
        });

        assert!(generate_integer(&mut rng, &attribute).is_err());
    }

    #[test]
    fn test_float_multiple_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            multiple_of: Some(1.3),
            ..Default::default()
        });

        let value = generate_float(&mut rng, &attribute).unwrap();
        assert_multiple(value, 1.3);
    }

    #[test]
    fn test_float_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(100.0),
            ..Default::default()
        });

        for _ in 0..100 {
            assert!(generate_float(&mut rng, &attribute).unwrap() > 100.0);
        }
    }

    #[test]
    fn test_float_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            maximum: Some(100.0),
            ..Default::default()
        });

        for _ in 0..100 {
            assert!(generate_float(&mut rng, &attribute).unwrap() <= 100.0);
        }
    }

    #[test]
    fn test_float_exclusive_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(99.49),
            maximum: Some(99.50),
            exclusive_minimum: true,
            ..Default::default()
        });

        assert_eq!(generate_float(&mut rng, &attribute).unwrap(), 99.50);
    }

    #[test]
    fn test_float_exclusive_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(99.49),
            maximum: Some(99.50),
            exclusive_maximum: true,
            ..Default::default()
        });

        assert_eq!(generate_float(&mut rng, &attribute).unwrap(), 99.49);
    }

    #[test]
    fn test_float_wide_window_respects_exclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(0.0),
            maximum: Some(10.0),
            exclusive_minimum: true,
            exclusive_maximum: true,
            ..Default::default()
        });

        for _ in 0..1000 {
            let value = generate_float(&mut rng, &attribute).unwrap();
            assert!(value > 0.0 && value < 10.0, "{value}");
        }
    }

    #[test]
    fn test_float_multiple_skips_excluded_endpoint() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(0.0),
            maximum: Some(2.5),
            multiple_of: Some(0.5),
            exclusive_maximum: true,
            ..Default::default()
        });

        assert_eq!(generate_float(&mut rng, &attribute).unwrap(), 2.0);
    }

    #[test]
    fn test_float_multiple_at_inclusive_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(0.0),
            maximum: Some(0.3),
            multiple_of: Some(0.1),
            ..Default::default()
        });

        let value = generate_float(&mut rng, &attribute).unwrap();
        assert!(value <= 0.3, "value {value} exceeds maximum 0.3");
        assert_eq!(value, 0.3);
        assert_multiple(value, 0.1);
    }

    #[test]
    fn test_float_multiple_stays_below_rounded_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        for (maximum, step) in [(0.3, 0.1), (0.7, 0.1), (0.9, 0.3), (1.1, 0.1), (3.3, 1.1)] {
            let attribute = number(Constraints {
                minimum: Some(0.0),
                maximum: Some(maximum),
                multiple_of: Some(step),
                ..Default::default()
            });

            let value = generate_float(&mut rng, &attribute).unwrap();
            assert!((0.0..=maximum).contains(&value), "{value} outside [0, {maximum}]");
        }
    }

    #[test]
    fn test_float_single_point_window_with_exclusive_bound_is_error() {
        let mut rng = StdRng::seed_from_u64(42);
        for (exclusive_minimum, exclusive_maximum) in [(true, false), (false, true), (true, true)] {
            let attribute = number(Constraints {
                minimum: Some(5.0),
                maximum: Some(5.0),
                exclusive_minimum,
                exclusive_maximum,
                ..Default::default()
            });

            let result = generate_float(&mut rng, &attribute);
            assert!(
                matches!(result, Err(AlgorithmError::InvalidConstraint { .. })),
                "{result:?}"
            );
        }
    }

    #[test]
    fn test_float_single_point_window_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(5.0),
            maximum: Some(5.0),
            ..Default::default()
        });

        assert_eq!(generate_float(&mut rng, &attribute).unwrap(), 5.0);
    }

    #[test]
    fn test_lone_minimum_is_strict() {
        let attribute = integer(Constraints {
            minimum: Some(100.0),
            ..Default::default()
        });
        assert_eq!(integer_bounds(attribute.constraints()).0, 101);

        let bounded = integer(Constraints {
            minimum: Some(100.0),
            maximum: Some(100.0),
            ..Default::default()
        });
        assert_eq!(integer_bounds(bounded.constraints()), (100, 100));
    }

    #[test]
    fn test_float_multiple_in_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(1.0),
            maximum: Some(4.0),
            multiple_of: Some(1.3),
            ..Default::default()
        });

        let value = generate_float(&mut rng, &attribute).unwrap();
        assert!((1.0..=4.0).contains(&value));
        assert_multiple(value, 1.3);
    }

    #[test]
    fn test_float_invalid_window_is_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let attribute = number(Constraints {
            minimum: Some(5.0),
            maximum: Some(1.0),
            ..Default::default()
        });

        assert!(generate_float(&mut rng, &attribute).is_err());
    }
}
