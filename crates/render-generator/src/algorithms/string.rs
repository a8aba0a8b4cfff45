//! Length-constrained string generator.

use rand::distributions::Alphanumeric;
use rand::Rng;
use render_core::Constraints;

/// Upper length bound used when `maxLength` is absent.
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Generate alphanumeric filler whose length lies in `[minLength, maxLength]`.
///
/// A missing `maxLength` defaults to [`DEFAULT_MAX_LENGTH`], raised to
/// `minLength` when that is larger. Contradictory bounds yield `maxLength`
/// characters.
pub fn generate_string<R: Rng + ?Sized>(rng: &mut R, constraints: &Constraints) -> String {
    let min = constraints.min_length.unwrap_or(0);
    let max = constraints
        .max_length
        .unwrap_or_else(|| DEFAULT_MAX_LENGTH.max(min));

    let length = if min >= max {
        max
    } else {
        rng.gen_range(min..=max)
    };

    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
