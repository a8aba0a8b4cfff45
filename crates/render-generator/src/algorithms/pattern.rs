//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{name}` - attribute name
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number

use super::uuid::generate_uuid_v4;
use rand::Rng;

/// Expand the placeholders in `pattern`.
pub fn generate_pattern<R: Rng + ?Sized>(pattern: &str, rng: &mut R, name: &str) -> String {
    let mut result = pattern.replace("{name}", name);

    while result.contains("{uuid}") {
        let uuid = generate_uuid_v4(rng).to_string();
        result = result.replacen("{uuid}", &uuid, 1);
    }

    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("{rand:") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}').map(|end| start + end) else {
            break;
        };

        match result[start + 6..end].parse::<usize>() {
            Ok(digits) => {
                let random_num = generate_random_digits(rng, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
                search_from = start + random_num.len();
            }
            // Leave malformed placeholders in place
            Err(_) => search_from = end + 1,
        }
    }

    result
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|position| {
            // No leading zero
            let low = if position == 0 { 1 } else { 0 };
            char::from(b'0' + rng.gen_range(low..10u8))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("{name}@example.com", &mut rng, "user");

        assert_eq!(value, "user@example.com");
    }

    #[test]
    fn test_generate_pattern_uuid() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("id-{uuid}", &mut rng, "id");

        assert!(value.starts_with("id-"));
        assert_eq!(value.len(), 3 + 36);
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{rand:6}", &mut rng, "code");

        assert!(value.starts_with("code-"));
        assert_eq!(value.len(), 5 + 6);
        let random_part = &value[5..];
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(random_part.chars().next(), Some('0'));
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("{name}_{rand:2}_{rand:4}", &mut rng, "film");

        assert!(value.starts_with("film_"));
        assert_eq!(value.len(), 5 + 2 + 1 + 4);
    }

    #[test]
    fn test_malformed_placeholder_is_kept() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("x-{rand:abc}-{rand:3}", &mut rng, "x");

        assert!(value.starts_with("x-{rand:abc}-"));
        assert_eq!(value.len(), "x-{rand:abc}-".len() + 3);
    }
}
