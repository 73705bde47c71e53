//! Case effects.

use rand::Rng;

/// Alternate upper/lower case across letters.
///
/// Non-letters are copied through and do not advance the toggle;
/// `.`, `!` and `?` restart it on upper case.
pub fn alternate_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut uppercase = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if uppercase {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            uppercase = !uppercase;
        } else {
            result.push(c);
            if matches!(c, '.' | '!' | '?') {
                uppercase = true;
            }
        }
    }

    result
}

/// Mocking-SpongeBob case: each letter flips a coin.
pub fn spongebob_case<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if !c.is_alphabetic() {
            result.push(c);
        } else if rng.gen_bool(0.5) {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alternate_case() {
        assert_eq!(alternate_case("Hello World"), "HeLlO wOrLd");
        assert_eq!(alternate_case("Hello, world!"), "HeLlO, wOrLd!");
    }

    #[test]
    fn test_alternate_case_resets_after_sentence() {
        assert_eq!(alternate_case("Hi. How are you?"), "Hi. HoW aRe YoU?");
    }

    #[test]
    fn test_spongebob_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = "the quick brown fox jumps over the lazy dog";
        let out = spongebob_case(text, &mut rng);
        assert_eq!(out.to_lowercase(), text);
        assert!(out.chars().any(|c| c.is_uppercase()));
        assert!(out.chars().any(|c| c.is_lowercase()));
    }

    #[test]
    fn test_spongebob_same_seed_same_output() {
        let a = spongebob_case("hello world", &mut StdRng::seed_from_u64(42));
        let b = spongebob_case("hello world", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
