//! Number classification module
//!
//! Pure predicates over `i64` plus the assembly of a [`ClassificationResult`].
//! Nothing here performs I/O; the fun fact is supplied by the caller.

mod predicates;

pub use predicates::{digit_sum, is_armstrong, is_perfect, is_prime};

use crate::api::ClassificationResult;

/// Property tag for Armstrong numbers
pub const ARMSTRONG: &str = "armstrong";
/// Parity tag for even numbers
pub const EVEN: &str = "even";
/// Parity tag for odd numbers
pub const ODD: &str = "odd";

/// Build the property tags for a number
///
/// `"armstrong"` comes first when it applies, followed by exactly one parity tag.
pub fn properties(n: i64) -> Vec<String> {
    let mut tags = Vec::with_capacity(2);
    if is_armstrong(n) {
        tags.push(ARMSTRONG.to_string());
    }
    let parity = if n % 2 == 0 { EVEN } else { ODD };
    tags.push(parity.to_string());
    tags
}

/// Classify a number, attaching an already fetched fun fact
pub fn classify(n: i64, fun_fact: String) -> ClassificationResult {
    ClassificationResult {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
        fun_fact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_even() {
        assert_eq!(properties(10), vec!["even"]);
        assert_eq!(properties(154), vec!["even"]);
    }

    #[test]
    fn test_properties_single_digit_is_armstrong() {
        // d^1 == d for every single digit
        assert_eq!(properties(4), vec!["armstrong", "even"]);
        assert_eq!(properties(0), vec!["armstrong", "even"]);
    }

    #[test]
    fn test_properties_armstrong_first() {
        assert_eq!(properties(153), vec!["armstrong", "odd"]);
        assert_eq!(properties(370), vec!["armstrong", "even"]);
    }

    #[test]
    fn test_properties_negative_parity() {
        assert_eq!(properties(-3), vec!["odd"]);
        assert_eq!(properties(-4), vec!["even"]);
    }

    #[test]
    fn test_classify_builds_all_fields() {
        let result = classify(28, "28 is a perfect number.".to_string());
        assert_eq!(result.number, 28);
        assert!(!result.is_prime);
        assert!(result.is_perfect);
        assert_eq!(result.properties, vec!["even"]);
        assert_eq!(result.digit_sum, 10);
        assert_eq!(result.fun_fact, "28 is a perfect number.");
    }

    #[test]
    fn test_classify_serializes_in_field_order() {
        let result = classify(7, "fact".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"number":7,"is_prime":true,"is_perfect":false,"properties":["armstrong","odd"],"digit_sum":7,"fun_fact":"fact"}"#
        );
    }
}
