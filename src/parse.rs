//! Safe parsing of the interactive number-list input
//!
//! Three literal forms are recognized, each with dedicated parsing logic:
//! a comma-separated list (`2, 4, 8`), a bracketed list (`[2, 4, 8]`), and
//! a range descriptor (`range(1, 10)` or `range(1, 10, 2)`). Nothing is
//! ever evaluated; anything outside this closed grammar is a parse error.

use crate::error::{FactorsError, Result};

/// Parse one line of user input into a number collection.
///
/// Duplicates and order are preserved; deduplication is the cache key's
/// concern, not the parser's.
pub fn parse_collection(input: &str) -> Result<Vec<i64>> {
    let trimmed = input.trim();

    if let Some(inner) = trimmed.strip_prefix('[') {
        let inner = inner
            .strip_suffix(']')
            .ok_or_else(|| FactorsError::ParseError("missing closing ']'".to_string()))?;
        return parse_comma_list(inner);
    }

    if let Some(args) = trimmed.strip_prefix("range(") {
        let args = args
            .strip_suffix(')')
            .ok_or_else(|| FactorsError::ParseError("missing closing ')'".to_string()))?;
        return expand_range(args);
    }

    parse_comma_list(trimmed)
}

/// Parse a comma-separated list of integers. An empty body is an empty
/// collection (so `[]` parses cleanly).
fn parse_comma_list(body: &str) -> Result<Vec<i64>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| {
                FactorsError::ParseError(format!("'{}' is not an integer", token))
            })
        })
        .collect()
}

/// Expand a `start, stop[, step]` range descriptor: exclusive stop,
/// default step 1, negative step counts down.
fn expand_range(args: &str) -> Result<Vec<i64>> {
    let parts = parse_comma_list(args)?;
    let (start, stop, step) = match parts.as_slice() {
        [start, stop] => (*start, *stop, 1),
        [start, stop, step] => (*start, *stop, *step),
        _ => {
            return Err(FactorsError::ParseError(
                "range takes 2 or 3 integer arguments".to_string(),
            ))
        }
    };

    if step == 0 {
        return Err(FactorsError::ParseError(
            "range step must not be zero".to_string(),
        ));
    }

    let mut numbers = Vec::new();
    let mut current = start;
    while (step > 0 && current < stop) || (step < 0 && current > stop) {
        numbers.push(current);
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comma_separated_list() {
        assert_eq!(parse_collection("2, 4, 8").unwrap(), vec![2, 4, 8]);
    }

    #[test]
    fn test_single_integer() {
        assert_eq!(parse_collection("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_negative_integers() {
        assert_eq!(parse_collection("-2,4, -8").unwrap(), vec![-2, 4, -8]);
    }

    #[test]
    fn test_bracketed_list() {
        assert_eq!(parse_collection("[2, 4, 8]").unwrap(), vec![2, 4, 8]);
    }

    #[test]
    fn test_empty_bracketed_list() {
        assert_eq!(parse_collection("[]").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_unterminated_bracket() {
        assert!(parse_collection("[2, 4").is_err());
    }

    #[test]
    fn test_range_two_args() {
        assert_eq!(parse_collection("range(1, 5)").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_range_with_step() {
        assert_eq!(parse_collection("range(0, 10, 3)").unwrap(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_range_negative_step() {
        assert_eq!(parse_collection("range(5, 0, -2)").unwrap(), vec![5, 3, 1]);
    }

    #[test]
    fn test_range_empty_when_start_at_stop() {
        assert_eq!(parse_collection("range(3, 3)").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_range_zero_step_rejected() {
        assert!(parse_collection("range(1, 5, 0)").is_err());
    }

    #[test]
    fn test_range_wrong_arity_rejected() {
        assert!(parse_collection("range(5)").is_err());
        assert!(parse_collection("range(1, 2, 3, 4)").is_err());
    }

    #[test]
    fn test_non_integer_token_rejected() {
        let err = parse_collection("2, four, 8").unwrap_err();
        assert!(err.to_string().contains("four"));
    }

    #[test]
    fn test_arbitrary_expression_rejected() {
        assert!(parse_collection("__import__('os')").is_err());
        assert!(parse_collection("2 + 2").is_err());
    }
}
