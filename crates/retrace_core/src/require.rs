/// Error returned when a value that must be present is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unexpected empty value")]
pub struct EmptyValue;

/// Converts an optional value into a required one.
///
/// Call sites use this where absence is a bug rather than a state, so the
/// failure is explicit instead of emptiness propagating silently.
pub fn require<T>(value: Option<T>) -> Result<T, EmptyValue> {
    value.ok_or(EmptyValue)
}

#[cfg(test)]
mod tests {
    use super::{require, EmptyValue};

    #[test]
    fn present_values_pass_through_unchanged() {
        assert_eq!(require(Some(5)), Ok(5));
        assert_eq!(require(Some("anchor")), Ok("anchor"));
    }

    #[test]
    fn absent_values_fail_with_the_empty_error() {
        assert_eq!(require::<u32>(None), Err(EmptyValue));
        assert_eq!(EmptyValue.to_string(), "unexpected empty value");
    }
}
