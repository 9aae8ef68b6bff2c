//! Shared range-validation helpers used by all section validators.

use std::fmt::Display;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
