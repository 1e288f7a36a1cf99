use std::fmt::Display;
use std::ops::RangeInclusive;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn validate_range<T>(name: &str, value: T, range: RangeInclusive<T>) -> Result<(), String>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range_accepts_bounds() {
        assert!(validate_range("field_width", 5u32, 5..=50).is_ok());
        assert!(validate_range("field_width", 50u32, 5..=50).is_ok());
    }

    #[test]
    fn test_validate_range_reports_name_and_value() {
        let err = validate_range("tick_interval_ms", 10u32, 50..=1000).unwrap_err();
        assert!(err.contains("tick_interval_ms"));
        assert!(err.contains("10"));
    }
}
