use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a channel capacity: a `usize` in [1, 1048576].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is out of range.
pub fn parse_channel_capacity(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(1 << 20))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_capacity_valid() {
        assert_eq!(parse_channel_capacity("1"), Ok(1));
        assert_eq!(parse_channel_capacity("1024"), Ok(1024));
        assert_eq!(parse_channel_capacity("65_536"), Ok(65_536));
    }

    #[test]
    fn test_channel_capacity_rejects_zero() {
        assert!(parse_channel_capacity("0").is_err());
    }

    #[test]
    fn test_channel_capacity_rejects_huge() {
        let err = parse_channel_capacity("2000000").unwrap_err();
        assert!(err.contains("at most"));
    }

    #[test]
    fn test_channel_capacity_rejects_garbage() {
        let err = parse_channel_capacity("lots").unwrap_err();
        assert!(err.contains("invalid number"));
    }
}
