//! Field filters applied before validation
//!
//! Filters normalize raw form input; validators then judge the normalized
//! value. Text fields are trimmed the way the original form layer stripped
//! its character fields.

/// Trim leading and trailing whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  Ada "), "Ada");
        assert_eq!(trim("\tLovelace\n"), "Lovelace");
        assert_eq!(trim("unchanged"), "unchanged");
    }
}
