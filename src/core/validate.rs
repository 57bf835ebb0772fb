// src/core/validate.rs
//
// Pre-flight checks on the lookup form. Runs before any network I/O.

use std::fmt;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 12;

/// First rule the lookup fields violate, in checking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    RegionRequired,
    RealmRequired,
    NameRequired,
    NameLength,
    NameNotLetters,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::RegionRequired => "Region is required",
            ValidationError::RealmRequired => "Realm is required",
            ValidationError::NameRequired => "Character name is required",
            ValidationError::NameLength => "Character name must be 2-12 characters",
            ValidationError::NameNotLetters => "Character name can only contain letters",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// Checks region → realm → name presence, then name length, then letters-only.
/// Emptiness is judged after trimming; length and charset look at the raw name.
pub fn validate_input(region: &str, realm: &str, name: &str) -> Result<(), ValidationError> {
    if region.trim().is_empty() {
        return Err(ValidationError::RegionRequired);
    }
    if realm.trim().is_empty() {
        return Err(ValidationError::RealmRequired);
    }
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::NameLength);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NameNotLetters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ValidationError::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(validate_input("us", "Stormrage", "Thrall"), Ok(()));
        assert_eq!(validate_input("eu", "Argent Dawn", "Ab"), Ok(()));
        assert_eq!(validate_input("kr", "x", "Abcdefghijkl"), Ok(()));
    }

    #[test]
    fn reports_first_violation_only() {
        assert_eq!(validate_input("", "", ""), Err(RegionRequired));
        assert_eq!(validate_input("us", "  ", "1"), Err(RealmRequired));
        assert_eq!(validate_input("us", "Stormrage", "   "), Err(NameRequired));
        assert_eq!(validate_input("us", "Stormrage", "a1"), Err(NameNotLetters));
        assert_eq!(validate_input("us", "Stormrage", "a"), Err(NameLength));
    }

    #[test]
    fn length_checked_before_charset() {
        assert_eq!(validate_input("us", "r", "1"), Err(NameLength));
        assert_eq!(validate_input("us", "r", "abcdefghijkl1"), Err(NameLength));
    }

    #[test]
    fn whitespace_counts_toward_length_and_charset() {
        // " Thrall" is non-empty after trim but the raw value has a space
        assert_eq!(validate_input("us", "r", " Thrall"), Err(NameNotLetters));
        assert_eq!(validate_input("us", "r", " a"), Err(NameNotLetters));
    }
}
