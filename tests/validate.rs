// tests/validate.rs
//
// Form validation rules, checked before any network access.

use wow_overlay::core::{validate_input, ValidationError};
use wow_overlay::lookup::prepare_query;

#[test]
fn accepts_plain_names() {
    assert!(validate_input("us", "Stormrage", "Thrall").is_ok());
    assert!(validate_input("eu", "Twisting Nether", "Li").is_ok());
    assert!(validate_input("kr", "Azshara", "Abcdefghijkl").is_ok());
}

#[test]
fn blank_fields_checked_in_order() {
    assert_eq!(validate_input("", "", ""), Err(ValidationError::RegionRequired));
    assert_eq!(validate_input("us", "   ", ""), Err(ValidationError::RealmRequired));
    assert_eq!(validate_input("us", "Stormrage", " \t"), Err(ValidationError::NameRequired));
}

#[test]
fn name_length_bounds() {
    assert_eq!(validate_input("us", "Stormrage", "A"), Err(ValidationError::NameLength));
    assert_eq!(validate_input("us", "Stormrage", "Abcdefghijklm"), Err(ValidationError::NameLength));
}

#[test]
fn name_must_be_letters() {
    for bad in ["Thr4ll", "Thr all", "Thrall!", "Thräll"] {
        assert_eq!(
            validate_input("us", "Stormrage", bad),
            Err(ValidationError::NameNotLetters),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(ValidationError::RegionRequired.to_string(), "Region is required");
    assert_eq!(ValidationError::RealmRequired.to_string(), "Realm is required");
    assert_eq!(ValidationError::NameRequired.to_string(), "Character name is required");
    assert_eq!(ValidationError::NameLength.to_string(), "Character name must be 2-12 characters");
    assert_eq!(ValidationError::NameNotLetters.to_string(), "Character name can only contain letters");
}

#[test]
fn invalid_name_never_becomes_a_query() {
    let err = prepare_query("us", "Stormrage", "A1").unwrap_err();
    assert_eq!(err.to_string(), "Character name can only contain letters");

    let q = prepare_query("us", "Stormrage", "Thrall").unwrap();
    assert_eq!((q.region.as_str(), q.realm.as_str(), q.name.as_str()), ("us", "Stormrage", "Thrall"));
}
