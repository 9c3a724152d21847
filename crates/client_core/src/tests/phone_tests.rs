use super::*;

#[test]
fn normalize_strips_non_digits_and_truncates() {
    assert_eq!(normalize("+91 98765-43210"), "9198765432");
    assert_eq!(normalize("98765 43210 99"), "9876543210");
    assert_eq!(normalize("abc"), "");
    assert_eq!(normalize("٩٨٧"), "");
}

#[test]
fn normalize_is_idempotent_for_valid_numbers() {
    for number in ["6000000000", "7123456789", "8999999999", "9876543210"] {
        let once = normalize(number);
        assert_eq!(normalize(&once), once);
        assert!(is_valid(&once), "{number} should be valid");
    }
}

#[test]
fn validation_requires_ten_digits_starting_six_to_nine() {
    assert!(!is_valid("5876543210"));
    assert!(!is_valid("0876543210"));
    assert!(!is_valid("987654321"));
    assert!(!is_valid("98765432100"));
    assert!(!is_valid("98765o3210"));
    assert!(!is_valid(""));
}

#[test]
fn same_as_contact_mirrors_live_contact_edits() {
    let mut pair = ContactPair::new("9876543210");
    pair.set_same_as_contact(true);
    assert_eq!(pair.whatsapp(), "9876543210");

    pair.set_contact("91234 56780");
    assert_eq!(pair.whatsapp(), "9123456780");
    assert!(!pair.set_whatsapp("9000000000"));
    assert_eq!(pair.whatsapp(), "9123456780");
}

#[test]
fn turning_mirror_off_clears_whatsapp() {
    let mut pair = ContactPair::new("9876543210");
    assert!(pair.set_whatsapp("9000000001"));
    pair.set_same_as_contact(true);
    pair.set_same_as_contact(false);

    assert_eq!(pair.whatsapp(), "");
    assert!(!pair.same_as_contact());
}

#[test]
fn repeated_toggle_to_same_state_keeps_manual_value() {
    let mut pair = ContactPair::new("9876543210");
    assert!(pair.set_whatsapp("9000000001"));
    pair.set_same_as_contact(false);
    assert_eq!(pair.whatsapp(), "9000000001");
}
