use super::*;

#[test]
fn every_key_path_round_trips() {
    for key in TranslationKey::ALL {
        assert_eq!(TranslationKey::from_path(key.path()), Some(*key));
    }
}

#[test]
fn both_tables_have_text_for_every_key() {
    for key in TranslationKey::ALL {
        assert!(!translate(Language::En, *key).is_empty(), "{key:?} en");
        assert!(!translate(Language::Hi, *key).is_empty(), "{key:?} hi");
    }
}

#[test]
fn key_paths_are_unique() {
    let mut paths: Vec<&str> = TranslationKey::ALL.iter().map(|k| k.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), TranslationKey::ALL.len());
}

#[test]
fn lookup_path_resolves_leaves_only() {
    assert_eq!(lookup_path(Language::En, "orders.pending"), "Pending");
    assert_eq!(lookup_path(Language::Hi, "orders.pending"), "बकाया");
    assert_eq!(lookup_path(Language::En, "orders"), "orders");
    assert_eq!(lookup_path(Language::Hi, "orders.pending.extra"), "orders.pending.extra");
}
