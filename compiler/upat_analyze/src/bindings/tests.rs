use pretty_assertions::assert_eq;

use super::*;

#[test]
fn insert_keeps_first_position() {
    let mut bindings = Bindings::new();
    assert_eq!(bindings.insert("a", 1), None);
    assert_eq!(bindings.insert("b", 2), None);
    assert_eq!(bindings.insert("a", 3), Some(1));

    let pairs: Vec<_> = bindings.iter().collect();
    assert_eq!(pairs, vec![("a", &3), ("b", &2)]);
    assert_eq!(bindings.len(), 2);
}

#[test]
fn lookup() {
    let bindings: Bindings<i32> = [("x", 1), ("y", 2)].into_iter().collect();
    assert_eq!(bindings.get("y"), Some(&2));
    assert_eq!(bindings.get("z"), None);
    assert_eq!(bindings.iter().collect::<Vec<_>>(), vec![("x", &1), ("y", &2)]);
}

#[test]
fn from_iter_applies_replacement() {
    let bindings: Bindings<&str> = [("k", "old"), ("k", "new")].into_iter().collect();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.get("k"), Some(&"new"));
}

#[test]
fn empty() {
    let bindings: Bindings<()> = Bindings::default();
    assert!(bindings.is_empty());
    assert_eq!(bindings.into_iter().count(), 0);
}
