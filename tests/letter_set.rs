use vault_keys::LetterSet;

#[test]
fn letters_ignore_case() {
    let set = LetterSet::from_iter(['a', 'C']);

    assert!(set.contains('A'));
    assert!(set.contains('c'));
    assert!(!set.contains('b'));
    assert_eq!(set.len(), 2);
    assert_eq!(set.to_string(), "{ac}");
}

#[test]
fn non_letters_are_never_members() {
    let mut set = LetterSet::new();
    set.insert('1');
    set.insert('@');

    assert!(set.is_empty());
    assert_eq!(set.with('#'), set);
    assert!(!set.contains('1'));
    assert!(!LetterSet::from_iter(['a']).contains('!'));
}
