use hashkeys::{KeySearch, SearchConfig};

#[test]
fn plain_md5_64th_key() {
    let mut search = KeySearch::new("abc", &SearchConfig::default()).unwrap();
    let keys = search.find_keys(64);
    assert_eq!(keys.len(), 64);
    assert_eq!(keys[0], 39);
    assert_eq!(keys[1], 92);
    assert_eq!(keys[63], 22728);
    assert!(search.is_settled(64));
}

#[test]
fn stretched_md5_64th_key() {
    let mut search = KeySearch::new("abc", &SearchConfig::part_two()).unwrap();
    assert_eq!(search.nth_key(1).unwrap(), 10);
    let mut search = KeySearch::new("abc", &SearchConfig::part_two()).unwrap();
    assert_eq!(search.nth_key(64).unwrap(), 22551);
}

#[test]
fn settled_check_agrees_with_fixed_lookahead() {
    let mut search = KeySearch::new("abc", &SearchConfig::default()).unwrap();
    while !search.is_settled(64) {
        search.advance();
    }
    let early = search.keys()[..64].to_vec();
    let final_keys = search.find_keys(64);
    assert_eq!(early, final_keys);
}

#[test]
fn keys_strictly_ascending() {
    let mut search = KeySearch::new("abc", &SearchConfig::default()).unwrap();
    search.find_keys(64);
    assert!(search.keys().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn searches_are_deterministic() {
    let cfg = SearchConfig::default();
    let mut a = KeySearch::new("abc", &cfg).unwrap();
    let mut b = KeySearch::new("abc", &cfg).unwrap();
    for _ in 0..5000 {
        assert_eq!(a.advance(), b.advance());
    }
    assert_eq!(a, b);
}
