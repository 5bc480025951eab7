use std::thread;

use quickcheck::{QuickCheck, TestResult};
use ukkonen::{build, has_substring, Symbol, SuffixTree};

fn tree(text: &str) -> SuffixTree<char> {
    build(text.chars())
}

fn has(st: &SuffixTree<char>, pattern: &str) -> bool {
    has_substring(st, pattern.chars())
}

// A quadratic scan. Difficult to get wrong, so everything below is checked
// against it.
fn naive(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    pattern.is_empty() || text.windows(pattern.len()).any(|w| w == &*pattern)
}

#[test]
fn banana_ana() {
    assert!(has(&tree("banana"), "ana"));
}

#[test]
fn banana_xyz() {
    assert!(!has(&tree("banana"), "xyz"));
}

#[test]
fn dna_acg() {
    assert!(has(&tree("ACGTACGT"), "ACG"));
}

#[test]
fn aaaa() {
    let st = tree("aaaa");
    assert!(has(&st, "aaaa"));
    assert!(!has(&st, "aaaaa"));
}

#[test]
fn empty_text() {
    let st = tree("");
    assert!(has(&st, ""));
    assert!(!has(&st, "a"));
    assert_eq!(st.leaves().count(), 1);
}

#[test]
fn one_find_one_exists() {
    assert!(has(&tree("a"), "a"));
}

#[test]
fn one_find_one_notexists() {
    assert!(!has(&tree("a"), "b"));
}

#[test]
fn two_same() {
    let st = tree("aa");
    assert!(has(&st, "a"));
    assert!(has(&st, "aa"));
    assert!(!has(&st, "aaa"));
}

#[test]
fn query_longer() {
    assert!(!has(&tree("az"), "mnomnomnomnomnomnomno"));
}

#[test]
fn query_spaces() {
    let st = tree("The quick brown fox was very quick.");
    assert!(has(&st, "quick"));
    assert!(has(&st, "very quick."));
    assert!(!has(&st, "quick brown cat"));
}

#[test]
fn unicode_snowman() {
    let st = tree("☃abc☃");
    assert!(has(&st, "☃"));
    assert!(has(&st, "c☃"));
    assert!(!has(&st, "☃☃"));
}

#[test]
fn dollar_in_text() {
    // The terminal is not a char, so a '$' in the text is just a '$'.
    let st = tree("a$b$");
    assert!(has(&st, "$b$"));
    assert!(!has(&st, "$$"));
    assert_eq!(st.leaves().count(), 5);
    assert_eq!(st.text().last(), Some(&Symbol::Terminal));
}

#[test]
fn integer_alphabet() {
    let text: Vec<u64> = vec![u64::max_value(), 0, 7, u64::max_value(), 0];
    let st = build(text.iter().copied());
    assert!(st.contains(vec![u64::max_value(), 0]));
    assert!(st.contains(vec![0, 7, u64::max_value()]));
    assert!(!st.contains(vec![7, 0]));
}

#[test]
fn leaves_are_distinct_suffixes() {
    let st = tree("mississippi");
    let mut starts: Vec<usize> = st.suffix_indices().collect();
    starts.sort();
    assert_eq!(starts, (0..12).collect::<Vec<_>>());
}

#[test]
fn deterministic() {
    let text = "tgtgtgtgcaccg";
    let (st1, st2) = (tree(text), tree(text));
    assert_eq!(st1.stats(), st2.stats());
    assert_eq!(st1.node_count(), st2.node_count());
    for i in 0..text.len() {
        for j in i..=text.len() {
            let q = &text[i..j];
            assert_eq!(has(&st1, q), has(&st2, q));
        }
    }
}

#[test]
fn linear_on_repetitive_text() {
    for &n in &[1usize, 10, 100, 1_000, 10_000] {
        let text = "a".repeat(n);
        let st = tree(&text);
        assert!(st.stats().steps <= 3 * (n + 1), "n = {}", n);
        assert_eq!(st.leaves().count(), n + 1);
        assert!(has(&st, &text));
        assert!(!has(&st, &"a".repeat(n + 1)));
    }
}

#[test]
fn concurrent_queries() {
    let text = "ACGTTGCAACGTAGCTAGCTAGGATCCA".repeat(20);
    let st = tree(&text);
    let patterns = ["ACGTAG", "GGATCCAACG", "TTTT", "CAACGTAGCTAGCTAGGA"];
    thread::scope(|s| {
        for &p in &patterns {
            let st = &st;
            let text = &text;
            s.spawn(move || assert_eq!(has(st, p), naive(text, p)));
        }
    });
}

#[test]
fn qc_n_leaves() {
    fn prop(s: String) -> bool {
        tree(&s).leaves().count() == s.chars().count() + 1
    }
    quickcheck::quickcheck(prop as fn(String) -> bool);
}

#[test]
fn qc_every_substring_is_found() {
    fn prop(s: String) -> TestResult {
        let chars: Vec<char> = s.chars().take(30).collect();
        if chars.is_empty() {
            return TestResult::discard();
        }
        let st = build(chars.iter().cloned());
        for i in 0..chars.len() {
            for j in i..=chars.len() {
                if !st.contains(chars[i..j].iter().cloned()) {
                    return TestResult::failed();
                }
            }
        }
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(200)
        .max_tests(2000)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn qc_agrees_with_naive() {
    // Map onto a tiny alphabet so that both answers show up often.
    fn squash(s: String) -> String {
        s.chars().map(|c| (b'a' + (c as u32 % 3) as u8) as char).collect()
    }
    fn prop(text: String, pattern: String) -> bool {
        let (text, pattern) = (squash(text), squash(pattern));
        let pattern: String = pattern.chars().take(6).collect();
        has(&tree(&text), &pattern) == naive(&text, &pattern)
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String, String) -> bool);
}
