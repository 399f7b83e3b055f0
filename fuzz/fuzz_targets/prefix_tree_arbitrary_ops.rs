#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;
use setkit::PrefixTree;

/// Decode a byte into a short word over {a, b}.
fn word_from(b: u8) -> String {
    let len = 1 + (b % 4) as usize;
    let mut bits = b >> 2;
    let mut word = String::with_capacity(len);
    for _ in 0..len {
        word.push(if bits & 1 == 0 { 'a' } else { 'b' });
        bits >>= 1;
    }
    word
}

// Fuzz arbitrary operation sequences on PrefixTree
//
// Uses a BTreeSet as the ordered-set oracle: membership, size, and
// lexicographic prefix queries must agree after every operation.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut tree = PrefixTree::new();
    let mut model: BTreeSet<String> = BTreeSet::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let word = word_from(data[idx + 1]);

        match op {
            0 => {
                assert_eq!(tree.add(&word), model.insert(word.clone()));
            }
            1 => {
                assert_eq!(tree.remove(&word), model.remove(&word));
            }
            2 => {
                assert_eq!(tree.contains(&word), model.contains(&word));
            }
            3 => {
                // prefix query in lexicographic order
                let prefix = &word[..1];
                let expected: Vec<String> = model
                    .iter()
                    .filter(|w| w.starts_with(prefix))
                    .cloned()
                    .collect();
                assert_eq!(tree.query(prefix), expected);
            }
            4 => {
                assert_eq!(tree.size(), model.len());
                assert_eq!(tree.is_empty(), model.is_empty());
            }
            5 => {
                // clear only on the zero byte so runs stay interesting
                if data[idx + 1] == 0 {
                    tree.clear();
                    model.clear();
                    assert_eq!(tree.node_count(), 1);
                }
            }
            _ => unreachable!(),
        }

        #[cfg(debug_assertions)]
        tree.check_invariants().expect("trie invariants");

        idx += 2;
    }
});
