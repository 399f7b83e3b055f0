#![no_main]

use libfuzzer_sys::fuzz_target;
use setkit::LruCache;
use setkit::traits::BoundedCache;

// Fuzz arbitrary operation sequences on LruCache
//
// Replays every operation against a brute-force recency vector (most
// recent first) and checks values, eviction victims, and iteration order.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = 1 + (data[0] as usize) % 8;
    let mut cache: LruCache<u8, u8> = LruCache::new(capacity);
    let mut model: Vec<(u8, u8)> = Vec::new();

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 8;
        let key = data[idx + 1] % 16;
        let value = data[idx + 2];

        match op {
            0 => {
                // insert
                let expected = match model.iter().position(|(k, _)| *k == key) {
                    Some(pos) => Some(model.remove(pos).1),
                    None => None,
                };
                model.insert(0, (key, value));
                if model.len() > capacity {
                    model.pop();
                }
                assert_eq!(cache.insert(key, value), expected);
            }
            1 => {
                // get touches
                let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                    let entry = model.remove(pos);
                    model.insert(0, entry);
                    entry.1
                });
                assert_eq!(cache.get(&key).copied(), expected);
            }
            2 => {
                // remove
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|pos| model.remove(pos).1);
                assert_eq!(cache.remove(&key), expected);
            }
            3 => {
                // contains touches
                let expected = match model.iter().position(|(k, _)| *k == key) {
                    Some(pos) => {
                        let entry = model.remove(pos);
                        model.insert(0, entry);
                        true
                    }
                    None => false,
                };
                assert_eq!(cache.contains(&key), expected);
            }
            4 => {
                // pop_lru
                let expected = model.pop();
                assert_eq!(cache.pop_lru(), expected);
            }
            5 => {
                // peek does not touch
                let expected = model.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                assert_eq!(cache.peek(&key).copied(), expected);
            }
            6 => {
                // peek_lru does not touch
                let expected = model.last().map(|(k, v)| (*k, *v));
                assert_eq!(cache.peek_lru().map(|(k, v)| (*k, *v)), expected);
            }
            7 => {
                cache.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(cache.len(), model.len());
        let order: Vec<(u8, u8)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(order, model);

        #[cfg(debug_assertions)]
        cache.check_invariants().expect("lru invariants");

        idx += 3;
    }
});
