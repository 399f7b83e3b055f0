#![no_main]

use libfuzzer_sys::fuzz_target;
use setkit::ds::NodeArena;

// Fuzz arbitrary operation sequences on NodeArena
//
// Tests random sequences of insert, remove, get, get_mut, contains, clear
// operations against handle stability and length accounting.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut arena: NodeArena<u32> = NodeArena::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // insert
                let id = arena.insert(value);
                all_ids.push(id);

                assert_eq!(arena.get(id), Some(&value));
                assert!(arena.contains(id));
            }
            1 => {
                // remove
                if !all_ids.is_empty() {
                    let id_idx = (value as usize) % all_ids.len();
                    let id = all_ids[id_idx];

                    let old_len = arena.len();
                    let removed = arena.remove(id);

                    if removed.is_some() {
                        assert_eq!(arena.len(), old_len - 1);
                        assert!(!arena.contains(id));
                        assert_eq!(arena.get(id), None);
                    }
                }
            }
            2 => {
                // get (read-only)
                if !all_ids.is_empty() {
                    let id_idx = (value as usize) % all_ids.len();
                    let _ = arena.get(all_ids[id_idx]);
                }
            }
            3 => {
                // get_mut
                if !all_ids.is_empty() {
                    let id_idx = (value as usize) % all_ids.len();
                    let id = all_ids[id_idx];

                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        assert_eq!(arena.get(id), Some(&value));
                    }
                }
            }
            4 => {
                // contains implies get
                if !all_ids.is_empty() {
                    let id_idx = (value as usize) % all_ids.len();
                    let id = all_ids[id_idx];
                    if arena.contains(id) {
                        assert!(arena.get(id).is_some());
                    }
                }
            }
            5 => {
                // is_empty consistency
                assert_eq!(arena.is_empty(), arena.len() == 0);
            }
            6 => {
                // iter agrees with len
                assert_eq!(arena.iter().count(), arena.len());
            }
            7 => {
                // clear
                arena.clear();
                all_ids.clear();

                assert!(arena.is_empty());
                assert_eq!(arena.iter().count(), 0);
            }
            _ => unreachable!(),
        }

        #[cfg(debug_assertions)]
        arena.debug_validate_invariants();

        idx += 2;
    }
});
