#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use setkit::ds::{NodeId, OrderList};

// Fuzz arbitrary operation sequences on OrderList
//
// Mirrors every operation into a VecDeque shadow and checks that order,
// values, and link structure stay in lock step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: OrderList<u32> = OrderList::new();
    let mut shadow: VecDeque<(NodeId, u32)> = VecDeque::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                let id = list.push_front(value);
                shadow.push_front((id, value));
            }
            1 => {
                let id = list.push_back(value);
                shadow.push_back((id, value));
            }
            2 => {
                let popped = list.pop_front();
                let expected = shadow.pop_front().map(|(_, v)| v);
                assert_eq!(popped, expected);
            }
            3 => {
                let popped = list.pop_back();
                let expected = shadow.pop_back().map(|(_, v)| v);
                assert_eq!(popped, expected);
            }
            4 => {
                // remove by handle
                if !shadow.is_empty() {
                    let pos = (value as usize) % shadow.len();
                    let (id, expected) = shadow.remove(pos).unwrap();
                    assert_eq!(list.remove(id), Some(expected));
                    assert!(!list.contains(id));
                }
            }
            5 => {
                // move_to_front reorders without losing the value
                if !shadow.is_empty() {
                    let pos = (value as usize) % shadow.len();
                    let entry = shadow.remove(pos).unwrap();
                    assert!(list.move_to_front(entry.0));
                    shadow.push_front(entry);
                }
            }
            6 => {
                assert_eq!(list.front(), shadow.front().map(|(_, v)| v));
                assert_eq!(list.back(), shadow.back().map(|(_, v)| v));
                assert_eq!(list.front_id(), shadow.front().map(|(id, _)| *id));
                assert_eq!(list.back_id(), shadow.back().map(|(id, _)| *id));
            }
            7 => {
                let values: Vec<u32> = list.iter().copied().collect();
                let expected: Vec<u32> = shadow.iter().map(|(_, v)| *v).collect();
                assert_eq!(values, expected);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), shadow.len());

        #[cfg(debug_assertions)]
        list.debug_validate_invariants();

        idx += 2;
    }
});
