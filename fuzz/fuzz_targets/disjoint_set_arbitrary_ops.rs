#![no_main]

use libfuzzer_sys::fuzz_target;
use setkit::DisjointSet;

const UNIVERSE: usize = 32;

/// Brute-force partition oracle: every element carries a plain label and
/// union rewrites one label into the other.
struct LabelModel {
    labels: Vec<Option<usize>>,
    next_label: usize,
}

impl LabelModel {
    fn new() -> Self {
        Self {
            labels: vec![None; UNIVERSE],
            next_label: 0,
        }
    }

    fn add(&mut self, x: usize) {
        if self.labels[x].is_none() {
            self.labels[x] = Some(self.next_label);
            self.next_label += 1;
        }
    }

    fn join(&mut self, a: usize, b: usize) -> bool {
        self.add(a);
        self.add(b);
        let la = self.labels[a].unwrap();
        let lb = self.labels[b].unwrap();
        if la == lb {
            return false;
        }
        for slot in self.labels.iter_mut().flatten() {
            if *slot == lb {
                *slot = la;
            }
        }
        true
    }

    fn connected(&self, a: usize, b: usize) -> Option<bool> {
        match (self.labels[a], self.labels[b]) {
            (Some(la), Some(lb)) => Some(la == lb),
            _ => None,
        }
    }

    fn set_count(&self) -> usize {
        let mut seen: Vec<usize> = self.labels.iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    fn set_size(&self, x: usize) -> Option<usize> {
        let label = self.labels[x]?;
        Some(self.labels.iter().flatten().filter(|&&l| l == label).count())
    }
}

// Fuzz arbitrary operation sequences on DisjointSet
//
// Connectivity, set counts, and set sizes must agree with the label
// oracle after every operation.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut sets: DisjointSet<usize> = DisjointSet::new();
    let mut model = LabelModel::new();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 5;
        let a = (data[idx + 1] as usize) % UNIVERSE;
        let b = (data[idx + 2] as usize) % UNIVERSE;

        match op {
            0 => {
                sets.add(a);
                model.add(a);
            }
            1 => {
                assert_eq!(sets.join(a, b), model.join(a, b));
            }
            2 => {
                // connectivity agreement
                let connected = match (sets.find(&a), sets.find(&b)) {
                    (Some(ra), Some(rb)) => Some(ra == rb),
                    _ => None,
                };
                assert_eq!(connected, model.connected(a, b));
            }
            3 => {
                assert_eq!(sets.set_count(), model.set_count());
            }
            4 => {
                let size = sets.find(&a).and_then(|id| sets.set_size(id));
                assert_eq!(size, model.set_size(a));
            }
            _ => unreachable!(),
        }

        assert_eq!(sets.len(), model.labels.iter().flatten().count());

        #[cfg(debug_assertions)]
        sets.check_invariants().expect("disjoint set invariants");

        idx += 3;
    }
});
