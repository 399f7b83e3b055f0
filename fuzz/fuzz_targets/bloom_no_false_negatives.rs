#![no_main]

use libfuzzer_sys::fuzz_target;
use setkit::BloomFilter;
use setkit::traits::ApproxMembership;

// Fuzz the one hard promise of the Bloom filter: an added element is
// always reported present, whatever the sizing parameters and load.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Hostile sizing straight from fuzz input, clamped internally.
    let expected_count = u64::from(data[0]);
    let false_positive_rate = f64::from(data[1]) / 64.0;
    let mut filter = BloomFilter::new(expected_count, false_positive_rate);

    let elements: Vec<&[u8]> = data[2..].chunks(4).collect();
    for (i, element) in elements.iter().enumerate() {
        filter.add(element);

        // Everything added so far must still be visible.
        for earlier in &elements[..=i] {
            assert!(filter.contains(earlier), "false negative for {earlier:?}");
        }
    }

    assert!(filter.occupancy() <= 1.0);
    assert!(filter.is_empty() == (filter.bits_set() == 0));

    filter.clear();
    assert!(filter.is_empty());
    assert_eq!(filter.bits_set(), 0);

    #[cfg(debug_assertions)]
    filter.check_invariants().expect("bloom invariants");
});
