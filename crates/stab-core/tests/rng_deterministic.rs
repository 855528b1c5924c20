use rand::RngCore;
use stab_core::rng::{derive_substream_seed, RngHandle};

#[test]
fn substreams_match_their_derived_seed() {
    let mut a = RngHandle::substream(42, 3);
    let mut b = RngHandle::from_seed(derive_substream_seed(42, 3));
    let draws_a: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
    let draws_b: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();
    assert_eq!(draws_a, draws_b);
    assert_eq!(a.stream(), Some((42, 3)));
    assert_eq!(b.stream(), None);
}

#[test]
fn neighbouring_streams_differ() {
    assert_ne!(derive_substream_seed(42, 3), derive_substream_seed(42, 4));
    assert_ne!(derive_substream_seed(42, 3), derive_substream_seed(43, 3));
}
