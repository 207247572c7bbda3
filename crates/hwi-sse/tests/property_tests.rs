//! Property tests for hwi-sse
//!
//! These tests verify the algebraic properties of element-wise addition.

use hwi_sse::{add, add_single_vector128, VectorAdder, LANES};
use proptest::prelude::*;

fn bits(values: &[f32]) -> Vec<u32> {
    values.iter().map(|x| x.to_bits()).collect()
}

/// Two equal-length vectors of finite floats.
fn pair(max_len: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (0..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e6f32..1.0e6, n),
            prop::collection::vec(-1.0e6f32..1.0e6, n),
        )
    })
}

proptest! {
    #[test]
    fn add_is_commutative((a, b) in pair(64)) {
        let ab = add(&a, &b).unwrap();
        let ba = add(&b, &a).unwrap();
        prop_assert_eq!(bits(&ab), bits(&ba));
    }

    #[test]
    fn add_preserves_length((a, b) in pair(64)) {
        prop_assert_eq!(add(&a, &b).unwrap().len(), a.len());
    }

    #[test]
    fn add_is_lane_wise((a, b) in pair(64)) {
        let sum = add(&a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(sum[i].to_bits(), (a[i] + b[i]).to_bits());
        }
    }

    #[test]
    fn scalar_matches_detected((a, b) in pair(64)) {
        let fast = VectorAdder::detect().add(&a, &b).unwrap();
        let slow = VectorAdder::scalar().add(&a, &b).unwrap();
        prop_assert_eq!(bits(&fast), bits(&slow));
    }

    #[test]
    fn small_add_matches_single_chunk((a, b) in pair(LANES)) {
        let general = add(&a, &b).unwrap();
        let single = add_single_vector128(&a, &b).unwrap();
        prop_assert_eq!(bits(&general), bits(&single));
    }

    #[test]
    fn mismatched_lengths_fail(n in 0usize..32, extra in 1usize..8) {
        let a = vec![1.0f32; n];
        let b = vec![1.0f32; n + extra];
        prop_assert!(add(&a, &b).unwrap_err().is_argument_error());
        prop_assert!(add_single_vector128(&a, &b).unwrap_err().is_argument_error());
    }

    #[test]
    fn oversized_single_chunk_fails(n in (LANES + 1)..32) {
        let a = vec![1.0f32; n];
        let b = vec![2.0f32; n];
        prop_assert!(add_single_vector128(&a, &b).unwrap_err().is_argument_error());
    }
}
