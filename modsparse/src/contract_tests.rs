//! Behaviour every backend must share, run against each one through
//! [`contract_suite!`]

use modsparse_core::{Entry, MatrixError, SparseMatrix, MOD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix<M: SparseMatrix>(rng: &mut StdRng, dimension: usize, count: usize) -> M {
    let mut m = M::with_dimension(dimension);
    for _ in 0..count {
        let i = rng.gen_range(0..dimension);
        let j = rng.gen_range(0..dimension);
        m.set(i, j, rng.gen_range(-2 * MOD..2 * MOD));
    }
    m
}

fn assert_canonical<M: SparseMatrix>(m: &M) {
    let mut seen = 0;
    m.for_each_nonzero(|i, j, value| {
        assert!(i < m.dimension() && j < m.dimension());
        assert!(value > 0 && value < MOD, "non-canonical value {value}");
        seen += 1;
    });
    assert_eq!(seen, m.nnz());
}

pub fn construction_reduces_and_drops_zeros<M: SparseMatrix>() {
    let m = M::from_triplets(
        3,
        &[(0, 0, MOD), (0, 1, -1), (1, 1, 3 * MOD + 7), (2, 2, 0)],
    );

    assert_eq!(m.nnz(), 2);
    assert_eq!(m.get(0, 0), 0);
    assert_eq!(m.get(0, 1), MOD - 1);
    assert_eq!(m.get(1, 1), 7);
    assert_eq!(m.get(2, 2), 0);
    assert_canonical(&m);
}

pub fn last_triplet_wins<M: SparseMatrix>() {
    let m = M::from_triplets(2, &[(1, 0, 5), (1, 0, 8)]);
    assert_eq!(m.get(1, 0), 8);
    assert_eq!(m.nnz(), 1);

    let m = M::from_triplets(2, &[(1, 0, 5), (1, 0, 0)]);
    assert!(m.is_empty());
}

pub fn add_value_removes_on_zero_sum<M: SparseMatrix>() {
    let mut m = M::with_dimension(4);
    m.set(1, 2, 5);
    m.add_value(1, 2, -5);
    assert_eq!(m.get(1, 2), 0);
    assert_eq!(m.nnz(), 0);

    m.toggle_transpose();
    assert_eq!(m.get(2, 1), 0);
    assert_eq!(m.nnz(), 0);

    m.add_value(3, 0, MOD);
    assert!(m.is_empty());
}

pub fn transpose_is_involution<M: SparseMatrix>() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut m: M = random_matrix(&mut rng, 6, 15);
    let before = m.entries();

    m.toggle_transpose();
    m.toggle_transpose();
    assert!(!m.is_transposed());
    assert_eq!(m.entries(), before);
}

pub fn transpose_swaps_logical_coordinates<M: SparseMatrix>() {
    let mut rng = StdRng::seed_from_u64(11);
    let original: M = random_matrix(&mut rng, 5, 12);
    let mut flipped = original.materialize();
    flipped.toggle_transpose();

    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(flipped.get(i, j), original.get(j, i));
        }
    }

    // Writes through a transposed view land at the swapped position
    flipped.set(0, 4, 9);
    flipped.toggle_transpose();
    assert_eq!(flipped.get(4, 0), 9);
}

pub fn materialize_is_independent<M: SparseMatrix>() {
    let mut m = M::from_triplets(3, &[(0, 2, 4), (1, 0, 6)]);
    m.toggle_transpose();

    let mut flat = m.materialize();
    assert!(!flat.is_transposed());
    assert!(flat.same_entries(&m));

    flat.set(0, 0, 1);
    flat.set(2, 0, 0);
    assert_eq!(m.get(0, 0), 0);
    assert_eq!(m.get(2, 0), 4);
    assert_eq!(m.nnz(), 2);
}

pub fn add_is_commutative<M: SparseMatrix>() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut a: M = random_matrix(&mut rng, 7, 20);
    let b: M = random_matrix(&mut rng, 7, 20);
    a.toggle_transpose();

    let ab = a.add(&b).unwrap();
    let ba = b.add(&a).unwrap();
    assert!(ab.same_entries(&ba));
    assert_canonical(&ab);
}

pub fn add_to_self_doubles<M: SparseMatrix>() {
    let a = M::from_triplets(3, &[(0, 0, 500_000), (1, 2, 3), (2, 1, MOD - 1)]);
    let doubled = a.add(&a).unwrap();

    assert!(doubled.same_entries(&a.scale(2)));
    assert_eq!(doubled.get(0, 0), 0);
    assert_eq!(doubled.get(1, 2), 6);
    assert_eq!(doubled.get(2, 1), MOD - 2);
    assert_eq!(doubled.nnz(), 2);
}

pub fn add_rejects_dimension_mismatch<M: SparseMatrix>() {
    let a = M::with_dimension(3);
    let b = M::with_dimension(4);
    assert_eq!(
        a.add(&b).err(),
        Some(MatrixError::DimensionMismatch { left: 3, right: 4 })
    );
}

pub fn scale_reduces_products<M: SparseMatrix>() {
    let a = M::from_triplets(2, &[(0, 1, 999_999)]);
    let scaled = a.scale(2);
    assert_eq!(scaled.get(0, 1), 999_998);

    assert!(a.scale(0).is_empty());
    assert!(a.scale(MOD).is_empty());
    assert_eq!(a.scale(-1).get(0, 1), 1);
    assert!(a.scale(1).same_entries(&a));
}

pub fn scale_keeps_orientation_semantics<M: SparseMatrix>() {
    let mut a = M::from_triplets(3, &[(0, 2, 5)]);
    a.toggle_transpose();

    let scaled = a.scale(3);
    assert_eq!(scaled.get(2, 0), 15);
    assert_eq!(scaled.get(0, 2), 0);
}

pub fn multiply_by_identity<M: SparseMatrix>() {
    let a = M::from_triplets(2, &[(0, 0, 2), (0, 1, 3), (1, 1, 4)]);
    let identity = M::from_triplets(2, &[(0, 0, 1), (1, 1, 1)]);

    let right = a.multiply(&identity).unwrap();
    assert_eq!(
        right.entries(),
        vec![
            Entry::new(0, 0, 2),
            Entry::new(0, 1, 3),
            Entry::new(1, 1, 4)
        ]
    );
    assert!(identity.multiply(&a).unwrap().same_entries(&a));
}

pub fn multiply_matches_dense_reference<M: SparseMatrix>() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 6;
    let mut a: M = random_matrix(&mut rng, n, 18);
    let b: M = random_matrix(&mut rng, n, 18);
    a.toggle_transpose();

    let product = a.multiply(&b).unwrap();
    assert_canonical(&product);

    for i in 0..n {
        for j in 0..n {
            let expected = (0..n).fold(0i64, |acc, k| {
                (acc + a.get(i, k) * b.get(k, j)).rem_euclid(MOD)
            });
            assert_eq!(product.get(i, j), expected, "mismatch at ({i}, {j})");
        }
    }
}

pub fn multiply_cancellation_leaves_no_zeros<M: SparseMatrix>() {
    // (1 * 1) + (1 * (MOD - 1)) == 0 at (0, 0)
    let a = M::from_triplets(2, &[(0, 0, 1), (0, 1, 1)]);
    let b = M::from_triplets(2, &[(0, 0, 1), (1, 0, MOD - 1)]);

    let product = a.multiply(&b).unwrap();
    assert!(product.is_empty());
}

pub fn multiply_rejects_dimension_mismatch<M: SparseMatrix>() {
    let a = M::with_dimension(3);
    let b = M::with_dimension(4);
    assert_eq!(
        a.multiply(&b).err(),
        Some(MatrixError::DimensionMismatch { left: 3, right: 4 })
    );
}

pub fn operations_leave_operands_untouched<M: SparseMatrix>() {
    let mut a = M::from_triplets(3, &[(0, 1, 2), (2, 2, 7)]);
    a.toggle_transpose();
    let b = M::from_triplets(3, &[(1, 0, 3)]);
    let a_before = a.entries();
    let b_before = b.entries();

    let _ = a.add(&b).unwrap();
    let _ = a.scale(5);
    let _ = a.multiply(&b).unwrap();

    assert!(a.is_transposed());
    assert_eq!(a.entries(), a_before);
    assert_eq!(b.entries(), b_before);
}

pub fn checked_access_rejects_out_of_range<M: SparseMatrix>() {
    let mut m = M::with_dimension(2);
    let oob = MatrixError::IndexOutOfBounds {
        row: 2,
        col: 0,
        dimension: 2,
    };

    assert_eq!(m.try_get(2, 0), Err(oob));
    assert_eq!(m.try_set(2, 0, 1), Err(oob));
    assert_eq!(m.try_add_value(2, 0, 1), Err(oob));
    assert_eq!(m.try_set(1, 1, 4), Ok(()));
    assert_eq!(m.try_get(1, 1), Ok(4));
}

/// Expand to one `#[test]` per contract property for a backend type
macro_rules! contract_suite {
    ($matrix:ty) => {
        #[test]
        fn test_construction_reduces_and_drops_zeros() {
            $crate::contract_tests::construction_reduces_and_drops_zeros::<$matrix>();
        }

        #[test]
        fn test_last_triplet_wins() {
            $crate::contract_tests::last_triplet_wins::<$matrix>();
        }

        #[test]
        fn test_add_value_removes_on_zero_sum() {
            $crate::contract_tests::add_value_removes_on_zero_sum::<$matrix>();
        }

        #[test]
        fn test_transpose_is_involution() {
            $crate::contract_tests::transpose_is_involution::<$matrix>();
        }

        #[test]
        fn test_transpose_swaps_logical_coordinates() {
            $crate::contract_tests::transpose_swaps_logical_coordinates::<$matrix>();
        }

        #[test]
        fn test_materialize_is_independent() {
            $crate::contract_tests::materialize_is_independent::<$matrix>();
        }

        #[test]
        fn test_add_is_commutative() {
            $crate::contract_tests::add_is_commutative::<$matrix>();
        }

        #[test]
        fn test_add_to_self_doubles() {
            $crate::contract_tests::add_to_self_doubles::<$matrix>();
        }

        #[test]
        fn test_add_rejects_dimension_mismatch() {
            $crate::contract_tests::add_rejects_dimension_mismatch::<$matrix>();
        }

        #[test]
        fn test_scale_reduces_products() {
            $crate::contract_tests::scale_reduces_products::<$matrix>();
        }

        #[test]
        fn test_scale_keeps_orientation_semantics() {
            $crate::contract_tests::scale_keeps_orientation_semantics::<$matrix>();
        }

        #[test]
        fn test_multiply_by_identity() {
            $crate::contract_tests::multiply_by_identity::<$matrix>();
        }

        #[test]
        fn test_multiply_matches_dense_reference() {
            $crate::contract_tests::multiply_matches_dense_reference::<$matrix>();
        }

        #[test]
        fn test_multiply_cancellation_leaves_no_zeros() {
            $crate::contract_tests::multiply_cancellation_leaves_no_zeros::<$matrix>();
        }

        #[test]
        fn test_multiply_rejects_dimension_mismatch() {
            $crate::contract_tests::multiply_rejects_dimension_mismatch::<$matrix>();
        }

        #[test]
        fn test_operations_leave_operands_untouched() {
            $crate::contract_tests::operations_leave_operands_untouched::<$matrix>();
        }

        #[test]
        fn test_checked_access_rejects_out_of_range() {
            $crate::contract_tests::checked_access_rejects_out_of_range::<$matrix>();
        }
    };
}

pub(crate) use contract_suite;
