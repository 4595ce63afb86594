mod util;

use mesh_numbering::mesh_generation::from_cell_list;
use mesh_numbering::numbering::{EntityClass, classify_points};
use mesh_numbering::overlap::Overlap;
use util::{interval_rank, pid, triangle_rank};

#[test]
fn serial_mesh_is_all_core() {
    let mesh = from_cell_list(3, &[vec![0, 1, 2, 3], vec![0, 1, 2, 4]]).unwrap();
    let strata = mesh.sieve.strata_cache().unwrap();
    let classes = classify_points(&mesh.sieve, strata, &Overlap::new()).unwrap();
    assert_eq!(classes.len(), strata.len());
    for &p in &strata.chart_points {
        assert_eq!(classes.class_of(p), Some(EntityClass::Core));
    }
    assert!(classes.cells(EntityClass::NonCore).is_empty());
    assert!(classes.cells(EntityClass::ExecHalo).is_empty());
}

#[test]
fn interval_rank0_keeps_an_interior_core() {
    let view = interval_rank(0);
    let strata = view.sieve.strata_cache().unwrap();
    let classes = classify_points(&view.sieve, strata, &view.overlap).unwrap();
    // The far cell and its interior vertex never touch the halo.
    assert_eq!(classes.class_of(pid(1)), Some(EntityClass::Core));
    assert_eq!(classes.class_of(pid(4)), Some(EntityClass::Core));
    // The cell bordering the halo and everything in its closure is sent.
    for p in [2, 5, 6] {
        assert_eq!(classes.class_of(pid(p)), Some(EntityClass::NonCore));
    }
    // The received cell and far vertex execute but are owned elsewhere.
    for p in [3, 7] {
        assert_eq!(classes.class_of(pid(p)), Some(EntityClass::ExecHalo));
    }
}

#[test]
fn interval_rank1_has_no_core() {
    // Both of rank 1's cells border the halo, so its core is empty.
    let view = interval_rank(1);
    let strata = view.sieve.strata_cache().unwrap();
    let classes = classify_points(&view.sieve, strata, &view.overlap).unwrap();
    for p in [1, 2, 5, 6] {
        assert_eq!(classes.class_of(pid(p)), Some(EntityClass::NonCore));
    }
    for p in [3, 4, 7] {
        assert_eq!(classes.class_of(pid(p)), Some(EntityClass::ExecHalo));
    }
    assert!(classes.cells(EntityClass::Core).is_empty());
    assert!(classes.stratum(EntityClass::Core, 0).is_empty());
}

#[test]
fn interval_shared_points_owned_on_exactly_one_rank() {
    let view0 = interval_rank(0);
    let strata0 = view0.sieve.strata_cache().unwrap();
    let classes0 = classify_points(&view0.sieve, strata0, &view0.overlap).unwrap();
    let view1 = interval_rank(1);
    let strata1 = view1.sieve.strata_cache().unwrap();
    let classes1 = classify_points(&view1.sieve, strata1, &view1.overlap).unwrap();

    // (rank 0 local, rank 1 local) for the five points both ranks hold.
    let pairs = [(2, 3), (3, 1), (5, 7), (6, 4), (7, 5)];
    for (a, b) in pairs {
        let owned0 = classes0.class_of(pid(a)).unwrap() != EntityClass::ExecHalo;
        let owned1 = classes1.class_of(pid(b)).unwrap() != EntityClass::ExecHalo;
        assert!(
            owned0 ^ owned1,
            "shared point ({a},{b}) owned on both ranks or neither"
        );
    }
}

#[test]
fn triangle_halo_mirrors_between_ranks() {
    let view0 = triangle_rank(0);
    let strata0 = view0.sieve.strata_cache().unwrap();
    let classes0 = classify_points(&view0.sieve, strata0, &view0.overlap).unwrap();
    let view1 = triangle_rank(1);
    let strata1 = view1.sieve.strata_cache().unwrap();
    let classes1 = classify_points(&view1.sieve, strata1, &view1.overlap).unwrap();

    // Every received point is exec-halo, every owned point in the other
    // rank's chart is non-core, and nothing is private to one rank here.
    for p in [2, 6, 10, 11] {
        assert_eq!(classes0.class_of(pid(p)), Some(EntityClass::ExecHalo));
    }
    for p in [1, 3, 4, 5, 7, 8, 9] {
        assert_eq!(classes0.class_of(pid(p)), Some(EntityClass::NonCore));
    }
    for p in [2, 3, 4, 5, 7, 10, 11] {
        assert_eq!(classes1.class_of(pid(p)), Some(EntityClass::ExecHalo));
    }
    for p in [1, 6, 8, 9] {
        assert_eq!(classes1.class_of(pid(p)), Some(EntityClass::NonCore));
    }

    // Full correspondence table (rank 0 local, rank 1 local): both copies of
    // every entity agree on which side owns it.
    let pairs = [
        (1, 2),
        (2, 1),
        (3, 3),
        (4, 4),
        (5, 5),
        (6, 6),
        (7, 10),
        (8, 7),
        (9, 11),
        (10, 8),
        (11, 9),
    ];
    for (a, b) in pairs {
        let owned0 = classes0.class_of(pid(a)).unwrap() != EntityClass::ExecHalo;
        let owned1 = classes1.class_of(pid(b)).unwrap() != EntityClass::ExecHalo;
        assert!(
            owned0 ^ owned1,
            "shared point ({a},{b}) owned on both ranks or neither"
        );
    }
}

#[test]
fn class_strata_cover_the_chart() {
    for rank in 0..2 {
        let view = triangle_rank(rank);
        let strata = view.sieve.strata_cache().unwrap();
        let classes = classify_points(&view.sieve, strata, &view.overlap).unwrap();
        let mut covered = 0;
        for class in EntityClass::ALL {
            for depth in 0..=classes.dimension() {
                let level = classes.stratum(class, depth);
                assert!(level.windows(2).all(|w| w[0] < w[1]));
                covered += level.len();
            }
        }
        assert_eq!(covered, strata.len());
        assert_eq!(classes.iter().count(), strata.len());
    }
}
