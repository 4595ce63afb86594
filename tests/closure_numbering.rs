mod util;

use mesh_numbering::numbering::cell_closure_numbering;
use mesh_numbering::topology::sieve::Sieve;
use util::{global_label, interval_rank, pid, triangle_rank};

#[test]
fn one_dimensional_closure_reverses_vertices() {
    let view = interval_rank(0);
    let strata = view.sieve.strata_cache().unwrap();
    let closure: Vec<_> = view.sieve.closure([pid(2)]).collect();
    let order =
        cell_closure_numbering(&view.sieve, strata, &view.numbering, &closure, &[1]).unwrap();
    // Vertices descend by global number in one dimension, the cell is last.
    assert_eq!(order, vec![pid(6), pid(5), pid(2)]);
}

#[test]
fn ranks_agree_on_the_shared_interval_cell() {
    // C2 is rank 0's received cell 3 and rank 1's owned cell 1.
    let view0 = interval_rank(0);
    let strata0 = view0.sieve.strata_cache().unwrap();
    let closure0: Vec<_> = view0.sieve.closure([pid(3)]).collect();
    let order0 =
        cell_closure_numbering(&view0.sieve, strata0, &view0.numbering, &closure0, &[1]).unwrap();

    let view1 = interval_rank(1);
    let strata1 = view1.sieve.strata_cache().unwrap();
    let closure1: Vec<_> = view1.sieve.closure([pid(1)]).collect();
    let order1 =
        cell_closure_numbering(&view1.sieve, strata1, &view1.numbering, &closure1, &[1]).unwrap();

    let labels0: Vec<_> = order0
        .iter()
        .map(|&p| global_label(&view0.sieve, strata0, &view0.numbering, p))
        .collect();
    let labels1: Vec<_> = order1
        .iter()
        .map(|&p| global_label(&view1.sieve, strata1, &view1.numbering, p))
        .collect();
    assert_eq!(labels0, labels1);
}

#[test]
fn triangle_closure_orders_canonically() {
    let view = triangle_rank(0);
    let strata = view.sieve.strata_cache().unwrap();
    let closure: Vec<_> = view.sieve.closure([pid(2)]).collect();
    let order =
        cell_closure_numbering(&view.sieve, strata, &view.numbering, &closure, &[1, 1]).unwrap();
    // Vertices ascend by global number; each edge sorts by the position of
    // its opposite vertex; the cell closes the sequence.
    assert_eq!(
        order,
        vec![pid(4), pid(5), pid(6), pid(10), pid(11), pid(8), pid(2)]
    );
}

#[test]
fn ranks_agree_on_the_shared_triangle() {
    // T1 is rank 0's received cell 2 and rank 1's owned cell 1; rank 1 sees
    // two of its corners only as ghosts with sign-encoded numbers.
    let view0 = triangle_rank(0);
    let strata0 = view0.sieve.strata_cache().unwrap();
    let closure0: Vec<_> = view0.sieve.closure([pid(2)]).collect();
    let order0 =
        cell_closure_numbering(&view0.sieve, strata0, &view0.numbering, &closure0, &[1, 1])
            .unwrap();

    let view1 = triangle_rank(1);
    let strata1 = view1.sieve.strata_cache().unwrap();
    let closure1: Vec<_> = view1.sieve.closure([pid(1)]).collect();
    let order1 =
        cell_closure_numbering(&view1.sieve, strata1, &view1.numbering, &closure1, &[1, 1])
            .unwrap();

    let labels0: Vec<_> = order0
        .iter()
        .map(|&p| global_label(&view0.sieve, strata0, &view0.numbering, p))
        .collect();
    let labels1: Vec<_> = order1
        .iter()
        .map(|&p| global_label(&view1.sieve, strata1, &view1.numbering, p))
        .collect();
    assert_eq!(labels0, labels1);
}

#[test]
fn zero_dof_edges_keep_closure_order() {
    let view = triangle_rank(0);
    let strata = view.sieve.strata_cache().unwrap();
    let closure: Vec<_> = view.sieve.closure([pid(2)]).collect();
    let order =
        cell_closure_numbering(&view.sieve, strata, &view.numbering, &closure, &[1, 0]).unwrap();
    // Without edge dofs the non-incident-vertex sort is skipped and the
    // edges stay in the order the closure supplied them.
    let closure_edges: Vec<_> = closure
        .iter()
        .copied()
        .filter(|&p| strata.depth_of(p) == Some(1))
        .collect();
    assert_eq!(&order[..3], &[pid(4), pid(5), pid(6)]);
    assert_eq!(&order[3..6], closure_edges.as_slice());
    assert_eq!(order[6], pid(2));
}

#[test]
fn extra_dof_entries_are_ignored() {
    let view = triangle_rank(0);
    let strata = view.sieve.strata_cache().unwrap();
    let closure: Vec<_> = view.sieve.closure([pid(2)]).collect();
    let short =
        cell_closure_numbering(&view.sieve, strata, &view.numbering, &closure, &[1, 1]).unwrap();
    let long =
        cell_closure_numbering(&view.sieve, strata, &view.numbering, &closure, &[1, 1, 7, 9])
            .unwrap();
    assert_eq!(short, long);
}
