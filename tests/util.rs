#![allow(dead_code)]
use mesh_numbering::mesh_generation::from_cell_list;
use mesh_numbering::numbering::GlobalVertexNumbering;
use mesh_numbering::overlap::Overlap;
use mesh_numbering::topology::point::PointId;
use mesh_numbering::topology::sieve::{InMemorySieve, Sieve, StrataCache};

pub fn pid(u: u64) -> PointId {
    PointId::new(u).unwrap()
}

/// Build a sieve from arrows (u -> v) with unit payload ().
pub fn sieve_from(arrows: &[(u64, u64)]) -> InMemorySieve<PointId, ()> {
    let mut s = InMemorySieve::<PointId, ()>::default();
    for &(u, v) in arrows {
        s.add_arrow(pid(u), pid(v), ());
    }
    s
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// One rank's share of a distributed mesh: local topology, the links naming
/// received points, and the universal vertex numbers.
pub struct RankView {
    pub sieve: InMemorySieve<PointId, ()>,
    pub overlap: Overlap,
    pub numbering: GlobalVertexNumbering,
}

/// Rank `rank`'s view of four intervals in a line, split two/two between
/// ranks 0 and 1 with a one-cell halo on each side.
///
/// Global picture: vertices g0..g4 (global numbers 0..4), cells C0..C3,
/// rank 0 owning C0,C1 and rank 1 owning C2,C3. Local ids:
///
/// - rank 0: C0=1, C1=2, C2=3 (received); g0=4, g1=5, g2=6, g3=7 (received)
/// - rank 1: C2=1, C3=2, C1=3 (received); g2=4, g3=5, g4=6, g1=7
///   (g2 and g1 received, owner rank 0)
pub fn interval_rank(rank: usize) -> RankView {
    let (arrows, links): (&[(u64, u64)], &[(u64, usize, u64)]) = if rank == 0 {
        (
            &[(1, 4), (1, 5), (2, 5), (2, 6), (3, 6), (3, 7)],
            &[(3, 1, 1), (7, 1, 5)],
        )
    } else {
        (
            &[(1, 4), (1, 5), (2, 5), (2, 6), (3, 7), (3, 4)],
            &[(3, 0, 2), (4, 0, 6), (7, 0, 5)],
        )
    };
    let sieve = sieve_from(arrows);
    let overlap =
        Overlap::from_links(links.iter().map(|&(l, r, p)| (pid(l), r, pid(p)))).unwrap();
    let mut numbering = GlobalVertexNumbering::new();
    if rank == 0 {
        numbering.insert_owned(pid(4), 0);
        numbering.insert_owned(pid(5), 1);
        numbering.insert_owned(pid(6), 2);
        numbering.insert_ghost(pid(7), 3);
    } else {
        numbering.insert_ghost(pid(4), 2);
        numbering.insert_owned(pid(5), 3);
        numbering.insert_owned(pid(6), 4);
        numbering.insert_ghost(pid(7), 1);
    }
    RankView {
        sieve,
        overlap,
        numbering,
    }
}

/// Rank `rank`'s view of two triangles sharing an edge, one owned per rank
/// and the other received as halo.
///
/// Global picture: T0=(g0,g1,g2) on rank 0, T1=(g1,g2,g3) on rank 1; the
/// global vertex number is the index. Each rank builds its view from a cell
/// list with the owned cell first, so local point ids differ between ranks:
///
/// - rank 0: cells T0=1, T1=2; vertices g0..g3 = 3..6;
///   edges (g0,g1)=7, (g1,g2)=8, (g0,g2)=9, (g2,g3)=10, (g1,g3)=11
/// - rank 1: cells T1=1, T0=2; vertices g0..g3 = 3..6;
///   edges (g1,g2)=7, (g2,g3)=8, (g1,g3)=9, (g0,g1)=10, (g0,g2)=11
pub fn triangle_rank(rank: usize) -> RankView {
    if rank == 0 {
        let mesh = from_cell_list(2, &[vec![0, 1, 2], vec![1, 2, 3]]).unwrap();
        let overlap = Overlap::from_links([
            (pid(2), 1, pid(1)),
            (pid(6), 1, pid(6)),
            (pid(10), 1, pid(8)),
            (pid(11), 1, pid(9)),
        ])
        .unwrap();
        let mut numbering = GlobalVertexNumbering::new();
        numbering.insert_owned(pid(3), 0);
        numbering.insert_owned(pid(4), 1);
        numbering.insert_owned(pid(5), 2);
        numbering.insert_ghost(pid(6), 3);
        RankView {
            sieve: mesh.sieve,
            overlap,
            numbering,
        }
    } else {
        let mesh = from_cell_list(2, &[vec![1, 2, 3], vec![0, 1, 2]]).unwrap();
        let overlap = Overlap::from_links([
            (pid(2), 0, pid(1)),
            (pid(3), 0, pid(3)),
            (pid(4), 0, pid(4)),
            (pid(5), 0, pid(5)),
            (pid(7), 0, pid(8)),
            (pid(10), 0, pid(7)),
            (pid(11), 0, pid(9)),
        ])
        .unwrap();
        let mut numbering = GlobalVertexNumbering::new();
        numbering.insert_ghost(pid(3), 0);
        numbering.insert_ghost(pid(4), 1);
        numbering.insert_ghost(pid(5), 2);
        numbering.insert_owned(pid(6), 3);
        RankView {
            sieve: mesh.sieve,
            overlap,
            numbering,
        }
    }
}

/// Rank-independent label for a point: the sorted global numbers of the
/// vertices in its closure. A vertex labels as a singleton, an edge as its
/// endpoint pair, a cell as its corner set.
pub fn global_label(
    sieve: &InMemorySieve<PointId, ()>,
    strata: &StrataCache<PointId>,
    numbering: &GlobalVertexNumbering,
    p: PointId,
) -> Vec<u64> {
    let mut label: Vec<u64> = sieve
        .closure([p])
        .filter(|&q| strata.depth_of(q) == Some(0))
        .map(|q| numbering.global_index(q).unwrap())
        .collect();
    label.sort_unstable();
    label
}
