// demos/two_rank_numbering.rs
// cargo run --example two_rank_numbering
//
// Simulates both ranks of a two-triangle mesh split across two processes:
// T0 = (g0,g1,g2) lives on rank 0, T1 = (g1,g2,g3) on rank 1, and each rank
// keeps the neighbour's triangle as a one-cell halo. The ranks never see
// each other's local point ids, yet every ordering derived from the shared
// vertex numbering has to come out the same on both sides.

use mesh_numbering::prelude::*;

struct RankState {
    mesh: SimplicialComplex,
    overlap: Overlap,
    numbering: GlobalVertexNumbering,
}

fn build_rank(rank: usize) -> Result<RankState, MeshNumberingError> {
    // Each rank lists its owned cell first; vertex indices in the cell list
    // are the global numbers. The overlap names every received point and the
    // id it has on its owner.
    let (cells, links, owned, ghosts): (
        Vec<Vec<usize>>,
        Vec<(u64, usize, u64)>,
        Vec<(u64, u64)>,
        Vec<(u64, u64)>,
    ) = if rank == 0 {
        (
            vec![vec![0, 1, 2], vec![1, 2, 3]],
            vec![(2, 1, 1), (6, 1, 6), (10, 1, 8), (11, 1, 9)],
            vec![(3, 0), (4, 1), (5, 2)],
            vec![(6, 3)],
        )
    } else {
        (
            vec![vec![1, 2, 3], vec![0, 1, 2]],
            vec![
                (2, 0, 1),
                (3, 0, 3),
                (4, 0, 4),
                (5, 0, 5),
                (7, 0, 8),
                (10, 0, 7),
                (11, 0, 9),
            ],
            vec![(6, 3)],
            vec![(3, 0), (4, 1), (5, 2)],
        )
    };

    let mesh = from_cell_list(2, &cells)?;
    let mut overlap = Overlap::new();
    for (local, owner, remote) in links {
        overlap.add_link(PointId::new(local)?, owner, PointId::new(remote)?)?;
    }
    let mut numbering = GlobalVertexNumbering::new();
    for (v, g) in owned {
        numbering.insert_owned(PointId::new(v)?, g);
    }
    for (v, g) in ghosts {
        numbering.insert_ghost(PointId::new(v)?, g);
    }
    Ok(RankState {
        mesh,
        overlap,
        numbering,
    })
}

/// Rank-independent name for a point: the sorted global numbers of the
/// vertices in its closure.
fn label(
    state: &RankState,
    strata: &StrataCache<PointId>,
    p: PointId,
) -> Result<Vec<u64>, MeshNumberingError> {
    let mut out = Vec::new();
    for q in state.mesh.sieve.closure([p]) {
        if strata.depth_of(q) == Some(0) {
            out.push(state.numbering.global_index(q)?);
        }
    }
    out.sort_unstable();
    Ok(out)
}

fn main() -> Result<(), MeshNumberingError> {
    let mut closure_orders = Vec::new();
    let mut facet_tables = Vec::new();

    for rank in 0..2usize {
        let state = build_rank(rank)?;
        let strata = state.mesh.sieve.strata_cache()?;

        // 1) Classify: the received triangle and everything only it touches
        //    is exec-halo; the rest of the owned triangle is the send set.
        let classes = classify_points(&state.mesh.sieve, strata, &state.overlap)?;
        let halo_cells = classes.stratum(EntityClass::ExecHalo, strata.diameter);
        println!("[rank {rank}] halo cells: {halo_cells:?}");

        // 2) Vertices grouped core / non-core / exec-halo.
        let vertices = entities_by_class(&classes, 0);
        println!(
            "[rank {rank}] vertices {:?} boundaries {:?}",
            vertices.points, vertices.boundaries
        );

        // 3) Whole-chart permutation: owned entities first, halo last.
        let perm = class_ordered_permutation(&state.mesh.sieve, strata, &classes)?;
        println!("[rank {rank}] permutation: {perm:?}");

        // 4) Canonical closure of each triangle, one dof on vertices and
        //    edges, reported as global labels so the ranks can be compared.
        let cell_slots = if rank == 0 {
            [(0, "T0"), (1, "T1")]
        } else {
            [(1, "T0"), (0, "T1")]
        };
        let mut per_cell = Vec::new();
        for (slot, name) in cell_slots {
            let cell = state
                .mesh
                .cell_point(slot)
                .ok_or(MeshNumberingError::EmptyCellList)?;
            let closure: Vec<_> = state.mesh.sieve.closure([cell]).collect();
            let order = cell_closure_numbering(
                &state.mesh.sieve,
                strata,
                &state.numbering,
                &closure,
                &[1, 1],
            )?;
            let labels = order
                .iter()
                .map(|&p| label(&state, strata, p))
                .collect::<Result<Vec<_>, _>>()?;
            println!("[rank {rank}] {name} closure order: {labels:?}");
            per_cell.push(labels);
        }
        closure_orders.push(per_cell);

        // 5) Local facet index of the shared edge (g1,g2) in each supporting
        //    cell, keyed by the cell's corner label.
        let shared_edge = PointId::new(if rank == 0 { 8 } else { 7 })?;
        let indices = facet_numbering(&state.mesh.sieve, strata, &state.numbering, shared_edge)?;
        let mut table = state
            .mesh
            .sieve
            .support_points(shared_edge)
            .zip(indices)
            .map(|(cell, idx)| Ok((label(&state, strata, cell)?, idx)))
            .collect::<Result<Vec<(Vec<u64>, usize)>, MeshNumberingError>>()?;
        table.sort();
        println!("[rank {rank}] shared edge indices: {table:?}");
        facet_tables.push(table);
    }

    assert_eq!(closure_orders[0], closure_orders[1]);
    assert_eq!(facet_tables[0], facet_tables[1]);
    println!("both ranks agree on closure order and facet indices");
    Ok(())
}
