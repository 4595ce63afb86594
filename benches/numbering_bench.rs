use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_numbering::mesh_generation::{SimplicialComplex, from_cell_list};
use mesh_numbering::numbering::{
    GlobalVertexNumbering, cell_closure_numbering, class_ordered_permutation, classify_points,
    facet_numbering,
};
use mesh_numbering::overlap::Overlap;
use mesh_numbering::topology::sieve::Sieve;

fn strip_mesh(n_cells: usize) -> SimplicialComplex {
    let cells: Vec<Vec<usize>> = (0..n_cells).map(|i| vec![i, i + 1, i + 2]).collect();
    from_cell_list(2, &cells).expect("valid strip")
}

/// Halo across the last two cells, as if the strip continued on a
/// neighbouring rank.
fn tail_overlap(mesh: &SimplicialComplex) -> Overlap {
    let mut overlap = Overlap::new();
    let n = mesh.cell_points.len();
    let tail: Vec<_> = mesh.cell_points[n - 2..].to_vec();
    for p in mesh.sieve.closure(tail) {
        overlap.add_link(p, 1, p).expect("fresh link");
    }
    overlap
}

fn identity_numbering(mesh: &SimplicialComplex) -> GlobalVertexNumbering {
    let mut numbering = GlobalVertexNumbering::new();
    for (&idx, &p) in &mesh.vertex_points {
        numbering.insert_owned(p, idx as u64);
    }
    numbering
}

fn bench_numbering(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbering");

    for &n_cells in &[256usize, 1024usize] {
        let mesh = strip_mesh(n_cells);
        let strata = mesh.sieve.strata_cache().expect("acyclic strip");
        let overlap = tail_overlap(&mesh);

        group.bench_with_input(
            BenchmarkId::new("classify", n_cells),
            &n_cells,
            |b, _| {
                b.iter(|| {
                    let classes = classify_points(&mesh.sieve, strata, &overlap);
                    black_box(classes)
                });
            },
        );

        let classes = classify_points(&mesh.sieve, strata, &overlap).expect("classified");
        group.bench_with_input(
            BenchmarkId::new("permutation", n_cells),
            &n_cells,
            |b, _| {
                b.iter(|| {
                    let perm = class_ordered_permutation(&mesh.sieve, strata, &classes);
                    black_box(perm)
                });
            },
        );

        let numbering = identity_numbering(&mesh);
        let closures: Vec<Vec<_>> = mesh
            .cell_points
            .iter()
            .map(|&cell| mesh.sieve.closure([cell]).collect())
            .collect();
        group.bench_with_input(
            BenchmarkId::new("cell_closures", n_cells),
            &n_cells,
            |b, _| {
                b.iter(|| {
                    for closure in &closures {
                        let order = cell_closure_numbering(
                            &mesh.sieve, strata, &numbering, closure, &[1, 1],
                        )
                        .expect("canonical order");
                        black_box(order);
                    }
                });
            },
        );

        let facets = strata.depth_stratum(1).to_vec();
        group.bench_with_input(BenchmarkId::new("facets", n_cells), &n_cells, |b, _| {
            b.iter(|| {
                for &facet in &facets {
                    let indices = facet_numbering(&mesh.sieve, strata, &numbering, facet)
                        .expect("simplicial facet");
                    black_box(indices);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_numbering);
criterion_main!(benches);
