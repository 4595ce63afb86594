//! Strata computation utilities for sieves.
//!
//! [`StrataCache`] stores precomputed height, depth, and per-stratum point
//! lists for a sieve; [`compute_strata`] builds one for any [`Sieve`]. The
//! numbering layer treats the cache as its depth/height query interface:
//! vertices sit at depth 0, cells at height 0, and `diameter` is the
//! topological dimension of a uniform mesh.
//!
//! # Errors
//! * [`MeshNumberingError::MissingPointInCone`]: an arrow references a point
//!   not present in `base_points ∪ cap_points`. The error aggregates all such
//!   points (examples provided) and is raised before any topological pass.
//! * [`MeshNumberingError::CycleDetected`]: the topology contains a cycle.

use crate::mesh_error::MeshNumberingError;
use crate::topology::bounds::PointLike;
use crate::topology::sieve::Sieve;
use std::collections::HashMap;

/// Precomputed stratum information for a sieve.
///
/// Both stratification axes are materialized eagerly with each level sorted,
/// so stratum queries are cheap slices and iteration order is deterministic.
/// Querying a level that does not exist yields an empty slice, never an
/// error; callers treat absent strata as contributing zero entities.
#[derive(Clone, Debug)]
pub struct StrataCache<P> {
    /// Map from point to its height (distance down from the cells).
    pub height: HashMap<P, u32>,
    /// Map from point to its depth (distance down to the vertices).
    pub depth: HashMap<P, u32>,
    /// Sorted points at each height: `height_strata[0]` holds the cells.
    pub height_strata: Vec<Vec<P>>,
    /// Sorted points at each depth: `depth_strata[0]` holds the vertices.
    pub depth_strata: Vec<Vec<P>>,
    /// Maximum height (diameter) of the sieve.
    pub diameter: u32,
    /// Deterministic global ordering of points (height-major, then point order).
    pub chart_points: Vec<P>,
    /// Reverse lookup from point to chart index.
    pub chart_index: HashMap<P, usize>,
}

impl<P: PointLike> StrataCache<P> {
    /// Create a new, empty `StrataCache`.
    pub fn new() -> Self {
        Self {
            height: HashMap::new(),
            depth: HashMap::new(),
            height_strata: Vec::new(),
            depth_strata: Vec::new(),
            diameter: 0,
            chart_points: Vec::new(),
            chart_index: HashMap::new(),
        }
    }

    /// Depth of `p`, if it is in the chart.
    #[inline]
    pub fn depth_of(&self, p: P) -> Option<u32> {
        self.depth.get(&p).copied()
    }

    /// Height of `p`, if it is in the chart.
    #[inline]
    pub fn height_of(&self, p: P) -> Option<u32> {
        self.height.get(&p).copied()
    }

    /// Sorted points at depth `d`; empty when the stratum does not exist.
    #[inline]
    pub fn depth_stratum(&self, d: u32) -> &[P] {
        self.depth_strata.get(d as usize).map_or(&[], Vec::as_slice)
    }

    /// Sorted points at height `h`; empty when the stratum does not exist.
    #[inline]
    pub fn height_stratum(&self, h: u32) -> &[P] {
        self.height_strata
            .get(h as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Sorted cell points (height 0).
    #[inline]
    pub fn cells(&self) -> &[P] {
        self.height_stratum(0)
    }

    /// Sorted vertex points (depth 0).
    #[inline]
    pub fn vertices(&self) -> &[P] {
        self.depth_stratum(0)
    }

    /// Index of `p` in the chart, if present.
    #[inline]
    pub fn index_of(&self, p: P) -> Option<usize> {
        self.chart_index.get(&p).copied()
    }

    /// Total number of points in the chart.
    #[inline]
    pub fn len(&self) -> usize {
        self.chart_points.len()
    }

    /// Whether the chart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chart_points.is_empty()
    }
}

impl<P: PointLike> Default for StrataCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute strata information for a sieve.
///
/// ## Complexity
/// - Time: **O(|V| + |E|)** (Kahn topological sort + forward/backward passes)
/// - Space: **O(|V| + |E|)** for intermediate degree maps and result vectors.
///
/// # Errors
/// * [`MeshNumberingError::MissingPointInCone`]: any arrow references a point
///   not present in `base_points ∪ cap_points`; aggregated and raised before
///   any topological pass.
/// * [`MeshNumberingError::CycleDetected`]: the topology contains a cycle.
pub fn compute_strata<S>(s: &S) -> Result<StrataCache<S::Point>, MeshNumberingError>
where
    S: Sieve,
{
    use std::collections::HashSet;

    // 0) Authoritative point set: V = base ∪ cap
    let mut in_deg: HashMap<S::Point, u32> = HashMap::new();
    for p in s.base_points() {
        in_deg.entry(p).or_insert(0);
    }
    for p in s.cap_points() {
        in_deg.entry(p).or_insert(0);
    }

    // 1) Validate edges against V and accumulate in-degrees.
    //    Both directions are checked to catch backends that under-report one role.
    let mut missing: HashSet<S::Point> = HashSet::new();

    let sources: Vec<_> = in_deg.keys().copied().collect();
    for p in sources {
        for (q, _) in s.cone(p) {
            if let Some(d) = in_deg.get_mut(&q) {
                *d += 1;
            } else {
                missing.insert(q);
            }
        }
    }

    let caps: Vec<_> = in_deg.keys().copied().collect();
    for q in caps {
        for (src, _) in s.support(q) {
            if !in_deg.contains_key(&src) {
                missing.insert(src);
            }
        }
    }

    if !missing.is_empty() {
        let mut examples: Vec<_> = missing.iter().copied().collect();
        examples.sort_unstable();
        examples.truncate(8);
        return Err(MeshNumberingError::MissingPointInCone(format!(
            "Topology references points not declared in base_points∪cap_points; examples: {examples:?} ({} missing total)",
            missing.len()
        )));
    }

    // 2) Kahn's topological sort on V using the validated in-degrees
    let mut stack: Vec<_> = in_deg
        .iter()
        .filter_map(|(&p, &d)| (d == 0).then_some(p))
        .collect();

    let mut topo = Vec::with_capacity(in_deg.len());
    while let Some(p) = stack.pop() {
        topo.push(p);
        for (q, _) in s.cone(p) {
            // all q in V by validation above
            let d = in_deg.get_mut(&q).unwrap();
            *d -= 1;
            if *d == 0 {
                stack.push(q);
            }
        }
    }

    if topo.len() != in_deg.len() {
        return Err(MeshNumberingError::CycleDetected);
    }

    // 3) Heights: longest path from any support predecessor
    let mut height = HashMap::new();
    for &p in &topo {
        let h = s
            .support(p)
            .map(|(pred, _)| height.get(&pred).copied().unwrap_or(0))
            .max()
            .map_or(0, |m| m + 1);
        height.insert(p, h);
    }
    let max_h = *height.values().max().unwrap_or(&0);
    let mut height_strata = vec![Vec::new(); (max_h + 1) as usize];
    for (&p, &h) in &height {
        height_strata[h as usize].push(p);
    }

    // 4) Depths: longest path to any cone successor
    let mut depth = HashMap::new();
    for &p in topo.iter().rev() {
        let d = s
            .cone(p)
            .map(|(succ, _)| depth.get(&succ).copied().unwrap_or(0))
            .max()
            .map_or(0, |m| m + 1);
        depth.insert(p, d);
    }
    let max_d = *depth.values().max().unwrap_or(&0);
    let mut depth_strata = vec![Vec::new(); (max_d + 1) as usize];
    for (&p, &d) in &depth {
        depth_strata[d as usize].push(p);
    }

    // 5) Deterministic strata and chart
    for lev in &mut height_strata {
        lev.sort_unstable();
    }
    for lev in &mut depth_strata {
        lev.sort_unstable();
    }
    let mut chart_points = Vec::with_capacity(height.len());
    for lev in &height_strata {
        chart_points.extend(lev.iter().copied());
    }
    let mut chart_index = HashMap::with_capacity(chart_points.len());
    for (i, p) in chart_points.iter().copied().enumerate() {
        chart_index.insert(p, i);
    }

    Ok(StrataCache {
        height,
        depth,
        height_strata,
        depth_strata,
        diameter: max_h,
        chart_points,
        chart_index,
    })
}
