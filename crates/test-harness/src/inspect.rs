//! Mesh health inspection via the edge-count histogram.
//!
//! Coincident vertices are merged by quantizing positions at a small
//! epsilon before counting, then every undirected edge is tallied across
//! all triangles that reference it. A closed 2-manifold uses every edge
//! exactly twice; a count of 1 is an open boundary (leak), more than 2 is
//! a non-manifold overlap.

use std::collections::{BTreeMap, HashMap};

use shade_types::Mesh;
use stl_format::read_binary;

use crate::helpers::HarnessError;

/// Vertex quantization step in model units.
const QUANT_EPS: f32 = 1e-5;

type VertexKey = (i64, i64, i64);

fn quantize(v: shade_types::Vec3) -> VertexKey {
    (
        (v.x / QUANT_EPS).round() as i64,
        (v.y / QUANT_EPS).round() as i64,
        (v.z / QUANT_EPS).round() as i64,
    )
}

/// Edge-usage report for a mesh.
#[derive(Debug, Clone)]
pub struct EdgeReport {
    pub triangle_count: usize,
    pub distinct_edges: usize,
    /// Edges referenced by exactly one triangle.
    pub open_edges: usize,
    /// Edges referenced by more than two triangles.
    pub non_manifold_edges: usize,
    /// usage count → number of edges with that count.
    pub histogram: BTreeMap<usize, usize>,
}

impl EdgeReport {
    /// Zero open and zero non-manifold edges.
    pub fn is_manifold(&self) -> bool {
        self.open_edges == 0 && self.non_manifold_edges == 0
    }
}

impl std::fmt::Display for EdgeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "triangles: {}", self.triangle_count)?;
        writeln!(f, "distinct edges: {}", self.distinct_edges)?;
        writeln!(
            f,
            "open: {}, non-manifold: {}",
            self.open_edges, self.non_manifold_edges
        )?;
        for (uses, edges) in &self.histogram {
            writeln!(f, "  {uses}x: {edges} edges")?;
        }
        Ok(())
    }
}

/// Build the edge report for an in-memory mesh.
pub fn inspect_mesh(mesh: &Mesh) -> EdgeReport {
    let mut edge_uses: HashMap<(VertexKey, VertexKey), usize> = HashMap::new();

    for tri in &mesh.triangles {
        let keys = [
            quantize(tri.vertices[0]),
            quantize(tri.vertices[1]),
            quantize(tri.vertices[2]),
        ];
        for i in 0..3 {
            let a = keys[i];
            let b = keys[(i + 1) % 3];
            let edge = if a <= b { (a, b) } else { (b, a) };
            *edge_uses.entry(edge).or_insert(0) += 1;
        }
    }

    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    let mut open_edges = 0;
    let mut non_manifold_edges = 0;
    for &uses in edge_uses.values() {
        *histogram.entry(uses).or_insert(0) += 1;
        if uses == 1 {
            open_edges += 1;
        } else if uses > 2 {
            non_manifold_edges += 1;
        }
    }

    EdgeReport {
        triangle_count: mesh.triangle_count(),
        distinct_edges: edge_uses.len(),
        open_edges,
        non_manifold_edges,
        histogram,
    }
}

/// Parse a binary STL buffer and build its edge report.
pub fn inspect_stl(bytes: &[u8]) -> Result<EdgeReport, HarnessError> {
    let model = read_binary(bytes).map_err(|e| HarnessError::StlError {
        reason: e.to_string(),
    })?;
    Ok(inspect_mesh(&model.to_mesh()))
}
