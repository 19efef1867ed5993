//! Wall-grid occupancy policy.
//!
//! The raw polar mask says where the silhouette has material; the policy
//! layer adds the forced-solid rules (boundary rows, structural pillars)
//! as named predicates so each rule is testable on its own, then resolves
//! diagonal-only contacts. The result is a freshly allocated, owned grid
//! per call.

use std::f32::consts::TAU;

use shade_types::{GeometryParams, PolarMask};

/// Minimum printable pillar width at the outer wall, in millimeters.
pub const MIN_PILLAR_WIDTH_MM: f32 = 2.0;

/// Top and bottom grid rows are always solid so the wall seals against the
/// dome ring and the base slab.
pub fn is_boundary_row(row: usize, rows: usize) -> bool {
    row == 0 || row + 1 == rows
}

/// Does this column's center fall within a structural pillar arc?
///
/// One pillar sits every `360° / pillar_count`; its width is the larger of
/// the minimum printable width and a quarter of the per-pillar arc length,
/// measured at the outer wall radius.
pub fn in_pillar_arc(col: usize, columns: usize, params: &GeometryParams) -> bool {
    let r_out = params.outer_radius();
    let per_pillar = TAU / params.pillar_count as f32;
    let width_mm = MIN_PILLAR_WIDTH_MM.max(per_pillar * r_out / 4.0);
    let half_width = width_mm / r_out / 2.0;

    let angle = (col as f32 + 0.5) * TAU / columns as f32;
    let nearest = (angle / per_pillar).round() * per_pillar;
    (angle - nearest).abs() <= half_width
}

/// The effective wall occupancy, as the face extraction sees it.
#[derive(Debug, Clone)]
pub struct WallGrid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl WallGrid {
    /// Apply the forced-solid policy to a mask and resolve diagonal
    /// contacts.
    pub fn new(mask: &PolarMask, params: &GeometryParams) -> Self {
        let columns = mask.columns;
        let rows = mask.rows;
        let mut cells = vec![false; rows * columns];
        for row in 0..rows {
            for col in 0..columns {
                cells[row * columns + col] = mask.is_solid(row, col)
                    || is_boundary_row(row, rows)
                    || in_pillar_arc(col, columns, params);
            }
        }
        let mut grid = Self {
            columns,
            rows,
            cells,
        };
        grid.resolve_diagonal_contacts();
        grid
    }

    /// Two solid cells meeting only at a grid corner would put four cap
    /// faces on one shared radial edge. Filling the top-row neighbor of
    /// each such pair keeps material edge-connected. Fills can introduce
    /// new corner contacts, so the scan repeats until it settles; it only
    /// ever adds material, so it terminates.
    fn resolve_diagonal_contacts(&mut self) {
        let (rows, columns) = (self.rows, self.columns);
        let mut changed = true;
        while changed {
            changed = false;
            for row in 0..rows - 1 {
                for col in 0..columns {
                    let right = (col + 1) % columns;
                    let a = self.cells[row * columns + col];
                    let b = self.cells[row * columns + right];
                    let c = self.cells[(row + 1) * columns + col];
                    let d = self.cells[(row + 1) * columns + right];
                    if a && d && !b && !c {
                        self.cells[row * columns + right] = true;
                        changed = true;
                    } else if b && c && !a && !d {
                        self.cells[row * columns + col] = true;
                        changed = true;
                    }
                }
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Effective occupancy at (row, col). The column wraps around.
    pub fn solid(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.columns + col % self.columns]
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s).count()
    }
}
