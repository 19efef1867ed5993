//! Watertight lampshade mesh construction from a polar occupancy mask.
//!
//! The shade is a single closed shell: an annular base slab with the
//! tea-light bore, a cylindrical wall whose panels follow the mask (openings
//! sealed by cap faces), and a domed roof carrying the LED mounting pocket.

pub mod base;
pub mod build;
pub mod dome;
pub mod error;
pub mod grid;
pub mod validate;
pub mod wall;

pub use build::build_mesh;
pub use error::BuildError;
pub use grid::{in_pillar_arc, is_boundary_row, WallGrid, MIN_PILLAR_WIDTH_MM};
pub use validate::{validate_params, ShellDims, MOUNT_CLEARANCE_MM};
