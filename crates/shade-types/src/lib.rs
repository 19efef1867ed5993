pub mod field;
pub mod mask;
pub mod mesh;
pub mod params;
pub mod vec3;

pub use field::BinaryField;
pub use mask::PolarMask;
pub use mesh::{Mesh, Triangle};
pub use params::{GeometryParams, SamplerConfig};
pub use vec3::Vec3;
