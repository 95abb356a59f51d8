mod matrix;
mod quat;
mod vector;

pub use matrix::Matrix4;
pub use quat::Quat;
pub use vector::{Vector2, Vector3, Vector4};

pub(crate) const EPS: f32 = 1e-6;
