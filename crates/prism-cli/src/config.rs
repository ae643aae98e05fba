//! Scene description read from TOML.
//!
//! ```toml
//! [[transforms]]
//! type = "translate"
//! delta = [0.0, 0.0, 10.0]
//!
//! [[transforms]]
//! type = "rotate_z"
//! degrees = 45.0
//!
//! [sphere]
//! radius = 2.0
//! phi_max = 180.0
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use prism_geom::Transform;
use prism_math::{Float, Matrix4x4, Point3f, Vector3f};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One step of the object-to-world transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformOp {
    /// Move by `delta`.
    Translate { delta: [Float; 3] },
    /// Scale along each axis.
    Scale { factors: [Float; 3] },
    /// Rotate about +x.
    RotateX { degrees: Float },
    /// Rotate about +y.
    RotateY { degrees: Float },
    /// Rotate about +z.
    RotateZ { degrees: Float },
    /// Rotate about an arbitrary axis.
    Rotate { degrees: Float, axis: [Float; 3] },
    /// Camera-style placement.
    LookAt {
        eye: [Float; 3],
        look: [Float; 3],
        up: [Float; 3],
    },
    /// Explicit row-major affine matrix; the bottom row must be `[0, 0, 0, 1]`.
    Matrix { rows: [[Float; 4]; 4] },
}

impl TransformOp {
    /// Build the transform for this step.
    pub fn to_transform(&self) -> Result<Transform> {
        let t = match self {
            Self::Translate { delta } => Transform::translate(&vec3(delta)),
            Self::Scale { factors: [x, y, z] } => Transform::scale(*x, *y, *z),
            Self::RotateX { degrees } => Transform::rotate_x(*degrees),
            Self::RotateY { degrees } => Transform::rotate_y(*degrees),
            Self::RotateZ { degrees } => Transform::rotate_z(*degrees),
            Self::Rotate { degrees, axis } => Transform::rotate(*degrees, &vec3(axis)),
            Self::LookAt { eye, look, up } => {
                Transform::look_at(&point3(eye), &point3(look), &vec3(up))?
            }
            Self::Matrix { rows } => {
                if rows[3] != [0.0, 0.0, 0.0, 1.0] {
                    bail!("matrix bottom row must be [0, 0, 0, 1], got {:?}", rows[3]);
                }
                Transform::from_matrix(Matrix4x4::from(*rows))?
            }
        };
        Ok(t)
    }
}

/// Sphere placed by the transform stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: Float,
    /// Defaults to `-radius`.
    pub z_min: Option<Float>,
    /// Defaults to `radius`.
    pub z_max: Option<Float>,
    /// Sweep in degrees.
    pub phi_max: Float,
    pub reverse_orientation: bool,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            z_min: None,
            z_max: None,
            phi_max: 360.0,
            reverse_orientation: false,
        }
    }
}

impl SphereConfig {
    /// `(z_min, z_max)` with the defaults filled in.
    pub fn z_range(&self) -> (Float, Float) {
        (
            self.z_min.unwrap_or(-self.radius),
            self.z_max.unwrap_or(self.radius),
        )
    }
}

/// Top-level scene file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Applied outermost first: the first entry acts last on the object.
    pub transforms: Vec<TransformOp>,
    pub sphere: SphereConfig,
}

impl SceneConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid scene config")
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&text)?;
        debug!(
            path = %path.display(),
            transforms = config.transforms.len(),
            "loaded scene config"
        );
        Ok(config)
    }

    /// Product of every listed transform, identity when there are none.
    pub fn object_to_world(&self) -> Result<Transform> {
        self.transforms
            .iter()
            .try_fold(Transform::identity(), |acc, op| -> Result<Transform> {
                Ok(acc * op.to_transform()?)
            })
    }
}

fn vec3(v: &[Float; 3]) -> Vector3f {
    Vector3f::new(v[0], v[1], v[2])
}

fn point3(p: &[Float; 3]) -> Point3f {
    Point3f::new(p[0], p[1], p[2])
}
