/// Dice Core Library - Shared geometry, scene and render loop
///
/// This library builds the nine-dice scene (geometry, materials, camera,
/// light) and drives its per-frame animation. Hosts supply a [`Renderer`]
/// and call [`RenderLoop::frame`] from their own frame callback.

pub mod clock;
pub mod config;
pub mod dice;
pub mod geometry;
pub mod light;
pub mod material;
pub mod primitives;
pub mod projection;
pub mod render_loop;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use clock::{FrameClock, HostClock, ManualClock, SystemClock};
pub use config::{CameraConfig, LightConfig, SceneConfig};
pub use dice::{DieKind, GridSlot, LAYOUT};
pub use geometry::{Geometry, GeometryError, Mesh, Triangle, Vertex};
pub use light::DirectionalLight;
pub use material::{Color, Material};
pub use projection::Camera;
pub use render_loop::{FrameReport, RenderLoop};
pub use scene::{Scene, SceneObject};
pub use surface::{resize_to_display_size, Renderer, Surface};
pub use transform::{RotationState, Transform};
