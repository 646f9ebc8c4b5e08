pub mod physics_world;
pub mod scene;

pub use physics_world::PhysicsWorld;
pub use scene::{BodyConfig, ContactConfig, SceneConfig};
