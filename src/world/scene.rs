//! Scene descriptions loaded from YAML.
//!
//! A scene lists the bodies, the contacts between them, gravity and solver
//! settings. Contact generation is not part of the engine, so contacts are
//! given explicitly with a normal and a penetration depth.
//!
//! ```yaml
//! gravity: [0.0, -9.81]    # optional, defaults to zero
//! solver:                  # optional, every field has a default
//!   iterations: 8
//!   baumgarte: 0.2
//!   accumulator: reset_each_step   # or "retain"
//!
//! bodies:
//!   - position: [0.0, 0.0]
//!     mass: 0.0            # 0 -> static
//!   - position: [0.0, 1.0]
//!     velocity: [0.0, -1.0]
//!     mass: 1.0
//!
//! contacts:
//!   - body_a: 0
//!     body_b: 1
//!     normal: [0.0, 1.0]   # from body_a toward body_b, unit length
//!     penetration: 0.1
//! ```

use std::io::Read;

use serde::Deserialize;

use crate::common::{Result, SolverConfig};

/// Initial state of one body.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64, // 0 = static
}

/// One contact, referencing bodies by their index in `bodies`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub body_a: usize,
    pub body_b: usize,
    pub normal: [f64; 2],
    #[serde(default)]
    pub penetration: f64,
}

/// Top-level scene file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub gravity: [f64; 2],
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub contacts: Vec<ContactConfig>,
}

impl SceneConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{AccumulatorPolicy, PhysicsError};
    use crate::constraints::ConstraintId;
    use crate::math::vec2::Vec2;
    use crate::objects::rigid_body::BodyHandle;
    use crate::world::PhysicsWorld;

    const STACK: &str = r#"
gravity: [0.0, -9.81]
solver:
  iterations: 10
  accumulator: retain
bodies:
  - position: [0.0, 0.0]
    mass: 0.0
  - position: [0.0, 1.0]
    velocity: [0.0, -1.0]
    mass: 2.0
  - position: [0.0, 2.0]
    mass: 1.0
contacts:
  - body_a: 0
    body_b: 1
    normal: [0.0, 1.0]
    penetration: 0.1
  - body_a: 1
    body_b: 2
    normal: [0.0, 1.0]
"#;

    #[test]
    fn test_parse_full_scene() {
        let scene = SceneConfig::from_yaml_str(STACK).unwrap();
        assert_eq!(scene.gravity, [0.0, -9.81]);
        assert_eq!(scene.solver.iterations, 10);
        assert_eq!(scene.solver.baumgarte, 0.2);
        assert_eq!(scene.solver.accumulator, AccumulatorPolicy::Retain);
        assert_eq!(scene.bodies.len(), 3);
        assert_eq!(scene.bodies[1].velocity, [0.0, -1.0]);
        assert_eq!(scene.bodies[2].velocity, [0.0, 0.0]);
        assert_eq!(scene.contacts[1].penetration, 0.0);
    }

    #[test]
    fn test_parse_minimal_scene_uses_defaults() {
        let scene = SceneConfig::from_yaml_str("bodies:\n  - position: [1.0, 2.0]\n    mass: 1.0\n").unwrap();
        assert_eq!(scene.solver, SolverConfig::default());
        assert_eq!(scene.gravity, [0.0, 0.0]);
        assert!(scene.contacts.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = SceneConfig::from_yaml_str("bodies: 3").unwrap_err();
        assert!(matches!(err, PhysicsError::Scene(_)));
    }

    #[test]
    fn test_from_reader() {
        let scene = SceneConfig::from_reader(STACK.as_bytes()).unwrap();
        assert_eq!(scene.contacts.len(), 2);
    }

    #[test]
    fn test_world_from_scene() {
        let scene = SceneConfig::from_yaml_str(STACK).unwrap();
        let world = PhysicsWorld::from_scene(&scene).unwrap();

        assert_eq!(world.gravity, Vec2::new(0.0, -9.81));
        assert_eq!(world.config.iterations, 10);
        assert!(world.body(BodyHandle(0)).unwrap().is_static());
        assert_eq!(world.body(BodyHandle(1)).unwrap().velocity, Vec2::new(0.0, -1.0));
        assert_eq!(world.body(BodyHandle(1)).unwrap().inv_mass, 0.5);
        assert_eq!(world.contact(ConstraintId(1)).unwrap().body_b(), BodyHandle(2));
    }

    #[test]
    fn test_world_from_scene_rejects_invalid_entries() {
        let negative_mass = "bodies:\n  - position: [0.0, 0.0]\n    mass: -1.0\n";
        let scene = SceneConfig::from_yaml_str(negative_mass).unwrap();
        assert!(matches!(
            PhysicsWorld::from_scene(&scene),
            Err(PhysicsError::InvalidMass(_))
        ));

        let dangling = r#"
bodies:
  - position: [0.0, 0.0]
    mass: 1.0
contacts:
  - body_a: 0
    body_b: 4
    normal: [0.0, 1.0]
"#;
        let scene = SceneConfig::from_yaml_str(dangling).unwrap();
        assert!(matches!(
            PhysicsWorld::from_scene(&scene),
            Err(PhysicsError::DanglingBody { constraint: 0, body: 4 })
        ));
    }

    #[test]
    fn test_world_from_scene_rejects_bad_solver_and_gravity() {
        let nan_baumgarte = "solver: { baumgarte: .nan }\nbodies: []\n";
        let scene = SceneConfig::from_yaml_str(nan_baumgarte).unwrap();
        assert!(matches!(
            PhysicsWorld::from_scene(&scene),
            Err(PhysicsError::InvalidBaumgarte(_))
        ));

        let negative_baumgarte = "solver: { baumgarte: -0.5 }\nbodies: []\n";
        let scene = SceneConfig::from_yaml_str(negative_baumgarte).unwrap();
        assert!(matches!(
            PhysicsWorld::from_scene(&scene),
            Err(PhysicsError::InvalidBaumgarte(_))
        ));

        let infinite_gravity = "gravity: [.inf, 0.0]\nbodies: []\n";
        let scene = SceneConfig::from_yaml_str(infinite_gravity).unwrap();
        assert!(matches!(
            PhysicsWorld::from_scene(&scene),
            Err(PhysicsError::InvalidGravity { .. })
        ));
    }

    #[test]
    fn test_scene_steps() {
        let scene = SceneConfig::from_yaml_str(STACK).unwrap();
        let mut world = PhysicsWorld::from_scene(&scene).unwrap();
        let report = world.step(1.0 / 60.0).unwrap();
        assert_eq!(report.events.len(), 20);
        for contact in &world.contacts {
            assert!(contact.lambda_accum() >= 0.0);
        }
    }
}
