use crate::objects::rigid_body::RigidBody;

/// Integrates the rigid body's state forward in time using Semi-Implicit Euler.
///
/// Velocity is updated from the accumulated force first, then position from
/// the new velocity. Static bodies get no acceleration (their inverse mass is
/// zero) but still carry whatever velocity they were given. The force
/// accumulator is left untouched; the solver clears it at the end of the step.
pub fn integrate(body: &mut RigidBody, dt: f64) {
    // v = v + F * inv_m * dt
    body.velocity += body.force * body.inv_mass * dt;
    // p = p + v * dt
    body.position += body.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut rb = RigidBody::new(Vec2::ZERO, 1.0)
            .unwrap()
            .with_velocity(Vec2::new(10.0, -5.0));

        integrate(&mut rb, 0.1);

        assert!((rb.position.x - 1.0).abs() < EPSILON);
        assert!((rb.position.y - -0.5).abs() < EPSILON);
        assert_eq!(rb.velocity, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_linear_motion_constant_force() {
        let mut rb = RigidBody::new(Vec2::ZERO, 2.0).unwrap();
        rb.apply_force(Vec2::new(10.0, 0.0));
        // a = F/m = (5, 0)

        integrate(&mut rb, 0.1);

        // v = (0,0) + (5,0)*0.1 = (0.5, 0)
        assert!((rb.velocity.x - 0.5).abs() < EPSILON);
        assert!(rb.velocity.y.abs() < EPSILON);
        // p uses the updated velocity: (0.5, 0)*0.1
        assert!((rb.position.x - 0.05).abs() < EPSILON);
        assert!(rb.position.y.abs() < EPSILON);
        // Force is cleared by the solver, not here
        assert_eq!(rb.force, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_integrate_static_ignores_force() {
        let mut rb = RigidBody::new_static(Vec2::new(1.0, 1.0));
        rb.apply_force(Vec2::new(10.0, 10.0));

        integrate(&mut rb, 0.1);

        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_integrate_static_keeps_kinematic_velocity() {
        let mut rb = RigidBody::new_static(Vec2::ZERO).with_velocity(Vec2::new(2.0, 0.0));
        rb.apply_force(Vec2::new(-100.0, 0.0));

        integrate(&mut rb, 0.5);

        assert_eq!(rb.velocity, Vec2::new(2.0, 0.0));
        assert!((rb.position.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_is_deterministic() {
        let mut a = RigidBody::new(Vec2::new(0.3, -7.1), 3.7)
            .unwrap()
            .with_velocity(Vec2::new(1.0 / 3.0, 2.0 / 7.0));
        a.apply_force(Vec2::new(0.123, -9.81));
        let mut b = a.clone();

        integrate(&mut a, 1.0 / 60.0);
        integrate(&mut b, 1.0 / 60.0);

        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
        assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
    }
}
