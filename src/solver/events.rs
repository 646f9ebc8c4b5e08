//! Structured diagnostics emitted by the solver.
//!
//! Every `solve_velocity` call produces exactly one [`ImpulseEvent`], including
//! calls on contacts between two static bodies (those report a zero impulse).
//! Formatting the events for display is left to the caller.

use serde::{Deserialize, Serialize};

use crate::constraints::ConstraintId;
use crate::math::vec2::Vec2;

/// The impulse one solve call applied for one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpulseEvent {
    pub constraint: ConstraintId,
    /// Impulse magnitude actually applied after clamping.
    pub lambda: f64,
    /// `normal * lambda`, applied to body B (and negated on body A).
    pub impulse: Vec2,
}

impl ImpulseEvent {
    /// Event for a solve call that could not move either body.
    pub fn inactive(constraint: ConstraintId) -> Self {
        Self {
            constraint,
            lambda: 0.0,
            impulse: Vec2::ZERO,
        }
    }
}

/// Receives impulse events as the solver produces them.
pub trait EventSink {
    fn record(&mut self, event: ImpulseEvent);
}

impl EventSink for Vec<ImpulseEvent> {
    fn record(&mut self, event: ImpulseEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: ImpulseEvent) {}
}

/// Events collected over one world step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepReport {
    pub events: Vec<ImpulseEvent>,
}

impl StepReport {
    /// Sum of the lambdas applied to `constraint` during the step.
    pub fn total_impulse(&self, constraint: ConstraintId) -> f64 {
        self.events
            .iter()
            .filter(|e| e.constraint == constraint)
            .map(|e| e.lambda)
            .sum()
    }

    /// Events for `constraint`, in sweep order.
    pub fn events_for(&self, constraint: ConstraintId) -> impl Iterator<Item = &ImpulseEvent> {
        self.events.iter().filter(move |e| e.constraint == constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: usize, lambda: f64) -> ImpulseEvent {
        ImpulseEvent {
            constraint: ConstraintId(id),
            lambda,
            impulse: Vec2::UP * lambda,
        }
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<ImpulseEvent> = Vec::new();
        sink.record(event(1, 0.5));
        sink.record(event(0, 0.25));
        assert_eq!(sink, vec![event(1, 0.5), event(0, 0.25)]);
    }

    #[test]
    fn test_inactive_event() {
        let e = ImpulseEvent::inactive(ConstraintId(7));
        assert_eq!(e.constraint, ConstraintId(7));
        assert_eq!(e.lambda, 0.0);
        assert_eq!(e.impulse, Vec2::ZERO);
    }

    #[test]
    fn test_step_report_totals() {
        let report = StepReport {
            events: vec![event(0, 0.5), event(1, 0.25), event(0, -0.125)],
        };
        assert_eq!(report.total_impulse(ConstraintId(0)), 0.375);
        assert_eq!(report.total_impulse(ConstraintId(1)), 0.25);
        assert_eq!(report.total_impulse(ConstraintId(2)), 0.0);
        assert_eq!(report.events_for(ConstraintId(0)).count(), 2);
    }

    #[test]
    fn test_event_serializes_as_structured_record() {
        let yaml = serde_yaml::to_string(&event(3, 0.5)).unwrap();
        let back: ImpulseEvent = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, event(3, 0.5));
        assert!(yaml.contains("constraint: 3"));
    }
}
