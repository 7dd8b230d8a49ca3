//! Notifications raised by the simulation
//!
//! The tick reports pots and ball-ball contacts to an [`EventSink`]. Sinks
//! are fire-and-forget: nothing they do feeds back into the physics.

use serde::{Deserialize, Serialize};

use super::ball::BallType;

/// Something the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball dropped into a pocket
    Scored {
        slot: usize,
        kind: BallType,
        pocket: usize,
        points: u32,
    },
    /// Two balls collided; play the click once
    CollisionSound { a: usize, b: usize },
}

/// Receiver for simulation events
pub trait EventSink {
    fn on_event(&mut self, event: GameEvent);
}

/// Discard everything
impl EventSink for () {
    fn on_event(&mut self, _event: GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: GameEvent) {
        (**self).on_event(event)
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn on_event(&mut self, event: GameEvent) {
        (self.0)(event)
    }
}

/// Collects events and keeps a running tally of points and contacts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
    pub points: u32,
    pub collisions: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balls potted so far, in order
    pub fn potted(&self) -> impl Iterator<Item = BallType> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Scored { kind, .. } => Some(*kind),
            GameEvent::CollisionSound { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.points = 0;
        self.collisions = 0;
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Scored { points, .. } => self.points += points,
            GameEvent::CollisionSound { .. } => self.collisions += 1,
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_tally() {
        let mut log = EventLog::new();
        log.on_event(GameEvent::CollisionSound { a: 0, b: 3 });
        log.on_event(GameEvent::Scored {
            slot: 1,
            kind: BallType::Black,
            pocket: 0,
            points: 7,
        });
        log.on_event(GameEvent::Scored {
            slot: 9,
            kind: BallType::Red,
            pocket: 4,
            points: 1,
        });
        assert_eq!(log.points, 8);
        assert_eq!(log.collisions, 1);
        assert_eq!(log.potted().collect::<Vec<_>>(), vec![BallType::Black, BallType::Red]);

        log.clear();
        assert!(log.events.is_empty());
        assert_eq!(log.points, 0);
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        {
            let mut sink = FnSink(|_e: GameEvent| count += 1);
            sink.on_event(GameEvent::CollisionSound { a: 0, b: 1 });
            sink.on_event(GameEvent::CollisionSound { a: 0, b: 2 });
        }
        assert_eq!(count, 2);
    }
}
