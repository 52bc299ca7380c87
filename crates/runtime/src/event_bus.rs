use std::collections::VecDeque;

/// Backlog size used by `EventBus::new`.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Structured trace event, stamped with the frame it happened on.
///
/// Input handling and resizes run between frames; they carry the index of the
/// most recently issued frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Bounded, in-order event log.
///
/// A renderer that nobody drains must not grow without limit, so the backlog
/// is capped: emitting into a full bus drops the oldest event.
#[derive(Debug)]
pub struct EventBus {
    events: VecDeque<Event>,
    capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn emit(&mut self, frame_index: u64, kind: &'static str, message: impl Into<String>) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            frame_index,
            kind,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Take everything logged so far, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EVENT_CAPACITY, EventBus};

    #[test]
    fn records_events_with_frame_index() {
        let mut bus = EventBus::new();
        bus.emit(2, "test", "hello");
        assert_eq!(bus.len(), 1);
        let events: Vec<_> = bus.events().collect();
        assert_eq!(events[0].frame_index, 2);
        assert_eq!(events[0].kind, "test");
    }

    #[test]
    fn drain_clears_and_preserves_order() {
        let mut bus = EventBus::new();
        bus.emit(0, "a", "first");
        bus.emit(1, "b", "second");
        let drained = bus.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(bus.is_empty());
    }

    #[test]
    fn full_bus_drops_oldest() {
        let mut bus = EventBus::with_capacity(2);
        bus.emit(0, "k", "one");
        bus.emit(1, "k", "two");
        bus.emit(2, "k", "three");
        let drained = bus.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "two");
        assert_eq!(drained[1].message, "three");
    }

    #[test]
    fn default_capacity_is_bounded() {
        let mut bus = EventBus::new();
        for i in 0..(DEFAULT_EVENT_CAPACITY as u64 + 10) {
            bus.emit(i, "k", "m");
        }
        assert_eq!(bus.len(), DEFAULT_EVENT_CAPACITY);
    }
}
