//! Shared, ordered record of what happened to each stand-in.

use std::sync::{Arc, Mutex};

/// Action recorded when a stand-in is dropped.
pub const RELEASED: &str = "released";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub subject: String,
    pub action: &'static str,
}

/// A cloneable, thread-safe event recorder.
///
/// All clones append to the same list, so one log can be shared by every
/// stand-in in a test and inspected after the context is gone.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, subject: &str, action: &'static str) {
        self.events.lock().unwrap().push(Event {
            subject: subject.to_string(),
            action,
        });
    }

    /// Every event, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Subjects in the order they were released.
    pub fn releases(&self) -> Vec<String> {
        self.subjects_with(RELEASED)
    }

    /// Subjects that received `action`, in order.
    pub fn subjects_with(&self, action: &str) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.subject.clone())
            .collect()
    }

    /// How many times `subject` was released.
    pub fn release_count(&self, subject: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.subject == subject && e.action == RELEASED)
            .count()
    }

    /// Actions received by `subject`, in order.
    pub fn actions_for(&self, subject: &str) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.subject == subject)
            .map(|e| e.action)
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}
