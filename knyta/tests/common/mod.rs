#![allow(dead_code)]

use knyta::{BoxError, EventCallback, HandleEvent, UiEvent, coerce::BindEnum};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl BindEnum for Theme {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Light" => Some(Self::Light),
            "Dark" => Some(Self::Dark),
            "System" => Some(Self::System),
            _ => None,
        }
    }

    fn type_name() -> &'static str {
        "Theme"
    }
}

/// A receiver that appends "notified" to a shared log before running the
/// wrapped callback, so tests can assert notification-before-callback order.
pub struct OrderedReceiver {
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderedReceiver {
    pub fn new() -> (Arc<Self>, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let receiver = Arc::new(Self {
            log: Arc::clone(&log),
        });
        (receiver, log)
    }
}

impl HandleEvent for OrderedReceiver {
    async fn handle_event(&self, callback: EventCallback, event: UiEvent) -> Result<(), BoxError> {
        self.log.lock().unwrap().push("notified");
        callback.invoke(event).await
    }
}
