//! The picker's event channel.
//!
//! Replaces the original observer object with a plain subscribe/notify
//! channel: the host's microsummary service emits an event when content
//! finishes generating, every subscriber runs, and rebuilding the menu is
//! just one subscriber among potentially several.

use marq_core::MicrosummaryRef;

/// Something happened to an in-flight microsummary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Content finished generating for this microsummary.
    ContentLoaded(MicrosummaryRef),
    /// A new microsummary became available for the page.
    ElementAppended(MicrosummaryRef),
}

/// Subscribe/notify channel for picker events.
#[derive(Default)]
pub struct PickerEvents {
    subscribers: Vec<Box<dyn FnMut(&PickerEvent)>>,
}

impl PickerEvents {
    /// Channel with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; it runs on every subsequent notification.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PickerEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver an event to every subscriber, in subscription order.
    pub fn notify(&mut self, event: &PickerEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use url::Url;

    #[test]
    fn test_notify_reaches_every_subscriber_in_order() {
        // GIVEN two subscribers
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut events = PickerEvents::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            events.subscribe(move |_| seen.borrow_mut().push(tag));
        }

        // WHEN
        let summary = MicrosummaryRef::new(Url::parse("https://example.com/gen.xml").unwrap());
        events.notify(&PickerEvent::ContentLoaded(summary));

        // THEN
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
        assert_eq!(events.subscriber_count(), 2);
    }
}
