//! Synchronous subscriber lists. Mutating the collection or activating a
//! choice invokes registered callbacks in registration order, in-process, on
//! the calling thread. This is a decoupling mechanism, not a concurrency one.

use std::sync::Arc;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// An ordered list of callbacks for one event kind.
pub struct Subscribers<T> {
    entries: Vec<(SubscriberId, Callback<T>)>,
    next_id: u64,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every callback with `value`, in registration order.
    pub fn emit(&self, value: &T) {
        for (_, callback) in &self.entries {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn emits_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subs: Subscribers<u32> = Subscribers::new();

        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            subs.subscribe(move |_| seen.lock().unwrap().push(tag));
        }

        subs.emit(&0);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let seen = Arc::new(Mutex::new(0u32));
        let mut subs: Subscribers<u32> = Subscribers::new();

        let seen2 = Arc::clone(&seen);
        let id = subs.subscribe(move |_| *seen2.lock().unwrap() += 1);

        subs.emit(&0);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.emit(&0);

        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
