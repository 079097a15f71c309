//! Index change notifications for dot indicators and analytics.

/// Callback invoked with the new index.
pub type IndexListener = Box<dyn FnMut(usize)>;

/// Fans out index changes to registered listeners, in registration order.
#[derive(Default)]
pub struct IndexChangeNotifier {
    listeners: Vec<IndexListener>,
}

impl std::fmt::Debug for IndexChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl IndexChangeNotifier {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener with `index`.
    pub fn notify(&mut self, index: usize) {
        for listener in &mut self.listeners {
            listener(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_all_listeners_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = IndexChangeNotifier::new();

        let first = calls.clone();
        notifier.subscribe(move |i| first.borrow_mut().push(("dots", i)));
        let second = calls.clone();
        notifier.subscribe(move |i| second.borrow_mut().push(("analytics", i)));

        notifier.notify(3);

        assert_eq!(*calls.borrow(), vec![("dots", 3), ("analytics", 3)]);
    }

    #[test]
    fn test_clear() {
        let mut notifier = IndexChangeNotifier::new();
        notifier.subscribe(|_| {});
        assert_eq!(notifier.len(), 1);

        notifier.clear();
        assert!(notifier.is_empty());
    }
}
