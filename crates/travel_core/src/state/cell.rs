//! Reactive value cell backed by a `tokio::sync::watch` channel.

use tokio::sync::watch;

/// Holds a current value and notifies subscribers when it changes.
///
/// Writes that store an equal value do not notify.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T> StateCell<T>
where
    T: Clone + PartialEq,
{
    pub(crate) fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribes to changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub(crate) fn set(&self, value: T) {
        self.tx.send_if_modified(move |current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
    }
}

impl<T> Default for StateCell<T>
where
    T: Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::StateCell;

    #[test]
    fn set_updates_value_and_notifies_once_per_change() {
        let cell = StateCell::new(false);
        let mut rx = cell.subscribe();
        assert!(!rx.has_changed().expect("sender alive"));

        cell.set(true);
        assert!(rx.has_changed().expect("sender alive"));
        assert!(*rx.borrow_and_update());

        cell.set(true);
        assert!(!rx.has_changed().expect("sender alive"));
        assert!(cell.get());
    }
}
