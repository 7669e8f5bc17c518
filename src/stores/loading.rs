use std::cell::Cell;
use std::rc::Rc;

use crate::state::Subscribers;

/// Marca una operación en curso mientras vive. Al soltarse (éxito, error o
/// early return) el contador baja siempre.
///
/// Los subscribers se notifican cuando `is_loading` cambia: al empezar la
/// primera operación y al terminar la última.
pub struct LoadingGuard {
    in_flight: Rc<Cell<usize>>,
    subscribers: Subscribers,
}

impl LoadingGuard {
    pub fn raise(in_flight: &Rc<Cell<usize>>, subscribers: &Subscribers) -> Self {
        let previous = in_flight.get();
        in_flight.set(previous + 1);
        if previous == 0 {
            subscribers.notify();
        }
        Self {
            in_flight: in_flight.clone(),
            subscribers: subscribers.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.subscribers.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> (Subscribers, Rc<Cell<usize>>) {
        let subscribers = Subscribers::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        subscribers.subscribe(move || hits_clone.set(hits_clone.get() + 1));
        (subscribers, hits)
    }

    #[test]
    fn nested_guards_clear_on_drop() {
        let (subscribers, _) = counting();
        let counter = Rc::new(Cell::new(0));
        {
            let _a = LoadingGuard::raise(&counter, &subscribers);
            {
                let _b = LoadingGuard::raise(&counter, &subscribers);
                assert_eq!(counter.get(), 2);
            }
            assert_eq!(counter.get(), 1);
        }
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn notifies_only_when_loading_flips() {
        let (subscribers, hits) = counting();
        let counter = Rc::new(Cell::new(0));

        let a = LoadingGuard::raise(&counter, &subscribers);
        assert_eq!(hits.get(), 1);

        let b = LoadingGuard::raise(&counter, &subscribers);
        drop(b);
        assert_eq!(hits.get(), 1);

        drop(a);
        assert_eq!(hits.get(), 2);
    }
}
