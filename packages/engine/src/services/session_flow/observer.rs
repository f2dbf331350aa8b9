//! Change notifications for the UI layer.
//!
//! Observers are called synchronously, after a mutation has been applied, in
//! subscription order. They receive transitions by reference and cannot reach
//! back into the session.

use crate::domain::transition::SessionTransition;

/// Receives session transitions.
pub trait SessionObserver: Send {
    fn on_transition(&mut self, transition: &SessionTransition);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionTransition) + Send,
{
    fn on_transition(&mut self, transition: &SessionTransition) {
        self(transition)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(super) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
}

impl ObserverRegistry {
    pub(super) fn subscribe(&mut self, observer: Box<dyn SessionObserver>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(super) fn dispatch(&mut self, transitions: &[SessionTransition]) {
        for transition in transitions {
            for (_, observer) in self.observers.iter_mut() {
                observer.on_transition(transition);
            }
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
