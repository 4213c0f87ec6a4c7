use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Generation counter that lets a page ignore responses to requests it has
/// already moved past (new route params, unmount).
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTracker {
    pub fn begin(&self) -> RequestTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.get() == ticket.0
    }

    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl PartialEq for RequestTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

#[hook]
pub fn use_request_tracker() -> RequestTracker {
    let tracker = use_state(RequestTracker::default);
    (*tracker).clone()
}
