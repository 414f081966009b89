//! Cancellable timers.
//!
//! Every delay and interval on the page goes through a [`Scheduler`] owned by
//! the component that needs it. Dropping a timer handle clears the browser
//! timer, so dropping the scheduler (component teardown) or replacing a slot
//! (a newer trigger superseding an older one) cancels the pending work.
//!
//! DESIGN
//! ======
//! [`Registry`] is the handle bookkeeping and is generic so it can be tested
//! without a browser. Timer callbacks hold only a [`WeakScheduler`] to avoid
//! keeping their own registry alive.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Named task slot. Scheduling into an occupied slot cancels the occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    ResizeDebounce,
    MessageHide,
    FocusClose,
}

/// Live timer handles keyed by id and optional slot.
#[derive(Debug)]
pub struct Registry<H> {
    next_id: u64,
    tasks: HashMap<TaskId, H>,
    slots: HashMap<Slot, TaskId>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self { next_id: 0, tasks: HashMap::new(), slots: HashMap::new() }
    }
}

impl<H> Registry<H> {
    /// Reserve the id for a task about to be created.
    pub fn reserve(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    pub fn insert(&mut self, id: TaskId, handle: H) {
        self.tasks.insert(id, handle);
    }

    /// Put `id` into `slot`, returning the superseded task's handle.
    pub fn insert_slot(&mut self, slot: Slot, id: TaskId, handle: H) -> Option<H> {
        let previous = self.slots.insert(slot, id).and_then(|old| self.tasks.remove(&old));
        self.tasks.insert(id, handle);
        previous
    }

    /// Forget `id`, freeing its slot only if it still holds `id`.
    pub fn remove(&mut self, id: TaskId) -> Option<H> {
        self.slots.retain(|_, v| *v != id);
        self.tasks.remove(&id)
    }

    pub fn drain(&mut self) -> Vec<H> {
        self.slots.clear();
        self.tasks.drain().map(|(_, h)| h).collect()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Scheduler, WeakScheduler};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::{Interval, Timeout};

    use super::{Registry, Slot, TaskId};

    enum TaskHandle {
        Timeout(Timeout),
        Interval(Interval),
    }

    impl TaskHandle {
        fn cancel(self) {
            match self {
                Self::Timeout(timeout) => {
                    let _ = timeout.cancel();
                }
                Self::Interval(interval) => {
                    let _ = interval.cancel();
                }
            }
        }
    }

    /// Per-component timer registry.
    #[derive(Clone, Default)]
    pub struct Scheduler {
        registry: Rc<RefCell<Registry<TaskHandle>>>,
    }

    /// Non-owning handle for use inside timer callbacks.
    #[derive(Clone)]
    pub struct WeakScheduler {
        registry: Weak<RefCell<Registry<TaskHandle>>>,
    }

    impl Scheduler {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn downgrade(&self) -> WeakScheduler {
            WeakScheduler { registry: Rc::downgrade(&self.registry) }
        }

        /// A one-shot timer that removes its own handle once it has run.
        fn once(&self, ms: u32, f: impl FnOnce() + 'static) -> (TaskId, TaskHandle) {
            let id = self.registry.borrow_mut().reserve();
            let weak = self.downgrade();
            let timeout = Timeout::new(ms, move || {
                f();
                // The handle owns this callback; release it after it returns.
                leptos::task::spawn_local(async move {
                    weak.cancel(id);
                });
            });
            (id, TaskHandle::Timeout(timeout))
        }

        /// Run `f` once after `ms` milliseconds.
        pub fn after(&self, ms: u32, f: impl FnOnce() + 'static) -> TaskId {
            let (id, handle) = self.once(ms, f);
            self.registry.borrow_mut().insert(id, handle);
            id
        }

        /// Run `f` once after `ms` milliseconds, cancelling whatever `slot` held.
        pub fn after_in(&self, slot: Slot, ms: u32, f: impl FnOnce() + 'static) -> TaskId {
            let (id, handle) = self.once(ms, f);
            let previous = self.registry.borrow_mut().insert_slot(slot, id, handle);
            if let Some(previous) = previous {
                previous.cancel();
            }
            id
        }

        /// Run `f` every `ms` milliseconds until it returns `false`.
        pub fn every(&self, ms: u32, mut f: impl FnMut() -> bool + 'static) -> TaskId {
            let id = self.registry.borrow_mut().reserve();
            let weak = self.downgrade();
            let interval = Interval::new(ms, move || {
                if !f() {
                    // Drop the interval outside of its own callback.
                    let weak = weak.clone();
                    leptos::task::spawn_local(async move {
                        weak.cancel(id);
                    });
                }
            });
            self.registry.borrow_mut().insert(id, TaskHandle::Interval(interval));
            id
        }

        pub fn cancel_all(&self) {
            let handles = self.registry.borrow_mut().drain();
            handles.into_iter().for_each(TaskHandle::cancel);
        }
    }

    impl WeakScheduler {
        pub fn cancel(&self, id: TaskId) {
            if let Some(registry) = self.registry.upgrade() {
                let handle = registry.borrow_mut().remove(id);
                if let Some(handle) = handle {
                    handle.cancel();
                }
            }
        }
    }
}
