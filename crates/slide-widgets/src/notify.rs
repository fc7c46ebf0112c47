#![forbid(unsafe_code)]

//! Change notification.
//!
//! The engine emits one [`SlideChange`] per successful navigation. Consumers
//! register a callback and receive a [`ListenerId`]; the same id removes the
//! callback again, so a listener's identity is stable for as long as it is
//! registered.

/// Identity of a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Payload of a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Newly active panel.
    pub active: usize,
    /// Panel that was active before, `None` on the first navigation.
    pub previous: Option<usize>,
}

type ChangeCallback = Box<dyn FnMut(&SlideChange)>;

/// Ordered set of change listeners.
#[derive(Default)]
pub(crate) struct ChangeListeners {
    next_id: u64,
    entries: Vec<(ListenerId, ChangeCallback)>,
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ChangeListeners {
    pub(crate) fn subscribe(&mut self, callback: ChangeCallback) -> ListenerId {
        self.next_id = self.next_id.saturating_add(1);
        let id = ListenerId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Invoke every listener in registration order.
    pub(crate) fn emit(&mut self, change: &SlideChange) {
        for (_, callback) in &mut self.entries {
            callback(change);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
