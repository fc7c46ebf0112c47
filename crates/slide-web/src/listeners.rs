#![forbid(unsafe_code)]

//! Host listener bookkeeping.
//!
//! Every DOM listener the adapter asks the host to install gets a
//! [`HostListenerId`]. The host keeps the id next to its real callback and
//! removes exactly that callback when the adapter asks for it.

/// Identity of one installed host listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostListenerId(u64);

impl HostListenerId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Element a listener is installed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The carousel wrapper element.
    Wrapper,
    /// The window (resize only).
    Window,
}

/// DOM event a listener is installed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    Resize,
}

impl ListenerKind {
    /// DOM event type name.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Resize => "resize",
        }
    }

    /// Element the listener belongs on.
    #[must_use]
    pub const fn target(self) -> ListenerTarget {
        match self {
            Self::Resize => ListenerTarget::Window,
            _ => ListenerTarget::Wrapper,
        }
    }

    /// Listeners installed for the whole mounted lifetime.
    pub const MOUNTED: [Self; 5] = [
        Self::MouseDown,
        Self::TouchStart,
        Self::MouseUp,
        Self::TouchEnd,
        Self::Resize,
    ];
}

/// Installed listeners, in installation order.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(HostListenerId, ListenerKind)>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Record a new listener and return its id.
    pub fn register(&mut self, kind: ListenerKind) -> HostListenerId {
        self.next_id = self.next_id.saturating_add(1);
        let id = HostListenerId(self.next_id);
        self.entries.push((id, kind));
        id
    }

    /// Forget the listener with `id`. Returns its kind if it was installed.
    pub fn remove(&mut self, id: HostListenerId) -> Option<ListenerKind> {
        let pos = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(pos).1)
    }

    /// Kind of the listener with `id`.
    #[must_use]
    pub fn kind(&self, id: HostListenerId) -> Option<ListenerKind> {
        self.entries
            .iter()
            .find_map(|&(entry, kind)| (entry == id).then_some(kind))
    }

    /// Whether any listener of `kind` is installed.
    #[must_use]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.entries.iter().any(|&(_, k)| k == kind)
    }

    /// Remove every listener, newest first.
    pub fn drain(&mut self) -> Vec<(HostListenerId, ListenerKind)> {
        let mut drained: Vec<_> = self.entries.drain(..).collect();
        drained.reverse();
        drained
    }

    /// Number of installed listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate installed listeners in installation order.
    pub fn iter(&self) -> impl Iterator<Item = (HostListenerId, ListenerKind)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_remove_by_identity() {
        let mut reg = ListenerRegistry::new();
        let a = reg.register(ListenerKind::MouseMove);
        let b = reg.register(ListenerKind::MouseMove);
        assert_ne!(a, b);
        assert_eq!(reg.remove(a), Some(ListenerKind::MouseMove));
        assert_eq!(reg.remove(a), None);
        assert!(reg.is_listening(ListenerKind::MouseMove));
        assert_eq!(reg.kind(b), Some(ListenerKind::MouseMove));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn drain_is_newest_first() {
        let mut reg = ListenerRegistry::new();
        let ids: Vec<_> = ListenerKind::MOUNTED
            .iter()
            .map(|&k| reg.register(k))
            .collect();
        let drained: Vec<_> = reg.drain().into_iter().map(|(id, _)| id).collect();
        let mut expected = ids;
        expected.reverse();
        assert_eq!(drained, expected);
        assert!(reg.is_empty());
    }

    #[test]
    fn names_and_targets() {
        assert_eq!(ListenerKind::TouchMove.event_name(), "touchmove");
        assert_eq!(ListenerKind::Resize.target(), ListenerTarget::Window);
        assert_eq!(ListenerKind::MouseUp.target(), ListenerTarget::Wrapper);
    }
}
