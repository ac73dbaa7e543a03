//! Lifecycle hook registry.
//!
//! Four events fire during playback. Each has an optional base hook returning
//! an [`Outcome`]; `Suppress` skips the bound listeners for that firing.
//! Listeners bind/unbind independently via monotonic [`ListenerId`]s.

use std::fmt;

use crate::data::Keyframe;

/// Return value of a base hook. `Suppress` keeps bound listeners from seeing
/// this firing; the playback itself is unaffected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Suppress,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    AnimationBegin,
    AnimationEnd,
    KeyframeBegin,
    KeyframeEnd,
}

impl EventKind {
    fn slot(self) -> usize {
        match self {
            EventKind::AnimationBegin => 0,
            EventKind::AnimationEnd => 1,
            EventKind::KeyframeBegin => 2,
            EventKind::KeyframeEnd => 3,
        }
    }
}

/// One lifecycle notification. Keyframe events borrow the frame being
/// entered or left.
#[derive(Debug)]
pub enum AnimEvent<'a> {
    AnimationBegin,
    AnimationEnd,
    KeyframeBegin { index: usize, frame: &'a Keyframe },
    KeyframeEnd { index: usize, frame: &'a Keyframe },
}

impl AnimEvent<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            AnimEvent::AnimationBegin => EventKind::AnimationBegin,
            AnimEvent::AnimationEnd => EventKind::AnimationEnd,
            AnimEvent::KeyframeBegin { .. } => EventKind::KeyframeBegin,
            AnimEvent::KeyframeEnd { .. } => EventKind::KeyframeEnd,
        }
    }
}

pub type BaseHook = Box<dyn FnMut(&AnimEvent) -> Outcome>;
pub type Listener = Box<dyn FnMut(&AnimEvent)>;

/// Handle for unbinding a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

#[derive(Default)]
struct HookSlot {
    base: Option<BaseHook>,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Registry of the four lifecycle events.
#[derive(Default)]
pub struct Hooks {
    next_listener: u32,
    slots: [HookSlot; 4],
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the base hook for `kind`.
    pub fn set_base(&mut self, kind: EventKind, hook: BaseHook) {
        self.slots[kind.slot()].base = Some(hook);
    }

    pub fn clear_base(&mut self, kind: EventKind) {
        self.slots[kind.slot()].base = None;
    }

    /// Bind a listener; the returned id unbinds it later.
    pub fn bind(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.slots[kind.slot()].listeners.push((id, listener));
        id
    }

    /// Remove a previously bound listener; `false` when the id is unknown.
    pub fn unbind(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let listeners = &mut self.slots[kind.slot()].listeners;
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn fire(&mut self, event: &AnimEvent) {
        let slot = &mut self.slots[event.kind().slot()];
        if let Some(base) = slot.base.as_mut() {
            if base(event) == Outcome::Suppress {
                return;
            }
        }
        for (_, listener) in slot.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<usize> = self.slots.iter().map(|s| s.listeners.len()).collect();
        f.debug_struct("Hooks")
            .field("listener_counts", &counts)
            .finish()
    }
}
