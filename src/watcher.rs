/// One-shot detection of the freshly rendered toolbar
///
/// The host page re-renders its toolbar freely. We inject exactly once per
/// page load: the first time an added element coincides with the toolbar
/// container holding its unaugmented number of children.

/// What the DOM side sees when it re-queries the toolbar selector after an
/// element was added somewhere in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub child_count: u32,
    /// The container already holds our injected wrapper
    pub has_marker: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Watching,
    Injected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep observing
    Ignore,
    /// Inject into the container, then stop observing
    Inject,
}

#[derive(Debug)]
pub struct ToolbarWatcher {
    fingerprint: u32,
    state: WatchState,
}

impl ToolbarWatcher {
    pub fn new(fingerprint: u32) -> Self {
        ToolbarWatcher {
            fingerprint,
            state: WatchState::Watching,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Feed one added element node. `candidate` is `None` when the toolbar
    /// selector matched nothing.
    pub fn on_element_added(&mut self, candidate: Option<Candidate>) -> Transition {
        if self.state == WatchState::Injected {
            return Transition::Ignore;
        }

        match candidate {
            Some(c) if !c.has_marker && c.child_count == self.fingerprint => {
                self.state = WatchState::Injected;
                Transition::Inject
            }
            _ => Transition::Ignore,
        }
    }
}
