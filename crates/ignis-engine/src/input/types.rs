/// Events the frame loop reacts to.
///
/// Only a quit request changes program state; everything else is drained and
/// dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlatformEvent {
    /// The user or the system asked the application to close.
    Quit,

    /// Any event this program does not handle.
    Ignored,
}

/// Events drained from the platform queue during one frame, in arrival order.
#[derive(Debug, Default)]
pub struct EventBatch {
    events: Vec<PlatformEvent>,
}

impl EventBatch {
    pub fn push(&mut self, ev: PlatformEvent) {
        self.events.push(ev);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&PlatformEvent::Quit)
    }
}

impl Extend<PlatformEvent> for EventBatch {
    fn extend<I: IntoIterator<Item = PlatformEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
