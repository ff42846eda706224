use glam::Vec2;

/// Tracks a single-pointer drag gesture over the pan region.
///
/// `committed` is the baseline accumulated across finished gestures. While a
/// gesture is live the rendered translation is `origin + delta`, where
/// `origin` snapshots the baseline at grant time and `delta` is the
/// cumulative displacement reported by the input layer since the grant
/// (never per-event increments, which would drift).
#[derive(Clone, Copy, Debug, Default)]
pub struct PanTracker {
    committed: Vec2,
    origin: Vec2,
    delta: Vec2,
    dragging: bool,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Grant: snapshot the baseline and start tracking. A second grant while
    /// a gesture is live is ignored (first gesture wins).
    pub fn begin(&mut self) {
        if self.dragging {
            log::debug!("[pan] grant while a gesture is live; ignoring");
            return;
        }
        self.origin = self.committed;
        self.delta = Vec2::ZERO;
        self.dragging = true;
    }

    /// Move: `delta` is cumulative since the grant. A move with no live
    /// gesture is ignored.
    pub fn update(&mut self, delta: Vec2) {
        if !self.dragging {
            log::debug!("[pan] move with no live gesture; ignoring");
            return;
        }
        self.delta = delta;
    }

    /// Release: flatten the in-progress offset into the baseline so the next
    /// gesture composes from the released position.
    pub fn release(&mut self) {
        if !self.dragging {
            return;
        }
        self.committed = self.origin + self.delta;
        self.origin = Vec2::ZERO;
        self.delta = Vec2::ZERO;
        self.dragging = false;
    }

    /// Current translation of the pan region.
    pub fn translation(&self) -> Vec2 {
        if self.dragging {
            self.origin + self.delta
        } else {
            self.committed
        }
    }
}
