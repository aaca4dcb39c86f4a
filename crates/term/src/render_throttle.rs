/// Skips redraws while the visible state is unchanged.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    forced: bool,
}

impl RenderThrottle {
    pub fn new(idle_refresh_ms: u64) -> Self {
        Self {
            idle_refresh_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            forced: true,
        }
    }

    /// Make the next `should_render` return true (first frame, resize).
    pub fn force(&mut self) {
        self.forced = true;
    }

    /// Decide whether to render a new frame.
    ///
    /// While `animating` (flash or toast timers running) every frame renders.
    /// Otherwise a frame renders when the fingerprint changed, or once per
    /// `idle_refresh_ms` as a safety refresh.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let render = self.forced
            || animating
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.idle_refresh_ms;
        if render {
            self.forced = false;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}
