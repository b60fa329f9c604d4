// core/timers.rs
//
// One-shot timers driven by the fixed timestep.
// Timers belong to the EngineContext, so dropping or clearing the context
// cancels everything still pending. Nothing fires against a stale session.
//
// Usage:
//   ctx.timers.schedule(0.5, TIMER_REVEAL, 0);
//   ctx.timers.cancel_all();

/// A scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    /// Seconds left before the timer fires.
    pub remaining: f32,
    /// Game-defined timer kind.
    pub kind: u32,
    /// Game-defined payload.
    pub arg: u32,
}

/// A timer that has fired. Delivered to the game as `InputEvent::Timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub kind: u32,
    pub arg: u32,
}

/// Pending one-shot timers in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Schedule a timer `delay` seconds from now.
    /// A zero delay fires on the next `advance`.
    pub fn schedule(&mut self, delay: f32, kind: u32, arg: u32) {
        self.timers.push(Timer {
            remaining: delay.max(0.0),
            kind,
            arg,
        });
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("timers: cancelling {} pending", self.timers.len());
        }
        self.timers.clear();
    }

    /// Advance all timers by `dt` seconds and return the ones that fired,
    /// ordered by fire time, ties broken by scheduling order.
    pub fn advance(&mut self, dt: f32) -> Vec<FiredTimer> {
        let mut fired: Vec<(f32, usize, FiredTimer)> = Vec::new();
        let mut seq = 0usize;
        self.timers.retain_mut(|t| {
            t.remaining -= dt;
            seq += 1;
            if t.remaining <= 0.0 {
                fired.push((t.remaining, seq, FiredTimer { kind: t.kind, arg: t.arg }));
                false
            } else {
                true
            }
        });
        // Most overdue first.
        fired.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        fired.into_iter().map(|(_, _, f)| f).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
