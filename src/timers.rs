//! Deferred one-shot events
//!
//! Delays are measured in accumulated frame time. Due entries are handed back
//! to the main loop, which dispatches them through the same path as input.

/// Identifies what a deferred event is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTag {
    /// Mission finished; move on to the break flow
    MissionCompleteBreak,
}

#[derive(Debug, Clone)]
struct Pending {
    tag: TimerTag,
    due_at: f64,
}

/// Queue of one-shot timers
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: f64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `tag` once after `delay` seconds
    pub fn schedule(&mut self, tag: TimerTag, delay: f32) {
        let due_at = self.now + delay.max(0.0) as f64;
        log::debug!("Scheduled {:?} in {:.2}s", tag, delay);
        self.pending.push(Pending { tag, due_at });
    }

    /// Advance the clock and return every tag that came due, in due order
    pub fn advance(&mut self, dt: f32) -> Vec<TimerTag> {
        self.now += dt.max(0.0) as f64;
        let now = self.now;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_at <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));
        due.into_iter().map(|p| p.tag).collect()
    }

    pub fn is_pending(&self, tag: TimerTag) -> bool {
        self.pending.iter().any(|p| p.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop everything still pending (process shutdown)
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
