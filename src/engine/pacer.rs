use std::time::{Duration, Instant};

/// A machine that paces itself.
///
/// After each committed transition the machine reports how long until its
/// next tick is due. `None` means the machine has halted and must never be
/// ticked again.
pub trait Paced: Clone {
    /// Apply a single tick transition.
    fn step(self) -> Self;

    /// Delay until the next tick, or `None` once halted.
    fn next_delay(&self) -> Option<Duration>;
}

/// Drives one machine against real (or manual) time.
///
/// `poll` commits at most one transition per due tick, strictly in order:
/// a tick is only scheduled after the previous one has committed, so
/// catching up after a stall replays every missed tick rather than
/// skipping ahead.
#[derive(Debug, Clone)]
pub struct Pacer<M: Paced> {
    machine: M,
    due: Option<Instant>,
}

impl<M: Paced> Pacer<M> {
    pub fn new(machine: M, now: Instant) -> Self {
        let due = schedule(&machine, now);
        Self { machine, due }
    }

    /// Commit every tick due at `now`. Returns how many were applied.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut applied = 0;
        while let Some(due) = self.due {
            if now < due {
                break;
            }
            self.machine = self.machine.clone().step();
            applied += 1;
            // Reschedule from the previous deadline, not from `now`, so
            // cadence does not drift under load.
            self.due = schedule(&self.machine, due);
        }
        applied
    }

    /// Apply an out-of-band transition and reschedule from `now`.
    pub fn apply(&mut self, now: Instant, f: impl FnOnce(M) -> M) {
        self.machine = f(self.machine.clone());
        self.due = schedule(&self.machine, now);
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn is_halted(&self) -> bool {
        self.due.is_none()
    }
}

fn schedule<M: Paced>(machine: &M, base: Instant) -> Option<Instant> {
    match machine.next_delay() {
        Some(delay) if delay.is_zero() => {
            // A zero cadence would pin the loop. Machines validate their
            // intervals at construction; this is the last line.
            tracing::warn!("machine reported a zero cadence, halting its pacer");
            None
        }
        Some(delay) => Some(base + delay),
        None => None,
    }
}
