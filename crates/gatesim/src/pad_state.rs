use crate::ids::PadId;
use crate::pad::PadKind;
use crate::value::Value;

/// The per-pad timed state record: a stimulus schedule for an input pad,
/// a recorded waveform for an output pad.
///
/// A PadState carries no visitation guard of its own -- see
/// [`crate::engine`] for the tick/reset traversal that drives it.
#[derive(Debug, Clone)]
pub struct PadState {
    id: String,
    kind: PadKind,
    link: PadId,
    default: Value,
    schedule: Vec<Value>,
}

impl PadState {
    pub(crate) fn new(id: impl Into<String>, kind: PadKind, link: PadId, default: Value) -> Self {
        Self {
            id: id.into(),
            kind,
            link,
            default,
            schedule: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> PadKind {
        self.kind
    }

    pub fn link(&self) -> PadId {
        self.link
    }

    pub fn default(&self) -> Value {
        self.default
    }

    pub fn schedule(&self) -> &[Value] {
        &self.schedule
    }

    fn fill_value(&self) -> Value {
        self.schedule.last().copied().unwrap_or(self.default)
    }

    /// The value this PadState reports at tick `t`: the recorded entry
    /// at `t`, or the last recorded entry held forever if `t` runs past
    /// the end of the schedule (or the default if nothing is recorded
    /// yet). Used both to drive an input pad during simulation and to
    /// render a column of a waveform after a run.
    pub fn value_at(&self, t: usize) -> Value {
        if self.schedule.is_empty() {
            self.default
        } else {
            self.schedule[t.min(self.schedule.len() - 1)]
        }
    }

    /// Records a sampled output value at tick `t`, back-filling any
    /// skipped ticks with the previous tail value (an output PadState
    /// is only ever recorded in increasing tick order, but this stays
    /// correct even if a tick is skipped).
    pub(crate) fn record(&mut self, t: usize, v: Value) {
        if t < self.schedule.len() {
            self.schedule[t] = v;
            return;
        }
        let fill = self.fill_value();
        while self.schedule.len() < t {
            self.schedule.push(fill);
        }
        self.schedule.push(v);
    }

    /// Places `v` at indices `[t, t+rng)`, back-filling any gap before
    /// `t` with the last recorded value (or this PadState's default if
    /// the schedule is still empty). Used by stimulus parsing; `rng`
    /// defaults to 1 there, so a later `INPUT` line for the same pad at
    /// an already-covered time simply overrides forward from that time.
    pub(crate) fn add_state(&mut self, v: Value, t: usize, rng: usize) {
        let rng = rng.max(1);
        let fill = self.fill_value();
        while self.schedule.len() < t {
            self.schedule.push(fill);
        }
        for i in t..t + rng {
            if i < self.schedule.len() {
                self.schedule[i] = v;
            } else {
                self.schedule.push(v);
            }
        }
    }
}
