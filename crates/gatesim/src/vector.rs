use crate::error::GateError;
use crate::pad::PadKind;
use crate::pad_state::PadState;
use crate::value::Value;
use crate::HashMap;

/// The set of PadStates for one stimulus run.
///
/// Ordering is an observable contract: all input PadStates precede all
/// output PadStates, each group in the order they were added. Rendering
/// and the tick traversal in [`crate::engine`] both depend on this order.
#[derive(Debug, Clone)]
pub struct Vector {
    id: String,
    pad_states: Vec<PadState>,
    index_by_id: HashMap<String, usize>,
}

impl Vector {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pad_states: Vec::new(),
            index_by_id: HashMap::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends a PadState, preserving the inputs-then-outputs contract:
    /// an output PadState may not be added before all inputs that
    /// precede it in insertion order... in practice the builder always
    /// adds every input PadState before any output one, so this simply
    /// pushes to the back.
    pub(crate) fn push(&mut self, state: PadState) {
        self.index_by_id.insert(state.id().to_string(), self.pad_states.len());
        self.pad_states.push(state);
    }

    pub fn pad_states(&self) -> &[PadState] {
        &self.pad_states
    }

    pub(crate) fn pad_states_mut(&mut self) -> &mut [PadState] {
        &mut self.pad_states
    }

    pub fn inputs(&self) -> impl Iterator<Item = &PadState> {
        self.pad_states.iter().filter(|s| s.kind() == PadKind::In)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &PadState> {
        self.pad_states.iter().filter(|s| s.kind() == PadKind::Out)
    }

    pub fn pad_state(&self, id: &str) -> Option<&PadState> {
        self.index_by_id.get(id).map(|&i| &self.pad_states[i])
    }

    pub(crate) fn pad_state_mut(&mut self, id: &str) -> Result<&mut PadState, GateError> {
        let idx = *self
            .index_by_id
            .get(id)
            .ok_or_else(|| GateError::ElementNotFound {
                kind: "pad-state",
                id: id.to_string(),
            })?;
        Ok(&mut self.pad_states[idx])
    }

    /// The stimulus term of `trace()`'s horizon computation (section
    /// 4.6): the longest last-written schedule index across input
    /// PadStates, floored at 1 for any non-empty schedule. The floor
    /// matters for a schedule holding a single value from t=0 onward
    /// (last index 0) -- it still takes one simulated tick for that
    /// value to be observed downstream, so it must contribute 1, not 0,
    /// to the horizon. A PadState never written at all contributes 0.
    pub(crate) fn longest_input_schedule(&self) -> usize {
        self.inputs()
            .map(|s| s.schedule().len())
            .filter(|&len| len > 0)
            .map(|len| len.saturating_sub(1).max(1))
            .max()
            .unwrap_or(0)
    }

    /// Schedules `value` on the named input pad from tick `t` onward,
    /// used by stimulus parsing. Errors if `pad_id` isn't a PadState of
    /// this vector, or names an output pad rather than an input one.
    pub fn schedule_input(&mut self, pad_id: &str, t: usize, value: Value) -> Result<(), GateError> {
        let state = self.pad_state_mut(pad_id)?;
        if state.kind() != PadKind::In {
            return Err(GateError::SchemaMismatch {
                pad: pad_id.to_string(),
            });
        }
        state.add_state(value, t, 1);
        Ok(())
    }
}
