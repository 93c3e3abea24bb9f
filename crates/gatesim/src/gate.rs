use crate::error::GateError;
use crate::ids::NetId;
use crate::value::Value;
use std::collections::VecDeque;

/// One of the seven supported primitive gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    Not,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateKind {
    /// Minimum number of input nets this kind requires before it can be
    /// evaluated. `NOT` is unary; every other kind is at least binary.
    pub fn min_inputs(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    /// The exact arity this kind is pinned to, if any. `NOT` must have
    /// exactly one input; the remaining kinds fold left-associatively
    /// over however many inputs (>= 2) are wired, so they have no fixed
    /// upper bound.
    pub fn exact_arity(self) -> Option<usize> {
        match self {
            GateKind::Not => Some(1),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GateKind::Not => "NOT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
        }
    }

    /// Evaluates this gate's ternary operator over its current input
    /// readings. Multi-input gates fold left-associatively; the caller
    /// is responsible for having already checked arity (see
    /// [`crate::engine`]).
    pub(crate) fn eval(self, inputs: &[Value]) -> Value {
        match self {
            GateKind::Not => inputs[0].not(),
            GateKind::And => inputs[1..].iter().fold(inputs[0], |acc, &v| acc.and(v)),
            GateKind::Or => inputs[1..].iter().fold(inputs[0], |acc, &v| acc.or(v)),
            GateKind::Nand => {
                inputs[1..].iter().fold(inputs[0], |acc, &v| acc.and(v)).not()
            }
            GateKind::Nor => inputs[1..].iter().fold(inputs[0], |acc, &v| acc.or(v)).not(),
            GateKind::Xor => inputs[1..].iter().fold(inputs[0], |acc, &v| acc.xor(v)),
            GateKind::Xnor => {
                inputs[1..].iter().fold(inputs[0], |acc, &v| acc.xor(v)).not()
            }
        }
    }
}

/// A delay-pipelined combinational gate.
///
/// The pipeline is a FIFO of length `delay`: index 0 (the front) is the
/// *tail*, the value due to be written out next; the back is the *head*,
/// the most recently computed value. See [`crate::engine`] for the
/// tick/reset/trace traversal that drives this state machine.
#[derive(Debug, Clone)]
pub struct Gate {
    id: String,
    kind: GateKind,
    delay: u32,
    pipeline: VecDeque<Value>,
    inputs: Vec<NetId>,
    output: Option<NetId>,
    last_ticked: Option<i64>,
    pub(crate) ticked: bool,
    pub(crate) reset_pending: bool,
    pub(crate) traced: bool,
}

impl Gate {
    pub(crate) fn new(
        id: impl Into<String>,
        kind: GateKind,
        delay: u32,
        inputs: Vec<NetId>,
        output: Option<NetId>,
    ) -> Self {
        let delay = delay.max(1);
        Self {
            id: id.into(),
            kind,
            delay,
            pipeline: std::iter::repeat_n(Value::X, delay as usize).collect(),
            inputs,
            output,
            last_ticked: None,
            ticked: false,
            reset_pending: false,
            traced: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn inputs(&self) -> &[NetId] {
        &self.inputs
    }

    pub fn output(&self) -> Option<NetId> {
        self.output
    }

    pub(crate) fn last_ticked(&self) -> Option<i64> {
        self.last_ticked
    }

    pub(crate) fn observe_tick_time(&mut self, t: i64) {
        self.last_ticked = Some(self.last_ticked.map_or(t, |lt| lt.max(t)));
    }

    /// Raises the deferred-to-first-evaluation structural errors of
    /// section 4.3: an unset output, or too few inputs for this gate's
    /// kind. `NOT`'s exact-arity violation is instead caught eagerly at
    /// construction time (see `Circuit::add_gate`), since it is a basic
    /// shape error rather than "incremental wiring not finished yet".
    pub(crate) fn validate(&self) -> Result<(), GateError> {
        if self.output.is_none() {
            return Err(GateError::NoOutput(self.id.clone()));
        }
        if self.inputs.len() < self.kind.min_inputs() {
            return Err(GateError::NoInputs(self.id.clone()));
        }
        Ok(())
    }

    /// Runs this gate's ternary operator over `input_values` and folds
    /// the result into the delay pipeline, returning the value that
    /// should be written to the output net on this call (`None` means
    /// "leave the output net alone" -- the same-tick re-evaluation case).
    ///
    /// `is_new_tick` distinguishes a first evaluation at a strictly later
    /// time than `last_ticked` (shift the pipeline, emit the old tail)
    /// from a same-or-earlier-time re-evaluation (replace the head in
    /// place, emit nothing new). See section 4.3's open question on
    /// ordering: the tail is always the value observed *before* this
    /// tick's shift.
    pub(crate) fn step(&mut self, input_values: &[Value], is_new_tick: bool) -> Option<Value> {
        let computed = self.kind.eval(input_values);
        if is_new_tick {
            let tail = self
                .pipeline
                .pop_front()
                .expect("pipeline is never empty: delay >= 1 is enforced at construction");
            self.pipeline.push_back(computed);
            Some(tail)
        } else {
            if let Some(head) = self.pipeline.back_mut() {
                *head = computed;
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(kind: GateKind, delay: u32, n_inputs: usize) -> Gate {
        let inputs = (0..n_inputs).map(NetId).collect();
        Gate::new("g", kind, delay, inputs, Some(NetId(100)))
    }

    #[test]
    fn validate_rejects_missing_output() {
        let g = Gate::new("g", GateKind::And, 1, vec![NetId(0), NetId(1)], None);
        assert!(matches!(g.validate(), Err(GateError::NoOutput(_))));
    }

    #[test]
    fn validate_rejects_too_few_inputs_for_binary_kinds() {
        let g = gate(GateKind::And, 1, 1);
        assert!(matches!(g.validate(), Err(GateError::NoInputs(_))));
    }

    #[test]
    fn validate_accepts_not_with_one_input() {
        let g = gate(GateKind::Not, 1, 1);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn delay_zero_is_coerced_to_one_pipeline_slot() {
        let g = gate(GateKind::Not, 0, 1);
        assert_eq!(g.delay(), 1);
        assert_eq!(g.pipeline.len(), 1);
    }

    #[test]
    fn new_tick_shifts_and_emits_old_tail() {
        let mut g = gate(GateKind::Not, 2, 1);
        // pipeline starts [X, X]
        let out0 = g.step(&[Value::Low], true);
        assert_eq!(out0, Some(Value::X));
        assert_eq!(g.pipeline, VecDeque::from([Value::X, Value::High]));

        let out1 = g.step(&[Value::Low], true);
        assert_eq!(out1, Some(Value::X));
        assert_eq!(g.pipeline, VecDeque::from([Value::High, Value::High]));

        let out2 = g.step(&[Value::Low], true);
        assert_eq!(out2, Some(Value::High));
    }

    #[test]
    fn same_tick_reevaluation_replaces_head_without_shifting() {
        let mut g = gate(GateKind::And, 1, 2);
        let first = g.step(&[Value::High, Value::X], true);
        assert_eq!(first, Some(Value::X)); // initial pipeline default
        assert_eq!(g.pipeline, VecDeque::from([Value::X]));

        // A second evaluation at the same logical tick, now that the
        // second input net has settled, must not shift the pipeline and
        // must not produce a new output value.
        let second = g.step(&[Value::High, Value::Low], false);
        assert_eq!(second, None);
        assert_eq!(g.pipeline, VecDeque::from([Value::Low]));
    }
}
