//! The re-entrant tick/reset/trace traversal that drives simulation.
//!
//! Kept as free functions over `&mut Circuit` rather than methods on the
//! passive node types themselves: the traversal recurses across node
//! kinds (net -> gate -> net -> pad -> ...) and each step needs to
//! resolve a fresh arena index, which the borrow checker accepts far
//! more readily as "reborrow `circuit` again" than as "hold a `&mut
//! Net` while also reaching into the gate it points at."

use crate::circuit::Circuit;
use crate::error::GateError;
use crate::ids::{GateId, NetId, NodeRef, PadId};
use crate::pad::PadKind;

pub(crate) fn tick_net(circuit: &mut Circuit, net: NetId, t: i64) -> Result<(), GateError> {
    let readers = circuit.net(net).readers().to_vec();
    for reader in readers {
        match reader {
            NodeRef::Gate(gate) => tick_gate(circuit, gate, t)?,
            NodeRef::Pad(pad) => tick_pad(circuit, pad, t)?,
        }
    }
    Ok(())
}

pub(crate) fn reset_net(circuit: &mut Circuit, net: NetId, t: i64) -> Result<(), GateError> {
    let readers = circuit.net(net).readers().to_vec();
    for reader in readers {
        match reader {
            NodeRef::Gate(gate) => reset_gate(circuit, gate, t),
            NodeRef::Pad(pad) => reset_pad(circuit, pad, t)?,
        }
    }
    Ok(())
}

pub(crate) fn trace_net(circuit: &mut Circuit, net: NetId, best: i64) -> Result<i64, GateError> {
    let readers = circuit.net(net).readers().to_vec();
    let mut result = best;
    for reader in readers {
        let through = match reader {
            NodeRef::Gate(gate) => trace_gate(circuit, gate, best)?,
            NodeRef::Pad(pad) => trace_pad(circuit, pad, best)?,
        };
        result = result.max(through);
    }
    Ok(result)
}

pub(crate) fn tick_gate(circuit: &mut Circuit, gate: GateId, t: i64) -> Result<(), GateError> {
    if circuit.gate(gate).ticked {
        return Ok(());
    }
    circuit.gate(gate).validate()?;

    let is_new_tick = circuit.gate(gate).last_ticked().is_none_or(|lt| t > lt);
    let input_values: Vec<_> = circuit
        .gate(gate)
        .inputs()
        .iter()
        .map(|&n| circuit.net(n).current())
        .collect();
    let output_net = circuit
        .gate(gate)
        .output()
        .expect("validated above: output is set");

    let emitted = {
        let g = circuit.gate_mut(gate);
        let emitted = g.step(&input_values, is_new_tick);
        g.observe_tick_time(t);
        emitted
    };

    if let Some(value) = emitted {
        circuit.net_mut(output_net).set_current(value);
    }

    let g = circuit.gate_mut(gate);
    g.ticked = true;
    g.reset_pending = false;

    tick_net(circuit, output_net, t)
}

pub(crate) fn reset_gate(circuit: &mut Circuit, gate: GateId, t: i64) {
    if circuit.gate(gate).reset_pending {
        return;
    }
    let output_net = circuit.gate(gate).output();
    let g = circuit.gate_mut(gate);
    g.reset_pending = true;
    g.ticked = false;
    g.traced = false;
    if let Some(output_net) = output_net {
        let _ = reset_net(circuit, output_net, t);
    }
}

pub(crate) fn trace_gate(circuit: &mut Circuit, gate: GateId, best: i64) -> Result<i64, GateError> {
    if circuit.gate(gate).traced {
        return Ok(best);
    }
    circuit.gate(gate).validate()?;
    circuit.gate_mut(gate).traced = true;
    let delay = i64::from(circuit.gate(gate).delay());
    let output_net = circuit
        .gate(gate)
        .output()
        .expect("validated above: output is set");
    trace_net(circuit, output_net, best + delay)
}

pub(crate) fn tick_pad(circuit: &mut Circuit, pad: PadId, t: i64) -> Result<(), GateError> {
    let kind = circuit.pad(pad).kind();
    if kind == PadKind::In && circuit.pad(pad).ticked {
        return Ok(());
    }
    let net = circuit.pad(pad).net();
    match kind {
        PadKind::In => {
            let value = circuit.pad(pad).current();
            circuit.net_mut(net).set_current(value);
            tick_net(circuit, net, t)?;
            circuit.pad_mut(pad).ticked = true;
        }
        PadKind::Out => {
            let value = circuit.net(net).current();
            circuit.pad_mut(pad).set_current(value);
        }
    }
    Ok(())
}

/// Only input pads forward a reset onward to their net; an output pad is
/// a traversal terminal for reset exactly as it is for tick, otherwise a
/// reset reaching an output pad through its own net's reader list would
/// immediately bounce back into that same net with nothing to stop it.
pub(crate) fn reset_pad(circuit: &mut Circuit, pad: PadId, t: i64) -> Result<(), GateError> {
    let kind = circuit.pad(pad).kind();
    circuit.pad_mut(pad).ticked = false;
    if kind == PadKind::In {
        let net = circuit.pad(pad).net();
        reset_net(circuit, net, t)?;
    }
    Ok(())
}

pub(crate) fn trace_pad(circuit: &mut Circuit, pad: PadId, best: i64) -> Result<i64, GateError> {
    match circuit.pad(pad).kind() {
        PadKind::In => {
            let net = circuit.pad(pad).net();
            trace_net(circuit, net, best)
        }
        PadKind::Out => Ok(best),
    }
}

/// Drives one simulated time unit: for each PadState, in stored order
/// (every input before any output), applies its tick then immediately
/// resets it (section 4.6). The reset is interleaved *per PadState*
/// rather than batched at the end: a gate fed directly by two input pads
/// must see its `ticked` guard cleared after the first pad's tick so the
/// second pad's tick re-enters it as a same-tick re-evaluation (section
/// 4.3) instead of being silently dropped by the guard.
pub(crate) fn tick_vector(circuit: &mut Circuit, t: i64) -> Result<(), GateError> {
    let mut vector = circuit
        .take_vector()
        .ok_or(GateError::NullReference {
            what: "circuit".to_string(),
            reference: "vector",
        })?;

    let tu = usize::try_from(t).unwrap_or(0);
    let result = (|| -> Result<(), GateError> {
        for state in vector.pad_states_mut() {
            let pad = state.link();
            match state.kind() {
                PadKind::In => {
                    let value = state.value_at(tu);
                    circuit.pad_mut(pad).set_current(value);
                    tick_pad(circuit, pad, t)?;
                }
                PadKind::Out => {
                    tick_pad(circuit, pad, t)?;
                    let value = circuit.pad(pad).current();
                    state.record(tu, value);
                }
            }
            reset_pad(circuit, pad, t)?;
        }
        Ok(())
    })();

    circuit.put_vector(vector);
    result
}

/// Computes the simulation horizon: the longest input schedule plus the
/// longest combinational delay path reachable from any PadState. Section
/// 4.6 requires flags to be cleared before tracing *each* PadState so
/// every branch is explored independently; clearing once up front would
/// let an earlier PadState's trace leave gates `traced`, short-circuiting
/// a later PadState's trace to a stale `best` instead of its own path.
pub(crate) fn trace_vector(circuit: &mut Circuit) -> Result<i64, GateError> {
    let mut vector = circuit
        .take_vector()
        .ok_or(GateError::NullReference {
            what: "circuit".to_string(),
            reference: "vector",
        })?;

    let result = (|| -> Result<i64, GateError> {
        let mut best = 0;
        for state in vector.pad_states() {
            let pad = state.link();
            reset_pad(circuit, pad, 0)?;
            best = best.max(trace_pad(circuit, pad, 0)?);
        }
        Ok(i64::try_from(vector.longest_input_schedule()).unwrap_or(i64::MAX) + best)
    })();

    circuit.put_vector(vector);
    result
}
