use gatesim::Vector;
use std::fmt::Write as _;

/// Renders every PadState of `vector` over ticks `0..=horizon` as an
/// ASCII waveform: a ruling line of tick indices, then one row per
/// PadState (inputs first, then outputs, per the Vector's stored order)
/// with a `0`/`1`/`X` glyph per column.
pub fn render_timing_diagram(vector: &Vector, horizon: i64) -> String {
    let horizon = horizon.max(0) as usize;
    let label_width = vector
        .pad_states()
        .iter()
        .map(|s| s.id().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:>width$}  ", "t", width = label_width);
    for t in 0..=horizon {
        let _ = write!(out, "{:>2}", t % 100);
    }
    out.push('\n');

    for state in vector.pad_states() {
        let _ = write!(out, "{:>width$}  ", state.id(), width = label_width);
        for t in 0..=horizon {
            let _ = write!(out, " {}", state.value_at(t));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatesim::{Circuit, GateKind};

    fn scenario_1() -> (Circuit, i64) {
        let mut circuit = Circuit::new("c1");
        circuit.add_in_pad("A", "a").unwrap();
        circuit
            .add_gate(GateKind::Not, "NOTab", 2, &["a"], "b")
            .unwrap();
        circuit.add_out_pad("Y", "b").unwrap();

        let mut vector = circuit.build_vector("v");
        vector.schedule_input("A", 0, gatesim::Value::Low).unwrap();
        circuit.attach_vector(vector).unwrap();

        let horizon = circuit.trace().unwrap();
        circuit.run(horizon).unwrap();
        (circuit, horizon)
    }

    #[test]
    fn renders_one_row_per_pad_state_with_a_ruling_line() {
        let (circuit, horizon) = scenario_1();
        let vector = circuit.vector().unwrap();
        let diagram = render_timing_diagram(vector, horizon);
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 3); // ruling line + PadState A + PadState Y
        assert!(lines[0].contains('0'));
        assert!(lines.last().unwrap().trim_end().ends_with('1'));
    }

    #[test]
    fn matches_exact_layout_for_a_delayed_not() {
        let (circuit, horizon) = scenario_1();
        let vector = circuit.vector().unwrap();
        let diagram = render_timing_diagram(vector, horizon);
        insta::assert_snapshot!(diagram, @r###"
        t   0 1 2 3
        A   0 0 0 0
        Y   X X 1 1
        "###);
    }
}
