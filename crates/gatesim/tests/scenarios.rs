use gatesim::{Circuit, GateKind, Value};

fn run_horizon(circuit: &mut Circuit) -> i64 {
    let horizon = circuit.trace().unwrap();
    circuit.run(horizon).unwrap();
    horizon
}

fn output_history(circuit: &Circuit, pad_id: &str) -> Vec<Value> {
    circuit
        .vector()
        .unwrap()
        .pad_state(pad_id)
        .unwrap()
        .schedule()
        .to_vec()
}

#[test]
fn scenario_1_not_with_delay_2() {
    let mut circuit = Circuit::new("c1");
    circuit.add_in_pad("A", "a").unwrap();
    circuit.add_gate(GateKind::Not, "NOTab", 2, &["a"], "b").unwrap();
    circuit.add_out_pad("Y", "b").unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::Low).unwrap();
    circuit.attach_vector(vector).unwrap();

    let horizon = run_horizon(&mut circuit);
    assert_eq!(horizon, 3);
    assert_eq!(
        output_history(&circuit, "Y"),
        vec![Value::X, Value::X, Value::High, Value::High]
    );
}

#[test]
fn scenario_2_two_input_and_delay_1() {
    let mut circuit = Circuit::new("c2");
    circuit.add_in_pad("A", "a").unwrap();
    circuit.add_in_pad("B", "b").unwrap();
    circuit.add_gate(GateKind::And, "ANDaby", 1, &["a", "b"], "y").unwrap();
    circuit.add_out_pad("Y", "y").unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::High).unwrap();
    vector.schedule_input("B", 0, Value::High).unwrap();
    vector.schedule_input("B", 3, Value::Low).unwrap();
    circuit.attach_vector(vector).unwrap();

    let horizon = run_horizon(&mut circuit);
    assert_eq!(horizon, 4);
    assert_eq!(
        output_history(&circuit, "Y"),
        vec![Value::X, Value::High, Value::High, Value::High, Value::Low]
    );
}

#[test]
fn scenario_3_x_propagates_through_and() {
    let mut circuit = Circuit::new("c2");
    circuit.add_in_pad("A", "a").unwrap();
    circuit.add_in_pad("B", "b").unwrap();
    circuit.add_gate(GateKind::And, "ANDaby", 1, &["a", "b"], "y").unwrap();
    circuit.add_out_pad("Y", "y").unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::X).unwrap();
    vector.schedule_input("B", 0, Value::High).unwrap();
    circuit.attach_vector(vector).unwrap();

    run_horizon(&mut circuit);
    let history = output_history(&circuit, "Y");
    for &v in &history[1..] {
        assert_eq!(v, Value::X);
    }
}

#[test]
fn scenario_4_fan_out_diamond_shifts_once_per_tick() {
    let mut circuit = Circuit::new("c4");
    circuit.add_in_pad("A", "a").unwrap();
    circuit.add_gate(GateKind::Not, "NOTab", 1, &["a"], "b").unwrap();
    circuit.add_gate(GateKind::Not, "NOTac", 1, &["a"], "c").unwrap();
    circuit.add_gate(GateKind::And, "ANDbcy", 1, &["b", "c"], "y").unwrap();
    circuit.add_out_pad("Y", "y").unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::High).unwrap();
    circuit.attach_vector(vector).unwrap();

    let horizon = run_horizon(&mut circuit);
    assert_eq!(horizon, 3);
    assert_eq!(
        output_history(&circuit, "Y"),
        vec![Value::X, Value::X, Value::Low, Value::Low]
    );
}

#[test]
fn scenario_5_chain_of_five_nots_has_odd_parity() {
    let mut circuit = Circuit::new("c5");
    let net_ids: Vec<String> = (0..=5).map(|i| format!("n{i}")).collect();
    circuit.add_in_pad("A", &net_ids[0]).unwrap();
    for i in 0..5 {
        circuit
            .add_gate(GateKind::Not, format!("NOT{i}"), 1, &[net_ids[i].as_str()], &net_ids[i + 1])
            .unwrap();
    }
    circuit.add_out_pad("Y", &net_ids[5]).unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::Low).unwrap();
    circuit.attach_vector(vector).unwrap();

    let horizon = run_horizon(&mut circuit);
    assert!(horizon >= 5);
    let history = output_history(&circuit, "Y");
    assert_eq!(history[5], Value::High);
}

#[test]
fn scenario_6_input_holds_last_scheduled_value() {
    let mut circuit = Circuit::new("c6");
    circuit.add_in_pad("A", "a").unwrap();
    circuit.add_gate(GateKind::Not, "NOTab", 1, &["a"], "b").unwrap();
    circuit.add_out_pad("Y", "b").unwrap();

    let mut vector = circuit.build_vector("v");
    vector.schedule_input("A", 0, Value::Low).unwrap();
    circuit.attach_vector(vector).unwrap();

    circuit.run(10).unwrap();
    let history = output_history(&circuit, "Y");
    for &v in &history[1..] {
        assert_eq!(v, Value::High);
    }
}
