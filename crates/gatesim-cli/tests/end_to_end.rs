use gatesim::Value;
use gatesim_cli::{parse_netlist, parse_stimulus};

#[test]
fn scenario_1_netlist_and_stimulus_parse_and_run() {
    let netlist = "CIRCUIT c1\nINPUT A a\nNOT 2 a b\nOUTPUT Y b\n";
    let stimulus = "VECTOR v\nINPUT A 0 0\n";

    let mut circuit = parse_netlist(netlist, "c1.txt").unwrap();
    let vector = parse_stimulus(stimulus, &circuit, "c1_v.txt").unwrap();
    circuit.attach_vector(vector).unwrap();

    let horizon = circuit.trace().unwrap();
    assert_eq!(horizon, 3);
    circuit.run(horizon).unwrap();

    let history = circuit
        .vector()
        .unwrap()
        .pad_state("Y")
        .unwrap()
        .schedule()
        .to_vec();
    assert_eq!(history, vec![Value::X, Value::X, Value::High, Value::High]);
}

#[test]
fn ns_suffixed_delay_and_coerced_non_positive_delay_both_parse() {
    let netlist = "CIRCUIT c\nINPUT A a\nNOT 0ns a b\nOUTPUT Y b\n";
    let circuit = parse_netlist(netlist, "c.txt").unwrap();
    let gate = circuit.gate_by_name("NOTab").unwrap();
    assert_eq!(gate.delay(), 1);
}

#[test]
fn unrecognized_gate_token_is_a_parse_error() {
    let netlist = "CIRCUIT c\nINPUT A a\nBOGUS 1 a b\nOUTPUT Y b\n";
    assert!(parse_netlist(netlist, "c.txt").is_err());
}

#[test]
fn stimulus_referencing_unknown_pad_is_rejected() {
    let netlist = "CIRCUIT c\nINPUT A a\nNOT 1 a b\nOUTPUT Y b\n";
    let circuit = parse_netlist(netlist, "c.txt").unwrap();
    let stimulus = "VECTOR v\nINPUT Z 0 1\n";
    assert!(parse_stimulus(stimulus, &circuit, "c_v.txt").is_err());
}

#[test]
fn later_input_line_overrides_forward_from_its_time() {
    let netlist = "CIRCUIT c2\nINPUT A a\nINPUT B b\nAND 1 a b y\nOUTPUT Y y\n";
    let circuit = parse_netlist(netlist, "c2.txt").unwrap();
    let stimulus = "VECTOR v\nINPUT A 0 1\nINPUT B 0 1\nINPUT B 3 0\n";
    let vector = parse_stimulus(stimulus, &circuit, "c2_v.txt").unwrap();
    let b = vector.pad_state("B").unwrap();
    assert_eq!(b.value_at(2), Value::High);
    assert_eq!(b.value_at(3), Value::Low);
    assert_eq!(b.value_at(10), Value::Low);
}
