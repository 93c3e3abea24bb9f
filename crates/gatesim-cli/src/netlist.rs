use crate::error::CliError;
use gatesim::{Circuit, GateKind};

fn gate_kind(token: &str) -> Option<GateKind> {
    match token {
        "NOT" | "INV" | "INVERTER" => Some(GateKind::Not),
        "AND" => Some(GateKind::And),
        "OR" => Some(GateKind::Or),
        "NAND" => Some(GateKind::Nand),
        "NOR" => Some(GateKind::Nor),
        "XOR" => Some(GateKind::Xor),
        "XNOR" => Some(GateKind::Xnor),
        _ => None,
    }
}

/// A delay token is a positive integer optionally suffixed with `ns`; a
/// parsed value `<= 0` is coerced to 1 rather than rejected (section 6).
fn parse_delay(token: &str, path: &str, line: usize) -> Result<u32, CliError> {
    let digits = token.strip_suffix("ns").unwrap_or(token);
    let value: i64 = digits.parse().map_err(|_| CliError::Parse {
        path: path.to_string(),
        line,
        message: format!("{token:?} is not a valid delay"),
    })?;
    Ok(if value <= 0 { 1 } else { value as u32 })
}

/// Parses the netlist text format of section 6 into a constructed
/// [`Circuit`]. Net ids are resolved lazily on first reference, so
/// statement order only matters insofar as `CIRCUIT` should come first
/// and a gate/pad line must name nets that exist or will be auto-created.
pub fn parse_netlist(text: &str, path: &str) -> Result<Circuit, CliError> {
    let circuit_id = text.lines().find_map(|l| {
        let tokens: Vec<&str> = l.split_whitespace().collect();
        (tokens.first() == Some(&"CIRCUIT"))
            .then(|| tokens.get(1).map(|s| s.to_string()))
            .flatten()
    });
    let mut circuit = Circuit::new(circuit_id.unwrap_or_else(|| "circuit".to_string()));

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        let Some(&head) = tokens.first() else {
            continue;
        };

        match head {
            "CIRCUIT" => {
                if tokens.len() < 2 {
                    return Err(CliError::Parse {
                        path: path.to_string(),
                        line,
                        message: "CIRCUIT requires an id".to_string(),
                    });
                }
            }
            "INPUT" => {
                let (pad_id, net_id) = two_fields(&tokens, "INPUT", path, line)?;
                circuit.add_in_pad(pad_id, net_id)?;
            }
            "OUTPUT" => {
                let (pad_id, net_id) = two_fields(&tokens, "OUTPUT", path, line)?;
                circuit.add_out_pad(pad_id, net_id)?;
            }
            gate_token => {
                let Some(kind) = gate_kind(gate_token) else {
                    return Err(CliError::Parse {
                        path: path.to_string(),
                        line,
                        message: format!("{gate_token:?} is not a recognized statement or gate kind"),
                    });
                };
                let rest = &tokens[1..];
                let expected = if kind.exact_arity() == Some(1) { 3 } else { 4 };
                if rest.len() != expected {
                    return Err(CliError::Parse {
                        path: path.to_string(),
                        line,
                        message: format!(
                            "{gate_token} expects {} net arguments plus a delay, got {}",
                            expected - 1,
                            rest.len().saturating_sub(1)
                        ),
                    });
                }
                let delay = parse_delay(rest[0], path, line)?;
                let inputs = &rest[1..rest.len() - 1];
                let output = rest[rest.len() - 1];
                let gate_id = format!("{gate_token}{}{output}", inputs.concat());
                circuit.add_gate(kind, gate_id, delay, inputs, output)?;
            }
        }
    }

    Ok(circuit)
}

fn two_fields<'a>(
    tokens: &[&'a str],
    what: &str,
    path: &str,
    line: usize,
) -> Result<(&'a str, &'a str), CliError> {
    match tokens {
        [_, pad, net] => Ok((pad, net)),
        _ => Err(CliError::Parse {
            path: path.to_string(),
            line,
            message: format!("{what} requires exactly two fields (pad id, net id)"),
        }),
    }
}
