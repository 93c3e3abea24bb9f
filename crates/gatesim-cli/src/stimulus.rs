use crate::error::CliError;
use gatesim::{Circuit, Value, Vector};

/// Parses the stimulus text format of section 6 against an already-built
/// circuit, returning a [`Vector`] ready to hand to
/// [`Circuit::attach_vector`]. `VECTOR` must appear before any `INPUT`
/// line; a later `INPUT` for the same pad at an already-covered time
/// overrides forward from that time (section 6).
pub fn parse_stimulus(text: &str, circuit: &Circuit, path: &str) -> Result<Vector, CliError> {
    let mut vector = None;

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        let Some(&head) = tokens.first() else {
            continue;
        };

        match head {
            "VECTOR" => {
                let id = tokens.get(1).ok_or_else(|| CliError::Parse {
                    path: path.to_string(),
                    line,
                    message: "VECTOR requires an id".to_string(),
                })?;
                vector = Some(circuit.build_vector(*id));
            }
            "INPUT" => {
                let [_, pad_id, delay_tok, value_tok] = tokens[..] else {
                    return Err(CliError::Parse {
                        path: path.to_string(),
                        line,
                        message: "INPUT requires exactly three fields (pad id, delay, value)"
                            .to_string(),
                    });
                };
                let vector = vector.as_mut().ok_or_else(|| CliError::Parse {
                    path: path.to_string(),
                    line,
                    message: "INPUT appears before VECTOR".to_string(),
                })?;
                let delay = parse_delay(delay_tok, path, line)?;
                let value = Value::parse(value_tok)?;
                vector.schedule_input(pad_id, delay, value)?;
            }
            other => {
                return Err(CliError::Parse {
                    path: path.to_string(),
                    line,
                    message: format!("{other:?} is not a recognized stimulus statement"),
                });
            }
        }
    }

    vector.ok_or_else(|| CliError::Parse {
        path: path.to_string(),
        line: 0,
        message: "stimulus file has no VECTOR statement".to_string(),
    })
}

/// A stimulus delay token is non-negative, optionally `ns`-suffixed; a
/// negative parsed value is coerced to 0 (section 6).
fn parse_delay(token: &str, path: &str, line: usize) -> Result<usize, CliError> {
    let digits = token.strip_suffix("ns").unwrap_or(token);
    let value: i64 = digits.parse().map_err(|_| CliError::Parse {
        path: path.to_string(),
        line,
        message: format!("{token:?} is not a valid delay"),
    })?;
    Ok(usize::try_from(value).unwrap_or(0))
}
