use clap::Parser as ClapParser;
use gatesim_cli::{CliError, parse_netlist, parse_stimulus, render_timing_diagram};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use tracing::{debug, error, info};

#[derive(ClapParser)]
#[command(name = "gatesim", about = "Discrete-time, three-valued gate-level logic simulator")]
struct Cli {
    /// Circuit netlist file name, without the `.txt` extension.
    #[arg(long)]
    circuit: Option<String>,

    /// Stimulus file name, without the `.txt` extension. Defaults to
    /// `<circuit>_v` when omitted.
    #[arg(long)]
    stimulus: Option<String>,

    /// Suppress the rendered timing diagram.
    #[arg(long)]
    quiet: bool,

    /// Override the traced simulation horizon.
    #[arg(long)]
    horizon: Option<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let circuit_name = match cli.circuit {
        Some(name) => name,
        None => prompt("Circuit file name (without .txt): ").into_diagnostic()?,
    };
    let stimulus_name = match cli.stimulus {
        Some(name) => name,
        None => {
            let typed = prompt(&format!(
                "Stimulus file name (without .txt, default {circuit_name}_v): "
            ))
            .into_diagnostic()?;
            if typed.is_empty() {
                format!("{circuit_name}_v")
            } else {
                typed
            }
        }
    };

    match run(&circuit_name, &stimulus_name, cli.horizon, cli.quiet) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(%e, "run failed");
            println!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(circuit_name: &str, stimulus_name: &str, horizon_override: Option<i64>, quiet: bool) -> Result<(), CliError> {
    let circuit_path = format!("{circuit_name}.txt");
    let stimulus_path = format!("{stimulus_name}.txt");

    info!(path = %circuit_path, "parsing netlist");
    let circuit_text = std::fs::read_to_string(&circuit_path)?;
    let mut circuit = parse_netlist(&circuit_text, &circuit_path)?;
    debug!(out_pads = circuit.out_pads().len(), "netlist parsed");

    info!(path = %stimulus_path, "parsing stimulus");
    let stimulus_text = std::fs::read_to_string(&stimulus_path)?;
    let vector = parse_stimulus(&stimulus_text, &circuit, &stimulus_path)?;
    circuit.attach_vector(vector)?;

    let horizon = match horizon_override {
        Some(h) => h,
        None => circuit.trace()?,
    };
    info!(horizon, "running simulation");
    circuit.run(horizon)?;

    if !quiet {
        let vector = circuit.vector().expect("vector attached above");
        print!("{}", render_timing_diagram(vector, horizon));
    }

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
