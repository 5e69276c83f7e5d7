use clap::Parser;
use pauliop::{PauliSum, PauliTerm};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use svsim::{QuantumSimulator, Simulator, StateVector};
use vqe_runner::{
    report, run_vqe_with, Ansatz, EnergyHistory, OptimizerKind, StatevectorEstimator, VqeConfig,
    VqeResult,
};

/// Ground-state search for a two-qubit H2 Hamiltonian.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum optimizer iterations.
    #[arg(short, long, default_value_t = 200)]
    maxiter: u64,

    /// Hardware-efficient ansatz layers.
    #[arg(short, long, default_value_t = 2)]
    layers: usize,

    /// Use simulated annealing instead of Nelder-Mead.
    #[arg(long)]
    annealing: bool,

    /// Print the ansatz gate listing before the summary.
    #[arg(long)]
    show_circuit: bool,

    /// Write the run (result, history, runtime) as JSON to this file.
    #[arg(short, long)]
    output_file: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    result: &'a VqeResult,
    history: &'a EnergyHistory,
    runtime_seconds: f64,
    /// Statevector prepared by the optimal parameters, when available.
    state: Option<StateVector>,
}

fn h2_hamiltonian() -> Result<PauliSum, pauliop::PauliParseError> {
    Ok(PauliSum::new()
        .with_term(PauliTerm::from_str("-0.8126 * I0")?)
        .with_term(PauliTerm::from_str("0.1712 * Z0")?)
        .with_term(PauliTerm::from_str("-0.2228 * Z1")?)
        .with_term(PauliTerm::from_str("0.1686 * Z0 Z1")?)
        .with_term(PauliTerm::from_str("0.0453 * X0 X1")?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let hamiltonian = h2_hamiltonian()?;
    let ansatz = Ansatz::hardware_efficient(2, cli.layers);

    let mut config = VqeConfig::default().with_maxiter(cli.maxiter);
    if cli.annealing {
        config = config.with_optimizer(OptimizerKind::SimulatedAnnealing { init_temp: 1.0 });
    }

    println!("H2 Hamiltonian:\n{}\n", hamiltonian);

    let mut progress = |count: u64, _params: &[f64], energy: f64| {
        if count % 25 == 0 {
            println!("eval {:>4}  E = {:.8}", count, energy);
        }
    };

    let run = run_vqe_with(
        &ansatz,
        &hamiltonian,
        &config,
        StatevectorEstimator::new(ansatz.num_qubits()),
        Some(&mut progress),
    )?;

    report(
        &run.result,
        &run.history,
        &hamiltonian,
        &ansatz,
        Some(run.runtime),
        cli.show_circuit,
    );

    if let Some(output_path) = cli.output_file {
        let state = match &run.result.optimal_point {
            Some(point) => {
                let circuit = ansatz.bind(point)?;
                let mut sim = QuantumSimulator::new(ansatz.num_qubits());
                sim.apply_circuit(&circuit)?;
                Some(sim.statevector().clone())
            }
            None => None,
        };
        let record = RunRecord {
            result: &run.result,
            history: &run.history,
            runtime_seconds: run.runtime_seconds(),
            state,
        };
        let json_output = serde_json::to_string_pretty(&record)?;
        let file = File::create(output_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_output.as_bytes())?;
    }

    Ok(())
}
