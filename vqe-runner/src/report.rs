use crate::ansatz::Ansatz;
use crate::history::EnergyHistory;
use crate::runner::VqeResult;
use nalgebra::DMatrix;
use num_complex::Complex;
use pauliop::PauliSum;
use std::time::Duration;

const CHART_ROWS: usize = 16;
const CHART_COLS: usize = 60;
const Y_PAD: f64 = 0.1;

/// Exact ground-state energy: the smallest eigenvalue of the dense
/// Hamiltonian matrix, via Hermitian eigendecomposition.
pub fn exact_ground_energy(hamiltonian: &PauliSum) -> f64 {
    let matrix: DMatrix<Complex<f64>> = hamiltonian.matrix();
    let eigen = matrix.symmetric_eigen();
    eigen
        .eigenvalues
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
}

/// Terminal chart of energy against evaluation count, with a horizontal
/// reference line at the exact ground-state energy. The x-axis spans
/// [0, max evaluation count] (1 when the history is empty); the y-axis is
/// padded 0.1 below the lowest of (energies, exact) and 0.1 above the
/// highest energy (the exact energy when the history is empty).
pub fn render_convergence(history: &EnergyHistory, exact_energy: f64) -> String {
    let x_max = history.max_eval_count().unwrap_or(1).max(1);
    let y_low = history
        .min_energy()
        .map_or(exact_energy, |e| e.min(exact_energy))
        - Y_PAD;
    let y_high = history.max_energy().unwrap_or(exact_energy) + Y_PAD;
    let span = y_high - y_low;

    let row_of = |energy: f64| -> Option<usize> {
        if energy < y_low || energy > y_high {
            return None;
        }
        let r = ((y_high - energy) / span * (CHART_ROWS - 1) as f64).round() as usize;
        Some(r.min(CHART_ROWS - 1))
    };

    let mut grid = vec![vec![' '; CHART_COLS]; CHART_ROWS];
    if let Some(r) = row_of(exact_energy) {
        for cell in &mut grid[r] {
            *cell = '-';
        }
    }
    for &(count, energy) in history.samples() {
        let col = ((count as f64 / x_max as f64) * (CHART_COLS - 1) as f64).round() as usize;
        if let Some(r) = row_of(energy) {
            grid[r][col.min(CHART_COLS - 1)] = 'o';
        }
    }

    let mut out = String::new();
    out.push_str("VQE Energy Convergence\n");
    out.push_str("  o VQE energy    ---- exact ground state\n");
    out.push_str("    Energy\n");
    for (r, row) in grid.iter().enumerate() {
        let y_value = y_high - span * r as f64 / (CHART_ROWS - 1) as f64;
        if r % 4 == 0 || r == CHART_ROWS - 1 {
            out.push_str(&format!("{:>10.3} |", y_value));
        } else {
            out.push_str("           |");
        }
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str("           +");
    out.push_str(&"-".repeat(CHART_COLS));
    out.push('\n');
    out.push_str(&format!("           0{:>width$}\n", x_max, width = CHART_COLS - 1));
    out.push_str(&format!("{:^width$}\n", "Iteration", width = CHART_COLS + 12));
    out
}

/// Fixed-order textual summary of one run.
pub fn render_summary(
    result: &VqeResult,
    history: &EnergyHistory,
    hamiltonian: &PauliSum,
    ansatz: &Ansatz,
    exact_energy: f64,
    runtime: Option<Duration>,
) -> String {
    let mut out = String::new();
    out.push_str("Final result\n");
    out.push_str("-------------------------------------------\n");
    out.push_str(&format!("E_answer   : {:.10}\n", exact_energy));
    out.push_str(&format!("E_min      : {:.10}\n", result.eigenvalue));
    out.push_str(&format!(
        "Error      : {:.10}\n",
        result.eigenvalue - exact_energy
    ));
    match &result.optimal_point {
        Some(point) => {
            let rounded: Vec<String> = point.iter().map(|x| format!("{:.2}", x)).collect();
            out.push_str(&format!("Optimal parameters  : [{}]\n", rounded.join(", ")));
        }
        None => out.push_str("Optimal parameters  : (not available)\n"),
    }
    out.push_str(&format!("n_qubits: {}\n", hamiltonian.num_qubits()));
    out.push_str(&format!("n_params: {}\n", ansatz.num_parameters()));
    out.push_str(&format!("depth   : {}\n", ansatz.depth()));
    if let Some(runtime) = runtime {
        out.push_str(&format!("VQE runtime: {:.2} seconds\n", runtime.as_secs_f64()));
    }
    out.push_str(&format!("Iteration steps: {}\n", history.len()));
    out.push_str(&format!(
        "Number of entangling gates: {}\n",
        ansatz.multi_qubit_ops()
    ));
    out.push_str("-------------------------------------------\n");
    out
}

/// Renders the convergence chart and the summary to stdout. When
/// `show_circuit` is set, the ansatz gate listing is printed first.
pub fn report(
    result: &VqeResult,
    history: &EnergyHistory,
    hamiltonian: &PauliSum,
    ansatz: &Ansatz,
    runtime: Option<Duration>,
    show_circuit: bool,
) {
    let exact_energy = exact_ground_energy(hamiltonian);
    if show_circuit {
        println!("{}", ansatz);
    }
    println!("{}", render_convergence(history, exact_energy));
    println!(
        "{}",
        render_summary(result, history, hamiltonian, ansatz, exact_energy, runtime)
    );
}
