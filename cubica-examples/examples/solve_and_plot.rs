//! Solves a cubic from the command line and plots it.
//!
//! Usage:
//!
//! ```sh
//! cargo run --example solve_and_plot -- 1 -6 11 -6
//! ```
//!
//! With no arguments it analyzes x³ − 6x² + 11x − 6, which has the
//! three roots 1, 2, and 3.

use std::{env, process::ExitCode};

use cubica_core::Cubic;
use cubica_plot::PlotApp;

const X_RANGE: [f64; 2] = [-10.0, 10.0];
const SAMPLES: usize = 400;

fn main() -> ExitCode {
    let coefficients = match parse_coefficients() {
        Ok(coefficients) => coefficients,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: solve_and_plot [a b c d]");
            return ExitCode::FAILURE;
        }
    };

    let cubic = match Cubic::try_from(coefficients) {
        Ok(cubic) => cubic,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let analysis = cubic.analyze();

    let [a, b, c, d] = coefficients;
    println!("Equation: {a}x³ + {b}x² + {c}x + {d} = 0");
    println!("p:            {}", analysis.p);
    println!("q:            {}", analysis.q);
    println!("Discriminant: {}", analysis.discriminant);

    if analysis.points.is_empty() {
        println!("Not a cubic (a = 0); no roots reported.");
    } else {
        println!("{:>5} {:>8} {:>8}", "Root", "x", "y");
        for (i, point) in analysis.points.iter().enumerate() {
            println!("{:>5} {:>8} {:>8}", i + 1, point.x, point.y);
        }
    }

    let curve = cubic.sample(X_RANGE[0], X_RANGE[1], SAMPLES);
    let markers: Vec<[f64; 2]> = analysis.roots.iter().map(|x| [x, 0.0]).collect();

    let app = PlotApp::new()
        .add_series("curve", &curve)
        .add_markers("roots", &markers);

    if let Err(err) = app.run("Cubica") {
        eprintln!("failed to open plot window: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Reads four coefficients from argv, defaulting to a three-root demo.
fn parse_coefficients() -> Result<[f64; 4], String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Ok([1.0, -6.0, 11.0, -6.0]);
    }

    let values: Vec<f64> = args
        .iter()
        .map(|arg| arg.parse().map_err(|_| format!("not a number: `{arg}`")))
        .collect::<Result<_, _>>()?;

    values
        .try_into()
        .map_err(|_| format!("expected 4 coefficients, got {}", args.len()))
}
