//! geoddar command line front end

use clap::{Parser, ValueEnum};
use geoddar_core::{parse_problem, DdarSolver, Error, SolverConfig, TheoremMatcher};
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run DD+AR saturation.
    Ddar,
    /// Only match theorems and print them.
    Match,
}

#[derive(Parser)]
#[command(name = "geoddar")]
#[command(about = "DD+AR solver for plane geometry problems")]
struct Args {
    /// Input problem files; standard input when omitted.
    input: Vec<String>,

    /// Operation mode.
    #[arg(long, value_enum, default_value_t = Mode::Ddar)]
    mode: Mode,

    /// Exit with a nonzero code if the goals stay unproved.
    #[arg(long)]
    err_on_failure: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    use_json: bool,

    /// Disable the additive length engine.
    #[arg(long)]
    disable_ar_dist: bool,

    /// Disable the additive squared-length engine.
    #[arg(long)]
    disable_ar_squared: bool,

    /// Enable sine-based theorems (off by default).
    #[arg(long)]
    enable_ar_sin: bool,

    /// Disable theorems with raw equations as hypotheses or conclusions.
    #[arg(long)]
    disable_eqn_statements: bool,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Saturation level cap.
    #[arg(long, default_value_t = 500)]
    max_levels: usize,
}

fn solver_config(args: &Args) -> SolverConfig {
    SolverConfig {
        ar_dist_enabled: !args.disable_ar_dist,
        ar_squared_enabled: !args.disable_ar_squared,
        ar_sin_enabled: args.enable_ar_sin,
        eqn_statements_enabled: !args.disable_eqn_statements,
    }
}

/// Exit code 2 marks "ran fine, goals unproved" under `--err-on-failure`.
fn run_input(args: &Args, input: &str) -> Result<u8, Error> {
    let prob = parse_problem(input)?;
    let config = solver_config(args);
    match args.mode {
        Mode::Match => {
            let theorems = TheoremMatcher::run(&prob, &config);
            tracing::info!("matched {} theorems", theorems.len());
            if args.use_json {
                let vals: Vec<serde_json::Value> = theorems
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "name": t.name(),
                            "newclid_rule": t.rule_id(),
                            "hypotheses": t.hypotheses().iter()
                                .map(|p| p.to_json(&prob)).collect::<Vec<_>>(),
                            "conclusions": t.conclusions().iter()
                                .map(|p| p.to_json(&prob)).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(vals));
            } else {
                for thm in &theorems {
                    let hyps: Vec<String> =
                        thm.hypotheses().iter().map(|p| p.print(&prob)).collect();
                    let concls: Vec<String> =
                        thm.conclusions().iter().map(|p| p.print(&prob)).collect();
                    println!(
                        "{} ⊢[{}] {}",
                        hyps.join(", "),
                        thm.rule_id(),
                        concls.join(", ")
                    );
                }
            }
            Ok(0)
        }
        Mode::Ddar => {
            let mut solver = DdarSolver::new(&prob, config)?;
            tracing::info!("matched {} theorems", solver.num_theorems());
            let solved = solver.run(args.max_levels)?;
            if args.use_json {
                println!("{}", solver.proof_json());
            } else {
                print!("{}", solver.proof_text());
            }
            if !solved {
                tracing::info!("failed to solve the problem");
                if args.err_on_failure {
                    return Ok(2);
                }
            }
            Ok(0)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let inputs: Vec<(String, String)> = if args.input.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("error reading stdin: {e}");
            return ExitCode::FAILURE;
        }
        vec![("<stdin>".to_string(), buf)]
    } else {
        let mut collected = Vec::new();
        for path in &args.input {
            match std::fs::read_to_string(path) {
                Ok(content) => collected.push((path.clone(), content)),
                Err(e) => {
                    eprintln!("error reading {path}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        collected
    };

    for (path, content) in inputs {
        tracing::info!("solving {path}");
        match run_input(&args, &content) {
            Ok(0) => {}
            Ok(code) => return ExitCode::from(code),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
