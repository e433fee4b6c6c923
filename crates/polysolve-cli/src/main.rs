//! PolySolve - polynomial equation solver
//!
//! Reads a single-variable polynomial equation, reduces it to canonical
//! `P(X) = 0` form and solves it when the degree is 0, 1 or 2, reporting
//! real or complex roots.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::io;

use polysolve_solver::Solution;

#[derive(Parser)]
#[command(
    name = "polysolve",
    version = env!("CARGO_PKG_VERSION"),
    about = "Polynomial equation solver for degrees up to 2",
    long_about = r#"
PolySolve reduces a single-variable polynomial equation to its canonical
form and solves it when the degree is 0, 1 or 2, reporting real or complex
roots, or that the equation is trivial or impossible.

Terms are written `<coefficient> * X^<exponent>`; the variable and the
exponent may be left implicit, so `4`, `4 * X` and `X^2` are all terms.

Examples:
  polysolve "5 * X^0 + 4 * X^1 = 4 * X^0"
  polysolve "1 * X^2 - 4 * X^0 = 0" --verbose
  echo "X^2 + 1 = 0" | polysolve
  polysolve                                # prompt for an equation
"#
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, env = "POLYSOLVE_DEBUG", value_parser = parse_bool_env)]
    debug: bool,

    /// Print the token stream before solving
    #[arg(long)]
    emit_tokens: bool,

    /// Print the solution as JSON instead of the standard report
    #[arg(long)]
    json: bool,

    /// Also print the discriminant value when there is one
    #[arg(short, long)]
    verbose: bool,

    /// Equation to solve (read from standard input when omitted)
    equation: Option<String>,
}

fn parse_bool_env(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let line = match &cli.equation {
        Some(equation) => equation.clone(),
        None => read_equation()?,
    };

    run(&cli, line.trim())
}

/// One equation per invocation: taken from the argument when given,
/// otherwise from piped stdin, otherwise from a single interactive prompt.
fn read_equation() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        use rustyline::error::ReadlineError;
        use rustyline::DefaultEditor;

        let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
        match rl.readline("Enter your equation: ") {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => std::process::exit(0),
            Err(err) => Err(err).context("failed to read the equation"),
        }
    } else {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("failed to read piped input")?;
        Ok(line)
    }
}

fn run(cli: &Cli, line: &str) -> Result<()> {
    if cli.emit_tokens {
        for token in polysolve_lexer::tokenize_detailed(line) {
            println!(
                "{:>3}..{:<3} {:?} '{}'",
                token.start, token.end, token.token, token.lexeme
            );
        }
    }

    let equation = polysolve_parser::parse(line)?;
    debug!(
        "parsed {} term(s), degree {}: {}",
        equation.terms.len(),
        equation.degree,
        equation
    );

    let solution = polysolve_solver::solve(&equation);

    if cli.json {
        let rendered = serde_json::to_string_pretty(&solution)
            .context("failed to serialize the solution")?;
        println!("{rendered}");
        return Ok(());
    }

    print_solution(&solution, cli.verbose);
    Ok(())
}

fn print_solution(solution: &Solution, verbose: bool) {
    println!("Reduced form: {}", solution.reduced_form);
    println!("Polynomial degree: {}", solution.degree);

    if verbose {
        if let Some(discriminant) = solution.outcome.discriminant() {
            println!(
                "Discriminant: {}",
                polysolve_parser::format_number(discriminant)
            );
        }
    }

    if let Some(message) = solution.outcome.message() {
        println!("{message}");
    }

    let roots = solution.outcome.roots();
    if roots.len() == 1 {
        println!("The solution is:");
    }
    for root in roots {
        println!("{root}");
    }
}
