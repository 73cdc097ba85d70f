use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use proplog::{Environment, EvalOutcome, LogicError};

mod assignments;

/// Evaluate a propositional-logic expression.
///
/// Connectives: ¬ (not), ∧ (and), ∨ (or), → (implies). Variables are single
/// letters or digits. Without --set or --env-json, values are read from
/// stdin as `name value` pairs, e.g. `a 1 b 0`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The expression, e.g. "a ∧ (b → ¬c)". Read from stdin when omitted.
    expression: Option<String>,

    /// Assign a variable, e.g. `--set a=1`. May be repeated.
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = assignments::parse_assignment)]
    assignments: Vec<(char, bool)>,

    /// Assign variables from a JSON object, e.g. '{"a": true}'.
    #[arg(long, value_name = "JSON")]
    env_json: Option<String>,

    /// Print the parsed tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

/// Exit code for a rejected expression.
const EXIT_EXPRESSION: u8 = 1;
/// Exit code for unusable input (unreadable stdin, bad assignments).
const EXIT_INPUT: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(EXIT_INPUT)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();

    let expression = match &cli.expression {
        Some(expression) => expression.clone(),
        None => {
            prompt(interactive, "expression: ");
            read_expression(&mut input)?
        }
    };

    // Reject a broken expression before asking for any values.
    let tree = match proplog::parse(&expression) {
        Ok(tree) => tree,
        Err(error) => return Ok(report_failure(cli, &expression, error)),
    };
    debug!("tree: {tree}");

    let env = collect_environment(cli, &mut input, interactive)?;
    let outcome = proplog::evaluate_tree(&tree, &env);

    if cli.json {
        println!("{}", outcome.to_json_pretty());
    } else {
        if cli.tree {
            println!("tree: {tree}");
        }
        match (&outcome.value, &outcome.error) {
            (Some(value), _) => println!("{value}"),
            (None, Some(error)) => eprintln!("{}", error.render(&expression)),
            (None, None) => {}
        }
    }

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_EXPRESSION)
    })
}

fn report_failure(cli: &Cli, expression: &str, error: LogicError) -> ExitCode {
    if cli.json {
        println!("{}", EvalOutcome::from_error(error).to_json_pretty());
    } else {
        eprintln!("{}", error.render(expression));
    }
    ExitCode::from(EXIT_EXPRESSION)
}

fn prompt(interactive: bool, text: &str) {
    if interactive {
        eprint!("{text}");
        let _ = io::stderr().flush();
    }
}

fn read_expression(input: &mut impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("failed to read expression: {e}"))?;
    if read == 0 {
        return Err("no expression given".to_string());
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Build the environment from `--env-json`, then `--set`, falling back to
/// `name value` pairs on stdin when neither was given.
fn collect_environment(
    cli: &Cli,
    input: &mut impl Read,
    interactive: bool,
) -> Result<Environment, String> {
    let mut env = Environment::new();
    if let Some(json) = &cli.env_json {
        let parsed: Environment =
            serde_json::from_str(json).map_err(|e| format!("invalid --env-json: {e}"))?;
        env.extend(parsed);
    }
    env.extend(cli.assignments.iter().copied());

    if cli.env_json.is_none() && cli.assignments.is_empty() {
        prompt(interactive, "values (name value ..., end with Ctrl-D):\n");
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .map_err(|e| format!("failed to read values: {e}"))?;
        env.extend(assignments::read_pairs(&text).map_err(|e| e.to_string())?);
    }
    debug!("{} binding(s)", env.len());
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("proplog").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_cli_collects_repeated_assignments() {
        let cli = cli(&["a ∧ b", "--set", "a=1", "-s", "b=false", "--tree"]);
        assert_eq!(cli.expression.as_deref(), Some("a ∧ b"));
        assert_eq!(cli.assignments, vec![('a', true), ('b', false)]);
        assert!(cli.tree);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_rejects_bad_assignment() {
        let result = Cli::try_parse_from(["proplog", "a", "--set", "a=maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_expression_strips_line_ending() {
        let mut input = io::Cursor::new("a ∧ b\r\nrest");
        assert_eq!(read_expression(&mut input).unwrap(), "a ∧ b");
        let mut empty = io::Cursor::new("");
        assert!(read_expression(&mut empty).is_err());
    }

    #[test]
    fn test_environment_from_stdin_pairs() {
        let cli = cli(&["a"]);
        let mut input = io::Cursor::new("a 1\nb 0\n");
        let env = collect_environment(&cli, &mut input, false).unwrap();
        assert_eq!(env.get('a'), Some(true));
        assert_eq!(env.get('b'), Some(false));
    }

    #[test]
    fn test_flags_override_json_and_skip_stdin() {
        let cli = cli(&["a", "--env-json", r#"{"a": false, "c": true}"#, "--set", "a=1"]);
        let mut input = io::Cursor::new("garbage that is never read");
        let env = collect_environment(&cli, &mut input, false).unwrap();
        assert_eq!(env.get('a'), Some(true));
        assert_eq!(env.get('c'), Some(true));
    }

    #[test]
    fn test_invalid_env_json() {
        let cli = cli(&["a", "--env-json", "[1, 2]"]);
        let mut input = io::Cursor::new("");
        let err = collect_environment(&cli, &mut input, false).unwrap_err();
        assert!(err.starts_with("invalid --env-json"), "got: {err}");
    }
}
