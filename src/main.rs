use std::io::Write;

use log::{debug, error, info};
use mini_expr::{evaluate, format_tokens, parse, tokenize, write_tree, Error};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> DynResult {
    // .env may carry RUST_LOG, so it is loaded before the logger exists
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let args = std::env::args().collect::<Vec<String>>();
    debug!("{:?}", args);

    match args.get(1).map(String::as_str) {
        None => read_one_line(),
        Some("-i") => repl(),
        Some("-e") => {
            let input = args.get(2).ok_or("must provide an expression after -e")?;
            run_line(input);
            Ok(())
        }
        Some("-f") => read_from_file(args.get(2).ok_or("must provide file name after -f")?),
        Some(mode) => Err(format!("unknown mode `{}`, expect one of -i, -e, -f", mode).into()),
    }
}

fn read_one_line() -> DynResult {
    print!("Expression: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    run_line(line.trim_end_matches(['\r', '\n']));
    Ok(())
}

fn repl() -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                run_line(line.trim_end());
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;
    run_line(contents.trim());
    Ok(())
}

// Failures are shown to the user and end this line only.
fn run_line(input: &str) {
    debug!("{:?}", input);
    if let Err(err) = run_stages(input) {
        debug!("{:?}", err);
        println!("{}", err);
    }
}

fn run_stages(input: &str) -> Result<(), Error> {
    let tokens = tokenize(input)?;
    println!("=== Lexical Analysis ===");
    println!("{}", format_tokens(&tokens));

    let expr = parse(&tokens)?;
    println!("Parse result: success");

    println!("=== Syntax Tree ===");
    let mut stdout = std::io::stdout();
    if let Err(e) = write_tree(&expr, &mut stdout) {
        error!("Writing syntax tree failed with error: {}", e);
    }

    let value = evaluate(&expr)?;
    println!("Result: {}", value);

    Ok(())
}
