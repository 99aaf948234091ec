use clap::Parser;
use command_core::fuzzy::{CorrectionKind, Normalized};
use command_core::{Command, CommandEngine, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "command_repl")]
#[command(about = "Type an utterance, see the command it resolves to")]
struct Cli {
    /// Lexicon file (.json or .bin); the built-in lexicon is used when absent
    /// or unreadable.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print each command as one line of JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the active lexicon to this path and exit.
    #[arg(long)]
    dump_lexicon: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = match &cli.lexicon {
        Some(path) => CommandEngine::from_file_or_builtin(path)?,
        None => CommandEngine::new()?,
    };

    if let Some(path) = &cli.dump_lexicon {
        command_core::persistence::save_lexicon(engine.lexicon(), path)?;
        println!("Lexicon written to '{}'", path.display());
        return Ok(());
    }

    if !cli.json {
        print_banner()?;
    }

    let mut out = stdout();
    loop {
        if !cli.json {
            print!("{} ", ">".bold());
            out.flush()?;
        }

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let utterance = input.trim();

        match utterance {
            "exit" => break,
            "" => continue,
            ":clear" => print_banner()?,
            raw => {
                let normalized = engine.normalize_traced(raw);
                let command = engine.classifier().classify_utterance(raw, &normalized.text);
                if cli.json {
                    println!("{}", serde_json::to_string(&command)?);
                } else {
                    print_result(&normalized, &command)?;
                }
            }
        }
    }
    Ok(())
}

fn print_banner() -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Uzbek voice command REPL".bold());
    println!("---------------------------------------------------------------");
    println!("Type an utterance and press [Enter]. ':clear' redraws, 'exit' quits.\n");
    Ok(())
}

fn print_result(normalized: &Normalized, command: &Command) -> Result<()> {
    println!("  normalized: {}", normalized.text.clone().cyan());
    for correction in &normalized.corrections {
        let how = match correction.kind {
            CorrectionKind::Known => "known".to_string(),
            CorrectionKind::Fuzzy { distance } => format!("distance {distance}"),
        };
        println!(
            "    {} -> {} ({})",
            correction.original.clone().red(),
            correction.corrected.clone().green(),
            how
        );
    }

    let intent = format!("{}/{}", command.category, command.action);
    if command.is_fallback() {
        println!("  intent: {}", intent.yellow());
    } else {
        println!("  intent: {}", intent.green().bold());
    }
    for (key, value) in &command.params {
        println!("    {key} = {}", serde_json::to_string(value)?);
    }
    println!();
    Ok(())
}
