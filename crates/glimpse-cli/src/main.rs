use anyhow::Result;
use clap::{Parser, Subcommand};
use glimpse_core::Api;
use nu_ansi_term::Color;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

mod repl_helper;
mod sample;

use repl_helper::GlimpseHelper;

/// Glimpse - symbol completion and introspection shell
#[derive(Parser)]
#[command(name = "glimpse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Complete, document, and annotate symbols from a namespace snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print completion candidates for a partial symbol
    Complete {
        /// Partially typed symbol, e.g. "pr" or "itertools."
        text: String,
    },
    /// Print documentation for a fully named symbol
    Docs {
        /// Dotted symbol name
        name: String,
        /// Show the full documentation body, not just the summary
        #[arg(long)]
        full: bool,
    },
    /// Print the kind annotation for a fully named symbol
    Annotate {
        /// Dotted symbol name
        name: String,
    },
}

fn main() -> Result<()> {
    let api = Api::global();
    let (bindings, macros) = sample::namespace();
    api.set_namespace(bindings, macros);

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Complete { text }) => {
            for candidate in api.complete(&text) {
                println!("{}", candidate);
            }
        }
        Some(Commands::Docs { name, full }) => {
            let docs = if full {
                api.full_docs(&name)?
            } else {
                api.docs(&name)?
            };
            println!("{}", docs);
        }
        Some(Commands::Annotate { name }) => {
            println!("{}", api.annotate(&name)?);
        }
        None => repl(api)?,
    }

    Ok(())
}

fn repl(api: &'static Api) -> Result<()> {
    println!("glimpse shell - TAB completes, `sym` inspects, :quit exits");

    let mut editor = Editor::<GlimpseHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(GlimpseHelper::new(api)));

    loop {
        match editor.readline("glimpse> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ":quit" | ":q" => break,
                    _ => {
                        if let Some(name) = line.strip_prefix(":full ") {
                            report(api.full_docs(name.trim()));
                        } else {
                            inspect(api, line);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Annotation plus summary docs for a bare symbol.
fn inspect(api: &Api, name: &str) {
    match api.annotate(name) {
        Ok(annotation) => {
            println!("{}", Color::Cyan.paint(annotation));
            if let Ok(docs) = api.docs(name) {
                println!("{}", docs);
            }
        }
        Err(err) => println!("{}", Color::Red.paint(err.to_string())),
    }
}

fn report(result: Result<String, glimpse_core::ResolveError>) {
    match result {
        Ok(text) => println!("{}", text),
        Err(err) => println!("{}", Color::Red.paint(err.to_string())),
    }
}
