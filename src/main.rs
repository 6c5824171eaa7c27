use std::cell::RefCell;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use tracing::error;

use pagelex::engine::host::{Document, ImmediateScheduler, TextNode};
use pagelex::parsing::tables::{load_mapping_set, MappingSet};
use pagelex::{config, Lexicon, NameTable, PageEngine, Translator};

/// Rewrites source-language terms and names in a text file using the
/// configured mapping tables, one line per text node.
#[derive(Parser, Debug)]
#[command(name = "pagelex", version)]
struct Cli {
    /// TOML config naming the mapping-table directory.
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Input text file; reads stdin when omitted.
    input: Option<PathBuf>,
}

/// In-memory stand-in for the host document: each line is one text node.
#[derive(Clone)]
struct LineDocument {
    lines: Rc<RefCell<Vec<String>>>,
}

#[derive(Clone)]
struct LineNode {
    lines: Rc<RefCell<Vec<String>>>,
    index: usize,
}

impl TextNode for LineNode {
    fn text(&self) -> String {
        self.lines.borrow()[self.index].clone()
    }

    fn set_text(&self, text: &str) {
        self.lines.borrow_mut()[self.index] = text.to_string();
    }
}

impl Document for LineDocument {
    type Node = LineNode;

    fn text_nodes(&self) -> Vec<LineNode> {
        (0..self.lines.borrow().len())
            .map(|index| LineNode {
                lines: Rc::clone(&self.lines),
                index,
            })
            .collect()
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        // A fully-loaded text file is ready as soon as it is in memory.
        callback();
    }

    fn on_structural_change(&self, _callback: Box<dyn Fn()>) {
        // Static input, no mutations to report.
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config_from_file(&cli.config)?;
    let MappingSet {
        vocabulary,
        students,
        events,
        clubs,
        schools,
    } = load_mapping_set(&config)?;

    let lexicon = Lexicon::merge([vocabulary, events, clubs, schools]);
    let names = NameTable::new(students);
    let translator = Translator::new(&lexicon, &names)?;

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let document = LineDocument {
        lines: Rc::new(RefCell::new(text.lines().map(str::to_string).collect())),
    };

    let engine = PageEngine::new(translator, document.clone(), ImmediateScheduler);
    engine.start();
    // One more kick right after the tables load; the run guard makes any
    // overlap with the ready-event pass harmless.
    engine.translate_page();

    for line in document.lines.borrow().iter() {
        println!("{line}");
    }
    Ok(())
}
