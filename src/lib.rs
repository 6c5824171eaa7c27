// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod parsing {
    pub mod tables;
}
pub mod translation {
    pub mod lexicon;
    pub mod names;
    pub mod pipeline;
    pub mod vocabulary;
}
pub mod engine {
    pub mod host;
    pub mod monitor;
    pub mod walker;
}

pub use engine::host::{Document, ImmediateScheduler, Scheduler, TextNode};
pub use engine::monitor::QUIET_WINDOW;
pub use engine::walker::{PageEngine, BATCH_SIZE};
pub use error::Error;
pub use translation::lexicon::{Lexicon, TermTable};
pub use translation::names::NameTable;
pub use translation::pipeline::Translator;
