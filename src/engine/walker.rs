use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::host::{Document, Scheduler, TextNode};
use super::monitor;
use crate::translation::pipeline::Translator;

/// Nodes rewritten per batch before yielding back to the host.
pub const BATCH_SIZE: usize = 50;

/// Drives the translator across a whole document: enumerates text nodes,
/// rewrites them in batches without blocking the host, and re-runs after
/// structural mutations.
pub struct PageEngine<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    shared: Rc<EngineShared<D, S>>,
}

pub(crate) struct EngineShared<D, S> {
    pub(crate) translator: Translator,
    pub(crate) document: D,
    pub(crate) scheduler: S,
    pub(crate) translating: Cell<bool>,
    pub(crate) retrigger_pending: Cell<bool>,
}

impl<D, S> PageEngine<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    pub fn new(translator: Translator, document: D, scheduler: S) -> Self {
        PageEngine {
            shared: Rc::new(EngineShared {
                translator,
                document,
                scheduler,
                translating: Cell::new(false),
                retrigger_pending: Cell::new(false),
            }),
        }
    }

    /// Defers the first pass to the document-ready event and installs the
    /// structural-change subscription.
    pub fn start(&self) {
        let ready = Rc::clone(&self.shared);
        self.shared
            .document
            .on_ready(Box::new(move || translate_page(&ready)));
        monitor::watch(&self.shared);
    }

    /// Translates every text node currently in the document. Silent no-op
    /// while a prior run is still in flight.
    pub fn translate_page(&self) {
        translate_page(&self.shared);
    }

    /// True between the start of a document-wide run and the completion of
    /// its last batch.
    pub fn is_translating(&self) -> bool {
        self.shared.translating.get()
    }
}

pub(crate) fn translate_page<D, S>(shared: &Rc<EngineShared<D, S>>)
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    if shared.translating.get() {
        return;
    }
    shared.translating.set(true);

    // The target set is fixed at enumeration time. Nodes added afterwards
    // are covered by the run that follows the mutation which added them.
    let nodes = shared.document.text_nodes();
    debug!(nodes = nodes.len(), "starting page translation");
    process_batch(Rc::clone(shared), nodes, 0);
}

fn process_batch<D, S>(shared: Rc<EngineShared<D, S>>, nodes: Vec<D::Node>, start: usize)
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    let end = nodes.len().min(start + BATCH_SIZE);
    for node in &nodes[start..end] {
        node.set_text(&shared.translator.translate(&node.text()));
    }

    if end < nodes.len() {
        let next = Rc::clone(&shared);
        shared
            .scheduler
            .before_next_frame(Box::new(move || process_batch(next, nodes, end)));
    } else {
        debug!("page translation finished");
        shared.translating.set(false);
    }
}
