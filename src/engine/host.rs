use std::time::Duration;

/// A text-bearing leaf of the host document. The engine never creates or
/// removes nodes, it only rewrites their character content in place.
pub trait TextNode {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// The document-like surface the host must provide.
pub trait Document {
    type Node: TextNode + 'static;

    /// Every text-bearing leaf under the document root, in document order.
    fn text_nodes(&self) -> Vec<Self::Node>;

    /// Runs `callback` once the document is ready for a first pass.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);

    /// Subscribes to structural (child-list) mutations anywhere in the
    /// subtree. The host may invoke the callback any number of times.
    fn on_structural_change(&self, callback: Box<dyn Fn()>);
}

/// Host scheduling primitives. Execution is single-threaded and
/// cooperative; these are the only two ways the engine suspends.
pub trait Scheduler {
    /// Runs `callback` before the host's next paint.
    fn before_next_frame(&self, callback: Box<dyn FnOnce()>);

    /// Runs `callback` once `delay` has elapsed.
    fn after_delay(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Scheduler for hosts without a render loop: every callback runs on the
/// spot, so a whole run completes within one call to `translate_page`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn before_next_frame(&self, callback: Box<dyn FnOnce()>) {
        callback();
    }

    fn after_delay(&self, _delay: Duration, callback: Box<dyn FnOnce()>) {
        callback();
    }
}
