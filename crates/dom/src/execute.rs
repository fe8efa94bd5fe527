//! Ordered activation of neutralized scripts.
//!
//! Each queued script is replaced by a fresh copy (same namespace,
//! attributes and text), which the host starts on insertion. Inline copies
//! run during the swap, so the next item follows immediately. External
//! copies suspend the queue until their resource settles; a failed load
//! resumes it just like a successful one.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::error::DomError;
use crate::host::{script_src, LiveTree, LoadOutcome};

struct Pending<T: LiveTree> {
    queue: VecDeque<T::Node>,
    on_done: Box<dyn FnOnce(&mut T)>,
}

/// Activate `queue` front to back, then call `on_done` exactly once.
///
/// Item `n + 1` is not touched before item `n` has been swapped in and, if
/// it is external, before its load has settled. Scripts that are no longer
/// attached, sit outside the rendered document (template content), or that
/// the host refuses to swap, are skipped with a warning.
pub fn execute_scripts<T, F>(tree: &mut T, queue: VecDeque<T::Node>, on_done: F)
where
    T: LiveTree + 'static,
    F: FnOnce(&mut T) + 'static,
{
    run(
        tree,
        Pending {
            queue,
            on_done: Box::new(on_done),
        },
    );
}

fn run<T: LiveTree + 'static>(tree: &mut T, mut pending: Pending<T>) {
    while let Some(script) = pending.queue.pop_front() {
        let Some(parent) = tree.parent(script) else {
            warn!("skipping detached script {script:?}");
            continue;
        };
        if !tree.is_connected(parent) {
            warn!("skipping disconnected script {script:?}");
            continue;
        }
        let fresh = match replicate(tree, script) {
            Ok(fresh) => fresh,
            Err(err) => {
                warn!("skipping script {script:?}: {err}");
                continue;
            }
        };

        if script_src(tree, fresh).is_none() {
            trace!("activating inline {script:?} as {fresh:?}");
            if let Err(err) = swap(tree, parent, script, fresh) {
                warn!("skipping script {script:?}: {err}");
            }
            continue;
        }

        trace!("activating external {script:?} as {fresh:?}");
        let slot = Rc::new(Cell::new(Some(pending)));
        let resume = Rc::clone(&slot);
        tree.on_settled(
            fresh,
            Box::new(move |tree: &mut T, outcome: LoadOutcome| {
                debug!("script {fresh:?} settled: {outcome:?}");
                if let Some(pending) = resume.take() {
                    run(tree, pending);
                }
            }),
        );
        match swap(tree, parent, script, fresh) {
            Ok(()) => return,
            Err(err) => {
                warn!("skipping script {script:?}: {err}");
                match slot.take() {
                    Some(taken) => pending = taken,
                    None => return,
                }
            }
        }
    }
    (pending.on_done)(tree);
}

/// A detached copy of `script` with the same namespace, attributes and text.
fn replicate<T: LiveTree>(tree: &mut T, script: T::Node) -> Result<T::Node, DomError> {
    let namespace = tree.namespace(script).map(str::to_owned);
    let fresh = tree.create_element_ns(namespace.as_deref(), "script");
    for (name, value) in tree.attributes(script) {
        tree.set_attribute(fresh, &name, &value)?;
    }
    let text = tree.text_content(script);
    tree.set_text_content(fresh, &text)?;
    Ok(fresh)
}

fn swap<T: LiveTree>(
    tree: &mut T,
    parent: T::Node,
    script: T::Node,
    fresh: T::Node,
) -> Result<(), DomError> {
    tree.insert_before(parent, fresh, Some(script))?;
    tree.remove_child(parent, script)
}
