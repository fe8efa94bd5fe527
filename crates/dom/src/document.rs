//! In-memory live tree.
//!
//! An arena of nodes addressed by [`NodeId`] that behaves like a browser
//! document where it matters here: a script element that becomes connected
//! is started right away (inline text runs, a `src` starts a fetch), and a
//! started script never runs again. Runs are recorded in an activation log
//! and fetches stay pending until the embedder settles them with
//! [`Document::finish_load`] or [`Document::drain_loads`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace};
use webstrates_util::strings::escape;

use crate::error::DomError;
use crate::host::{is_script, script_src, LiveTree, LoadOutcome, SettleHandler, HTML_NAMESPACE};
use crate::insert::{INERT_BODY, INERT_SRC};

/// Arena index of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A script run observed by the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Inline source text executed.
    Inline { node: NodeId, text: String },
    /// External resource fetched and executed.
    External { node: NodeId, src: String },
}

impl Activation {
    /// Whether this run only executed the insertion placeholder.
    pub fn is_inert(&self) -> bool {
        match self {
            Activation::Inline { text, .. } => text == INERT_BODY,
            Activation::External { src, .. } => src == INERT_SRC,
        }
    }
}

enum NodeKind {
    Document,
    Fragment,
    Element {
        name: String,
        namespace: Option<String>,
        attributes: IndexMap<String, String>,
        content: Option<NodeId>,
    },
    Text(String),
}

struct NodeRecord {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeRecord {
    fn allows_children(&self) -> bool {
        !matches!(self.kind, NodeKind::Text(_))
    }
}

pub struct Document {
    nodes: Vec<NodeRecord>,
    root: NodeId,
    started: HashSet<NodeId>,
    activations: Vec<Activation>,
    pending_loads: VecDeque<(NodeId, String)>,
    settle_handlers: HashMap<NodeId, Vec<SettleHandler<Document>>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
            started: HashSet::new(),
            activations: Vec::new(),
            pending_loads: VecDeque::new(),
            settle_handlers: HashMap::new(),
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached HTML element.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.create_element_ns(Some(HTML_NAMESPACE), name)
    }

    /// Append `child` to `parent` the way a plain host insertion would,
    /// starting any script that becomes connected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Whether the script `node` has been started.
    pub fn is_started(&self, node: NodeId) -> bool {
        self.started.contains(&node)
    }

    /// Every script run so far, in order.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    /// Runs that executed real content (placeholders filtered out).
    pub fn effective_activations(&self) -> Vec<&Activation> {
        self.activations.iter().filter(|a| !a.is_inert()).collect()
    }

    /// Fetches started but not yet settled, oldest first.
    pub fn pending_loads(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.pending_loads.iter().map(|(node, src)| (*node, src.as_str()))
    }

    /// Settle the oldest pending fetch of `node`.
    ///
    /// A successful load records an external activation. Either outcome
    /// dispatches the settle handlers registered on `node`. Returns `false`
    /// when `node` has no pending fetch.
    pub fn finish_load(&mut self, node: NodeId, outcome: LoadOutcome) -> bool {
        let Some(position) = self.pending_loads.iter().position(|(n, _)| *n == node) else {
            return false;
        };
        if let Some((node, src)) = self.pending_loads.remove(position) {
            self.settle(node, src, outcome);
        }
        true
    }

    /// Settle pending fetches in order until none remain, asking
    /// `outcome_for` how each `src` ends. Fetches started by settle handlers
    /// are drained too.
    pub fn drain_loads(&mut self, mut outcome_for: impl FnMut(&str) -> LoadOutcome) {
        while let Some((node, src)) = self.pending_loads.pop_front() {
            let outcome = outcome_for(&src);
            self.settle(node, src, outcome);
        }
    }

    /// Serialize `node` and its subtree as HTML.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn settle(&mut self, node: NodeId, src: String, outcome: LoadOutcome) {
        debug!("load of {src:?} for {node:?} settled: {outcome:?}");
        if outcome == LoadOutcome::Loaded {
            self.activations.push(Activation::External { node, src });
        }
        if let Some(handlers) = self.settle_handlers.remove(&node) {
            for handler in handlers {
                handler(self, outcome);
            }
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn record(&self, node: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(node.index())
    }

    fn record_mut(&mut self, node: NodeId) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(node.index())
            .ok_or_else(|| DomError::unknown(node))
    }

    fn attributes_mut(&mut self, node: NodeId) -> Result<&mut IndexMap<String, String>, DomError> {
        match &mut self.record_mut(node)?.kind {
            NodeKind::Element { attributes, .. } => Ok(attributes),
            _ => Err(DomError::not_an_element(node)),
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.record(current).and_then(|r| r.parent);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes[node.index()].parent.take() else {
            return;
        };
        self.nodes[parent.index()].children.retain(|c| *c != node);
    }

    /// Start every not-yet-started script in the subtree of `node`.
    fn prepare_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if is_script(&*self, current) {
                self.prepare_script(current);
            }
            stack.extend(self.nodes[current.index()].children.iter().rev().copied());
        }
    }

    fn prepare_script(&mut self, script: NodeId) {
        if self.started.contains(&script) || !self.is_connected(script) {
            return;
        }
        let src = script_src(&*self, script);
        let text = self.text_content(script);
        if src.is_none() && text.is_empty() {
            return;
        }
        self.started.insert(script);
        match src {
            Some(src) => {
                trace!("fetching {src:?} for {script:?}");
                self.pending_loads.push_back((script, src));
            }
            None => {
                trace!("running inline {script:?}");
                self.activations.push(Activation::Inline { node: script, text });
            }
        }
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(record) = self.record(node) else {
            return;
        };
        match &record.kind {
            NodeKind::Document | NodeKind::Fragment => {
                for child in &record.children {
                    self.write_html(*child, out);
                }
            }
            NodeKind::Text(text) => {
                let raw = record
                    .parent
                    .is_some_and(|p| is_script(self, p));
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;"));
                }
            }
            NodeKind::Element {
                name,
                attributes,
                content,
                ..
            } => {
                out.push('<');
                out.push_str(name);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                out.push('>');
                if let Some(content) = content {
                    self.write_html(*content, out);
                }
                for child in &record.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("activations", &self.activations)
            .field("pending_loads", &self.pending_loads)
            .finish_non_exhaustive()
    }
}

impl LiveTree for Document {
    type Node = NodeId;

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.record(node)?.kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    fn namespace(&self, node: NodeId) -> Option<&str> {
        match &self.record(node)?.kind {
            NodeKind::Element { namespace, .. } => namespace.as_deref(),
            _ => None,
        }
    }

    fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        match self.record(node).map(|r| &r.kind) {
            Some(NodeKind::Element { attributes, .. }) => attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.record(node)?.kind {
            NodeKind::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.attributes_mut(node)?
            .insert(name.to_string(), value.to_string());
        if name.eq_ignore_ascii_case("src") && is_script(&*self, node) {
            self.prepare_script(node);
        }
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.attributes_mut(node)?.shift_remove(name);
        Ok(())
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let Some(record) = self.record(current) else {
                continue;
            };
            if let NodeKind::Text(text) = &record.kind {
                out.push_str(text);
            }
            stack.extend(record.children.iter().rev().copied());
        }
        out
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let record = self.record_mut(node)?;
        if let NodeKind::Text(existing) = &mut record.kind {
            existing.clear();
            existing.push_str(text);
            return Ok(());
        }
        for child in std::mem::take(&mut record.children) {
            self.nodes[child.index()].parent = None;
        }
        if !text.is_empty() {
            let child = self.create_text(text);
            self.insert_before(node, child, None)?;
        }
        Ok(())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.record(node)?.parent
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.is_ancestor(self.root, node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.record(node)
            .map(|r| r.children.clone())
            .unwrap_or_default()
    }

    fn template_content(&self, node: NodeId) -> Option<NodeId> {
        match &self.record(node)?.kind {
            NodeKind::Element { content, .. } => *content,
            _ => None,
        }
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        let parent_record = self.record(parent).ok_or_else(|| DomError::unknown(parent))?;
        if !parent_record.allows_children() {
            return Err(DomError::invalid_parent(parent));
        }
        let child_record = self.record(child).ok_or_else(|| DomError::unknown(child))?;
        if matches!(child_record.kind, NodeKind::Document) {
            return Err(DomError::DocumentNode);
        }
        if self.is_ancestor(child, parent) {
            return Err(DomError::cycle(parent, child));
        }
        let mut reference = reference;
        if let Some(r) = reference {
            if self.parent(r) != Some(parent) {
                return Err(DomError::invalid_sibling(parent, r));
            }
            if r == child {
                let siblings = &self.nodes[parent.index()].children;
                reference = siblings
                    .iter()
                    .position(|c| *c == child)
                    .and_then(|i| siblings.get(i + 1))
                    .copied();
            }
        }

        self.detach(child);
        let siblings = &mut self.nodes[parent.index()].children;
        let position = reference
            .and_then(|r| siblings.iter().position(|c| *c == r))
            .unwrap_or(siblings.len());
        siblings.insert(position, child);
        self.nodes[child.index()].parent = Some(parent);
        trace!("inserted {child:?} into {parent:?} at {position}");

        if self.is_connected(parent) {
            self.prepare_subtree(child);
            if is_script(&*self, parent) {
                self.prepare_script(parent);
            }
        }
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.record(parent).is_none() {
            return Err(DomError::unknown(parent));
        }
        if self.parent(child) != Some(parent) {
            return Err(DomError::invalid_sibling(parent, child));
        }
        self.detach(child);
        Ok(())
    }

    fn create_element_ns(&mut self, namespace: Option<&str>, name: &str) -> NodeId {
        let content = (namespace == Some(HTML_NAMESPACE) && name.eq_ignore_ascii_case("template"))
            .then(|| self.push(NodeKind::Fragment));
        self.push(NodeKind::Element {
            name: name.to_string(),
            namespace: namespace.map(str::to_owned),
            attributes: IndexMap::new(),
            content,
        })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn on_settled(&mut self, node: NodeId, handler: SettleHandler<Self>) {
        self.settle_handlers.entry(node).or_default().push(handler);
    }
}
