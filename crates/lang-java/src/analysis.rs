//! Traversal harness.
//!
//! One walk per tree visits every node exactly once, children before their
//! parent, so the innermost call of a fluent chain is examined first and the
//! lazy detector reports the longest chain.

use crate::inspection::lazy::LazyTransformInspection;
use crate::inspection::{AnalysisOptions, InspectionContext, SeenCalls, literal, not_empty, suspicious};
use crate::syntax::{NodeId, NodeKind, SyntaxTree};
use crate::types::JavaTypeSystem;
use collscope_api::models::{Diagnostic, InspectionId};
use tracing::debug;

/// Runs every enabled inspection over `tree`. Diagnostics come back in
/// emission order.
pub fn analyze(
    tree: &SyntaxTree,
    ts: &dyn JavaTypeSystem,
    options: &AnalysisOptions,
) -> Vec<Diagnostic> {
    // Without the library on the classpath none of the suggestions apply.
    if !ts.is_known_type(&options.rich_iterable) {
        debug!(rich = %options.rich_iterable, "Eclipse Collections not in use, skipping");
        return vec![];
    }

    let ctx = InspectionContext { tree, ts, options };
    let lazy = if options.is_enabled(InspectionId::NeedlessIntermediateCollections) {
        LazyTransformInspection::new(ts, options)
    } else {
        None
    };
    let mut walker = Walker {
        ctx,
        lazy,
        seen: SeenCalls::new(),
        diagnostics: Vec::new(),
    };

    for id in tree.post_order() {
        walker.visit(id);
    }

    debug!(
        nodes = tree.len(),
        diagnostics = walker.diagnostics.len(),
        "Analysis finished"
    );
    walker.diagnostics
}

struct Walker<'a> {
    ctx: InspectionContext<'a>,
    lazy: Option<LazyTransformInspection<'a>>,
    seen: SeenCalls,
    diagnostics: Vec<Diagnostic>,
}

impl Walker<'_> {
    fn visit(&mut self, id: NodeId) {
        match self.ctx.tree.kind(id) {
            NodeKind::MethodCall { .. } => self.visit_method_call(id),
            NodeKind::New { .. } => self.visit_new(id),
            NodeKind::Prefix(_) => self.visit_prefix(id),
            _ => {}
        }
    }

    fn enabled(&self, id: InspectionId) -> bool {
        self.ctx.options.is_enabled(id)
    }

    fn visit_method_call(&mut self, call: NodeId) {
        if let Some(lazy) = &self.lazy {
            if let Some(diagnostic) = lazy.check_call(self.ctx.tree, call, &mut self.seen) {
                self.diagnostics.push(diagnostic);
            }
        }
        if self.enabled(InspectionId::SuspiciousMethodCalls) {
            self.diagnostics.extend(suspicious::check_call(&self.ctx, call));
        }
    }

    fn visit_new(&mut self, node: NodeId) {
        if self.enabled(InspectionId::ConvertToEclipseCollection) {
            self.diagnostics.extend(literal::check_new(&self.ctx, node));
        }
    }

    fn visit_prefix(&mut self, node: NodeId) {
        if self.enabled(InspectionId::PreferNotEmpty) {
            self.diagnostics.extend(not_empty::check_prefix(&self.ctx, node));
        }
    }
}
