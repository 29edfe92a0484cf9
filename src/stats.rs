//! Size and shape of a tree, gathered in one pass.
//!
//! Handy for deciding whether a tree from untrusted input is worth handing to a
//! heavier pass.

use crate::ast::*;
use crate::visit::{walk, Visitor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Every node visited, namespace segments included.
    pub nodes: usize,
    /// Depth of the deepest node. The file node sits at depth zero.
    pub max_depth: usize,
    /// Namespace segments visited. A segment shared by several references is
    /// counted once per reference.
    pub namespaces: usize,
}

impl TreeStats {
    fn record(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Visitor behind [`collect_stats`]. Carries only its depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsCollector {
    depth: usize,
}

impl StatsCollector {
    fn count(&self, out: &mut TreeStats) -> Self {
        out.record(self.depth);
        StatsCollector { depth: self.depth + 1 }
    }
}

impl Visitor for StatsCollector {
    type Output = TreeStats;

    fn visit_file(&self, _: &FileNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_function_call(&self, _: &FunctionCallNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_namespace(&self, _: &Namespace, out: &mut TreeStats) -> Self {
        out.namespaces += 1;
        self.count(out)
    }

    fn visit_variable_ref(&self, _: &VariableRefNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_lambda_function(&self, _: &LambdaFunctionNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_elvis(&self, _: &ElvisNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_block(&self, _: &BlockNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_number(&self, _: &NumberNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_string(&self, _: &StringNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_atom(&self, _: &AtomNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_tuple(&self, _: &TupleNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_list(&self, _: &ListNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_struct(&self, _: &StructNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_struct_pair(&self, _: &StructPairNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_variable_def(&self, _: &VariableDefNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_function_def(&self, _: &FunctionDefNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_type_def(&self, _: &TypeDefNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_function_def_header(&self, _: &FunctionDefHeaderNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_function_param(&self, _: &FunctionParamNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_type_ref(&self, _: &TypeRefNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_tuple_type(&self, _: &TupleTypeNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_maybe_type(&self, _: &MaybeTypeNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_list_type(&self, _: &ListTypeNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_struct_type(&self, _: &StructTypeNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }

    fn visit_struct_type_pair(&self, _: &StructTypePairNode, out: &mut TreeStats) -> Self {
        self.count(out)
    }
}

pub fn collect_stats(file: &FileNode) -> TreeStats {
    walk(file, &StatsCollector::default())
}
