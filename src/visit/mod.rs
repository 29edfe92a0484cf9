//! Double dispatch over the AST.
//!
//! A traversal implements [`Visitor`]: one handler per concrete node kind. A node
//! implements [`Accept`]: it hands itself to the matching handler, then hands each
//! of its children, in order, to the traversal the handler returned.
//!
//! Handlers take the traversal by shared reference and return the traversal to
//! use one level down. State that depends on position in the tree (depth, an
//! accumulated prefix) is threaded by value this way and never mutated in
//! place. Whatever a traversal produces goes into the explicit `out` sink, which
//! is the only mutable thing passed around.
//!
//! There are no default handlers. Adding a node kind breaks every traversal
//! until it handles the new kind.

mod dispatch;

use crate::ast::*;

pub trait Visitor: Sized {
    /// Where the traversal writes its results.
    type Output;

    fn visit_file(&self, node: &FileNode, out: &mut Self::Output) -> Self;
    fn visit_function_call(&self, node: &FunctionCallNode, out: &mut Self::Output) -> Self;
    fn visit_namespace(&self, node: &Namespace, out: &mut Self::Output) -> Self;
    fn visit_variable_ref(&self, node: &VariableRefNode, out: &mut Self::Output) -> Self;
    fn visit_lambda_function(&self, node: &LambdaFunctionNode, out: &mut Self::Output) -> Self;
    fn visit_elvis(&self, node: &ElvisNode, out: &mut Self::Output) -> Self;
    fn visit_block(&self, node: &BlockNode, out: &mut Self::Output) -> Self;
    fn visit_number(&self, node: &NumberNode, out: &mut Self::Output) -> Self;
    fn visit_string(&self, node: &StringNode, out: &mut Self::Output) -> Self;
    fn visit_atom(&self, node: &AtomNode, out: &mut Self::Output) -> Self;
    fn visit_tuple(&self, node: &TupleNode, out: &mut Self::Output) -> Self;
    fn visit_list(&self, node: &ListNode, out: &mut Self::Output) -> Self;
    fn visit_struct(&self, node: &StructNode, out: &mut Self::Output) -> Self;
    fn visit_struct_pair(&self, node: &StructPairNode, out: &mut Self::Output) -> Self;
    fn visit_variable_def(&self, node: &VariableDefNode, out: &mut Self::Output) -> Self;
    fn visit_function_def(&self, node: &FunctionDefNode, out: &mut Self::Output) -> Self;
    fn visit_type_def(&self, node: &TypeDefNode, out: &mut Self::Output) -> Self;
    fn visit_function_def_header(&self, node: &FunctionDefHeaderNode, out: &mut Self::Output) -> Self;
    fn visit_function_param(&self, node: &FunctionParamNode, out: &mut Self::Output) -> Self;
    fn visit_type_ref(&self, node: &TypeRefNode, out: &mut Self::Output) -> Self;
    fn visit_tuple_type(&self, node: &TupleTypeNode, out: &mut Self::Output) -> Self;
    fn visit_maybe_type(&self, node: &MaybeTypeNode, out: &mut Self::Output) -> Self;
    fn visit_list_type(&self, node: &ListTypeNode, out: &mut Self::Output) -> Self;
    fn visit_struct_type(&self, node: &StructTypeNode, out: &mut Self::Output) -> Self;
    fn visit_struct_type_pair(&self, node: &StructTypePairNode, out: &mut Self::Output) -> Self;
}

/// Implemented by everything that can be handed to a [`Visitor`].
///
/// Dispatch cannot fail. A traversal that can fail records the failure in its own
/// state or output; dispatch neither inspects nor retries it.
pub trait Accept {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output);
}

/// Runs `visitor` over `node` with a fresh output, and returns that output.
pub fn walk<N: Accept + ?Sized, V: Visitor>(node: &N, visitor: &V) -> V::Output
where
    V::Output: Default,
{
    let mut out = V::Output::default();
    node.accept(visitor, &mut out);
    out
}
