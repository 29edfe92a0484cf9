//! [`Accept`] for every node.
//!
//! Each concrete node calls its handler, then dispatches its children in
//! declaration order to the traversal the handler returned. The family enums add
//! no step of their own and forward to whichever node they hold.

use super::{Accept, Visitor};
use crate::ast::*;

/* Minimum stack left before growing, and how much to grow by. */
const STACK_RED_ZONE: usize = 32 * 1024;
const STACK_GROWTH: usize = 1024 * 1024;

/* Families */

impl Accept for Expression {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        // Prevent stack overflow on deeply nested input by allocating additional stack as required.
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || match self {
            Expression::FunctionCall(node) => node.accept(visitor, out),
            Expression::VariableRef(node) => node.accept(visitor, out),
            Expression::LambdaFunction(node) => node.accept(visitor, out),
            Expression::Elvis(node) => node.accept(visitor, out),
            Expression::Block(node) => node.accept(visitor, out),
            Expression::Literal(literal) => literal.accept(visitor, out),
        })
    }
}

impl Accept for Literal {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        match self {
            Literal::Number(node) => node.accept(visitor, out),
            Literal::String(node) => node.accept(visitor, out),
            Literal::Atom(node) => node.accept(visitor, out),
            Literal::Tuple(node) => node.accept(visitor, out),
            Literal::List(node) => node.accept(visitor, out),
            Literal::Struct(node) => node.accept(visitor, out),
        }
    }
}

impl Accept for Definition {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        match self {
            Definition::Variable(node) => node.accept(visitor, out),
            Definition::Function(node) => node.accept(visitor, out),
            Definition::Type(node) => node.accept(visitor, out),
        }
    }
}

impl Accept for TypeNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || match self {
            TypeNode::Ref(node) => node.accept(visitor, out),
            TypeNode::Tuple(node) => node.accept(visitor, out),
            TypeNode::Maybe(node) => node.accept(visitor, out),
            TypeNode::List(node) => node.accept(visitor, out),
            TypeNode::Struct(node) => node.accept(visitor, out),
        })
    }
}

impl<'a> Accept for AnyNode<'a> {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        use AnyNode as A;

        match *self {
            A::File(node) => node.accept(visitor, out),
            A::FunctionCall(node) => node.accept(visitor, out),
            A::Namespace(node) => node.accept(visitor, out),
            A::VariableRef(node) => node.accept(visitor, out),
            A::LambdaFunction(node) => node.accept(visitor, out),
            A::Elvis(node) => node.accept(visitor, out),
            A::Block(node) => node.accept(visitor, out),
            A::Number(node) => node.accept(visitor, out),
            A::String(node) => node.accept(visitor, out),
            A::Atom(node) => node.accept(visitor, out),
            A::Tuple(node) => node.accept(visitor, out),
            A::List(node) => node.accept(visitor, out),
            A::Struct(node) => node.accept(visitor, out),
            A::StructPair(node) => node.accept(visitor, out),
            A::VariableDef(node) => node.accept(visitor, out),
            A::FunctionDef(node) => node.accept(visitor, out),
            A::TypeDef(node) => node.accept(visitor, out),
            A::FunctionDefHeader(node) => node.accept(visitor, out),
            A::FunctionParam(node) => node.accept(visitor, out),
            A::TypeRef(node) => node.accept(visitor, out),
            A::TupleType(node) => node.accept(visitor, out),
            A::MaybeType(node) => node.accept(visitor, out),
            A::ListType(node) => node.accept(visitor, out),
            A::StructType(node) => node.accept(visitor, out),
            A::StructTypePair(node) => node.accept(visitor, out),
        }
    }
}

impl<T: Accept> Accept for [T] {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        for item in self {
            item.accept(visitor, out);
        }
    }
}

/* Nodes */

impl Accept for FileNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_file(self, out);
        self.root().accept(&next, out);
    }
}

impl Accept for FunctionCallNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_function_call(self, out);
        self.function().accept(&next, out);
        self.arguments().accept(&next, out);
    }
}

/// The chain is walked outward. The parent is a shared segment, not a child, so
/// it goes to the traversal this namespace was given rather than a deeper one.
impl Accept for Namespace {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        // Iterative so long chains need no extra stack.
        for segment in self.ancestors() {
            _ = visitor.visit_namespace(segment, out);
        }
    }
}

impl Accept for VariableRefNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_variable_ref(self, out);
        self.namespace().accept(&next, out);
    }
}

impl Accept for LambdaFunctionNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_lambda_function(self, out);
        self.params().accept(&next, out);
        self.body().accept(&next, out);
    }
}

impl Accept for ElvisNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_elvis(self, out);
        self.left().accept(&next, out);
        self.right().accept(&next, out);
    }
}

impl Accept for BlockNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_block(self, out);
        self.definition().accept(&next, out);
        self.body().accept(&next, out);
    }
}

impl Accept for NumberNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        _ = visitor.visit_number(self, out);
    }
}

impl Accept for StringNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        _ = visitor.visit_string(self, out);
    }
}

impl Accept for AtomNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        _ = visitor.visit_atom(self, out);
    }
}

impl Accept for TupleNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_tuple(self, out);
        self.elements().accept(&next, out);
    }
}

impl Accept for ListNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_list(self, out);
        self.elements().accept(&next, out);
    }
}

impl Accept for StructNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_struct(self, out);
        self.pairs().accept(&next, out);
    }
}

impl Accept for StructPairNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_struct_pair(self, out);
        self.value().accept(&next, out);
    }
}

impl Accept for VariableDefNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_variable_def(self, out);
        self.variable().accept(&next, out);
        self.variable_type().accept(&next, out);
        self.body().accept(&next, out);
    }
}

impl Accept for FunctionDefNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_function_def(self, out);
        self.header().accept(&next, out);
        self.params().accept(&next, out);
        self.body().accept(&next, out);
    }
}

impl Accept for TypeDefNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_type_def(self, out);
        self.type_ref().accept(&next, out);
        self.definition().accept(&next, out);
    }
}

impl Accept for FunctionDefHeaderNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_function_def_header(self, out);
        self.variable().accept(&next, out);
        self.return_type().accept(&next, out);
    }
}

impl Accept for FunctionParamNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_function_param(self, out);
        self.param_type().accept(&next, out);
    }
}

impl Accept for TypeRefNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_type_ref(self, out);
        self.namespace().accept(&next, out);
    }
}

impl Accept for TupleTypeNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_tuple_type(self, out);
        self.members().accept(&next, out);
    }
}

impl Accept for MaybeTypeNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_maybe_type(self, out);
        self.base().accept(&next, out);
    }
}

impl Accept for ListTypeNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_list_type(self, out);
        self.base().accept(&next, out);
    }
}

impl Accept for StructTypeNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_struct_type(self, out);
        self.pairs().accept(&next, out);
    }
}

impl Accept for StructTypePairNode {
    fn accept<V: Visitor>(&self, visitor: &V, out: &mut V::Output) {
        let next = visitor.visit_struct_type_pair(self, out);
        self.member_type().accept(&next, out);
    }
}
