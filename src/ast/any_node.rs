//! A borrowed view over any node, for code that walks the tree generically.

use super::ast_types::*;
use super::namespace::Namespace;

use std::fmt::Display;

/// Every concrete kind of node. The family enums ([`Expression`], [`Literal`],
/// [`Definition`], [`TypeNode`]) are not kinds of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    FunctionCall,
    Namespace,
    VariableRef,
    LambdaFunction,
    Elvis,
    Block,
    Number,
    String,
    Atom,
    Tuple,
    List,
    Struct,
    StructPair,
    VariableDef,
    FunctionDef,
    TypeDef,
    FunctionDefHeader,
    FunctionParam,
    TypeRef,
    TupleType,
    MaybeType,
    ListType,
    StructType,
    StructTypePair,
}

impl NodeKind {
    /// The canonical lowercase name of the kind, as printed in trees.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::FunctionCall => "function_call",
            NodeKind::Namespace => "namespace",
            NodeKind::VariableRef => "variable_ref",
            NodeKind::LambdaFunction => "lambda_function",
            NodeKind::Elvis => "elvis",
            NodeKind::Block => "block",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Atom => "atom",
            NodeKind::Tuple => "tuple",
            NodeKind::List => "list",
            NodeKind::Struct => "struct",
            NodeKind::StructPair => "struct_pair",
            NodeKind::VariableDef => "variable_def",
            NodeKind::FunctionDef => "function_def",
            NodeKind::TypeDef => "type_def",
            NodeKind::FunctionDefHeader => "function_def_header",
            NodeKind::FunctionParam => "function_param",
            NodeKind::TypeRef => "type_ref",
            NodeKind::TupleType => "tuple_type",
            NodeKind::MaybeType => "maybe_type",
            NodeKind::ListType => "list_type",
            NodeKind::StructType => "struct_type",
            NodeKind::StructTypePair => "struct_type_pair",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AnyNode<'a> {
    File(&'a FileNode),
    FunctionCall(&'a FunctionCallNode),
    Namespace(&'a Namespace),
    VariableRef(&'a VariableRefNode),
    LambdaFunction(&'a LambdaFunctionNode),
    Elvis(&'a ElvisNode),
    Block(&'a BlockNode),
    Number(&'a NumberNode),
    String(&'a StringNode),
    Atom(&'a AtomNode),
    Tuple(&'a TupleNode),
    List(&'a ListNode),
    Struct(&'a StructNode),
    StructPair(&'a StructPairNode),
    VariableDef(&'a VariableDefNode),
    FunctionDef(&'a FunctionDefNode),
    TypeDef(&'a TypeDefNode),
    FunctionDefHeader(&'a FunctionDefHeaderNode),
    FunctionParam(&'a FunctionParamNode),
    TypeRef(&'a TypeRefNode),
    TupleType(&'a TupleTypeNode),
    MaybeType(&'a MaybeTypeNode),
    ListType(&'a ListTypeNode),
    StructType(&'a StructTypeNode),
    StructTypePair(&'a StructTypePairNode),
}

impl<'a> AnyNode<'a> {
    pub fn kind(&self) -> NodeKind {
        use AnyNode as A;

        match *self {
            A::File(_) => NodeKind::File,
            A::FunctionCall(_) => NodeKind::FunctionCall,
            A::Namespace(_) => NodeKind::Namespace,
            A::VariableRef(_) => NodeKind::VariableRef,
            A::LambdaFunction(_) => NodeKind::LambdaFunction,
            A::Elvis(_) => NodeKind::Elvis,
            A::Block(_) => NodeKind::Block,
            A::Number(_) => NodeKind::Number,
            A::String(_) => NodeKind::String,
            A::Atom(_) => NodeKind::Atom,
            A::Tuple(_) => NodeKind::Tuple,
            A::List(_) => NodeKind::List,
            A::Struct(_) => NodeKind::Struct,
            A::StructPair(_) => NodeKind::StructPair,
            A::VariableDef(_) => NodeKind::VariableDef,
            A::FunctionDef(_) => NodeKind::FunctionDef,
            A::TypeDef(_) => NodeKind::TypeDef,
            A::FunctionDefHeader(_) => NodeKind::FunctionDefHeader,
            A::FunctionParam(_) => NodeKind::FunctionParam,
            A::TypeRef(_) => NodeKind::TypeRef,
            A::TupleType(_) => NodeKind::TupleType,
            A::MaybeType(_) => NodeKind::MaybeType,
            A::ListType(_) => NodeKind::ListType,
            A::StructType(_) => NodeKind::StructType,
            A::StructTypePair(_) => NodeKind::StructTypePair,
        }
    }

    /// The identifier a node carries, for the kinds that carry one.
    pub fn ident(&self) -> Option<&'a str> {
        match *self {
            AnyNode::Namespace(namespace) => Some(namespace.ident()),
            AnyNode::VariableRef(node) => Some(node.local_ident()),
            AnyNode::TypeRef(node) => Some(node.local_ident()),
            _ => None,
        }
    }

    /// This function permits recursion over the tree without inspecting the structure.
    ///
    /// Returns exactly what dispatch descends into, in the same order. For a
    /// namespace that is its parent link (if any) rather than an owned child.
    #[allow(clippy::match_same_arms)] // Kept in declaration order.
    pub fn children(&self) -> Vec<AnyNode<'a>> {
        use AnyNode as A;

        match *self {
            A::File(node) => vec![node.root().into()],
            A::FunctionCall(node) => {
                let mut children: Vec<AnyNode<'a>> = vec![node.function().into()];
                children.extend(node.arguments().iter().map(AnyNode::from));
                children
            }
            A::Namespace(namespace) => namespace.parent().map(A::Namespace).into_iter().collect(),
            A::VariableRef(node) => vec![A::Namespace(node.namespace())],
            A::LambdaFunction(node) => {
                let mut children: Vec<_> = node.params().iter().map(A::FunctionParam).collect();
                children.push(node.body().into());
                children
            }
            A::Elvis(node) => vec![node.left().into(), node.right().into()],
            A::Block(node) => vec![node.definition().into(), node.body().into()],
            A::Number(_) | A::String(_) | A::Atom(_) => vec![],
            A::Tuple(node) => node.elements().iter().map(AnyNode::from).collect(),
            A::List(node) => node.elements().iter().map(AnyNode::from).collect(),
            A::Struct(node) => node.pairs().iter().map(A::StructPair).collect(),
            A::StructPair(node) => vec![node.value().into()],
            A::VariableDef(node) => {
                vec![A::VariableRef(node.variable()), node.variable_type().into(), node.body().into()]
            }
            A::FunctionDef(node) => {
                let mut children = vec![A::FunctionDefHeader(node.header())];
                children.extend(node.params().iter().map(A::FunctionParam));
                children.push(node.body().into());
                children
            }
            A::TypeDef(node) => vec![A::TypeRef(node.type_ref()), node.definition().into()],
            A::FunctionDefHeader(node) => vec![A::VariableRef(node.variable()), node.return_type().into()],
            A::FunctionParam(node) => vec![node.param_type().into()],
            A::TypeRef(node) => vec![A::Namespace(node.namespace())],
            A::TupleType(node) => node.members().iter().map(AnyNode::from).collect(),
            A::MaybeType(node) => vec![node.base().into()],
            A::ListType(node) => vec![node.base().into()],
            A::StructType(node) => node.pairs().iter().map(A::StructTypePair).collect(),
            A::StructTypePair(node) => vec![node.member_type().into()],
        }
    }
}

impl<'a> From<&'a FileNode> for AnyNode<'a> {
    fn from(value: &'a FileNode) -> Self {
        AnyNode::File(value)
    }
}

/// Unwraps the family enum down to the concrete node.
impl<'a> From<&'a Expression> for AnyNode<'a> {
    fn from(value: &'a Expression) -> Self {
        match value {
            Expression::FunctionCall(node) => AnyNode::FunctionCall(node),
            Expression::VariableRef(node) => AnyNode::VariableRef(node),
            Expression::LambdaFunction(node) => AnyNode::LambdaFunction(node),
            Expression::Elvis(node) => AnyNode::Elvis(node),
            Expression::Block(node) => AnyNode::Block(node),
            Expression::Literal(literal) => literal.into(),
        }
    }
}

impl<'a> From<&'a Literal> for AnyNode<'a> {
    fn from(value: &'a Literal) -> Self {
        match value {
            Literal::Number(node) => AnyNode::Number(node),
            Literal::String(node) => AnyNode::String(node),
            Literal::Atom(node) => AnyNode::Atom(node),
            Literal::Tuple(node) => AnyNode::Tuple(node),
            Literal::List(node) => AnyNode::List(node),
            Literal::Struct(node) => AnyNode::Struct(node),
        }
    }
}

impl<'a> From<&'a Definition> for AnyNode<'a> {
    fn from(value: &'a Definition) -> Self {
        match value {
            Definition::Variable(node) => AnyNode::VariableDef(node),
            Definition::Function(node) => AnyNode::FunctionDef(node),
            Definition::Type(node) => AnyNode::TypeDef(node),
        }
    }
}

impl<'a> From<&'a TypeNode> for AnyNode<'a> {
    fn from(value: &'a TypeNode) -> Self {
        match value {
            TypeNode::Ref(node) => AnyNode::TypeRef(node),
            TypeNode::Tuple(node) => AnyNode::TupleType(node),
            TypeNode::Maybe(node) => AnyNode::MaybeType(node),
            TypeNode::List(node) => AnyNode::ListType(node),
            TypeNode::Struct(node) => AnyNode::StructType(node),
        }
    }
}
