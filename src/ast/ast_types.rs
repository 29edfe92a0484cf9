//! This module defines the AST types and simple methods on those types.
//!
//! Every node is built whole by its constructor and never changes afterwards.
//! A node owns its children outright (through `Box` and `Vec`), so dropping the
//! [`FileNode`] drops the whole tree. The one exception is the namespace chain,
//! which is shared through [`Namespace`] handles.
//!
//! Fields are private. Sequences keep the order they were given in, which is the
//! order traversals see them in.

use super::namespace::Namespace;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

/* File */

/// The root of one compilation unit: a single expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    root: Expression,
}

impl FileNode {
    pub fn new(root: Expression) -> FileNode {
        FileNode { root }
    }

    pub fn root(&self) -> &Expression {
        &self.root
    }
}

/* Expressions */

/// Any construct that produces a value.
///
/// Literals form their own family inside this one. When serialized, a literal is
/// tagged by its own kind (`{"number": 3}`) rather than nested under a `literal` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    FunctionCall(FunctionCallNode),
    VariableRef(VariableRefNode),
    LambdaFunction(LambdaFunctionNode),
    Elvis(ElvisNode),
    Block(BlockNode),
    #[serde(untagged)]
    Literal(Literal),
}

/// A call. The callee is itself an expression, visited before the arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallNode {
    function: Box<Expression>,
    arguments: Vec<Expression>,
}

impl FunctionCallNode {
    pub fn new(function: Expression, arguments: Vec<Expression>) -> FunctionCallNode {
        FunctionCallNode { function: Box::new(function), arguments }
    }

    /// The expression in function position.
    pub fn function(&self) -> &Expression {
        &self.function
    }

    /// Positional arguments, in call order.
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

/// A use of a variable, possibly qualified by a namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRefNode {
    #[serde(default, skip_serializing_if = "Namespace::is_unqualified")]
    namespace: Namespace,
    ident: String,
}

impl VariableRefNode {
    pub fn new(namespace: Namespace, ident: impl Into<String>) -> VariableRefNode {
        VariableRefNode { namespace, ident: ident.into() }
    }

    /// A reference written without qualification. Holds the unqualified sentinel.
    pub fn unqualified(ident: impl Into<String>) -> VariableRefNode {
        VariableRefNode::new(Namespace::unqualified(), ident)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The identifier without its namespace.
    pub fn local_ident(&self) -> &str {
        &self.ident
    }
}

/// An anonymous function: parameters followed by a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaFunctionNode {
    params: Vec<FunctionParamNode>,
    body: Box<Expression>,
}

impl LambdaFunctionNode {
    pub fn new(params: Vec<FunctionParamNode>, body: Expression) -> LambdaFunctionNode {
        LambdaFunctionNode { params, body: Box::new(body) }
    }

    pub fn params(&self) -> &[FunctionParamNode] {
        &self.params
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }
}

/// `left ?: right`. Falls back to the right side when the left has no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElvisNode {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl ElvisNode {
    pub fn new(left: Expression, right: Expression) -> ElvisNode {
        ElvisNode { left: Box::new(left), right: Box::new(right) }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

/// A definition scoped over a body expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    definition: Box<Definition>,
    body: Box<Expression>,
}

impl BlockNode {
    pub fn new(definition: Definition, body: Expression) -> BlockNode {
        BlockNode { definition: Box::new(definition), body: Box::new(body) }
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }
}

/* Literals */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Number(NumberNode),
    String(StringNode),
    Atom(AtomNode),
    Tuple(TupleNode),
    List(ListNode),
    Struct(StructNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NumberNode {
    value: f64,
}

/// JSON has no NaN or infinity. Refusing them keeps every encoded tree loadable.
impl Serialize for NumberNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.value.is_finite() {
            return Err(S::Error::custom(format_args!("number {} has no JSON form", self.value)));
        }

        serializer.serialize_f64(self.value)
    }
}

impl NumberNode {
    pub fn new(value: f64) -> NumberNode {
        NumberNode { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringNode {
    value: String,
}

impl StringNode {
    pub fn new(value: impl Into<String>) -> StringNode {
        StringNode { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A symbolic constant that stands only for itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomNode {
    name: String,
}

impl AtomNode {
    pub fn new(name: impl Into<String>) -> AtomNode {
        AtomNode { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleNode {
    elements: Vec<Expression>,
}

impl TupleNode {
    pub fn new(elements: Vec<Expression>) -> TupleNode {
        TupleNode { elements }
    }

    pub fn elements(&self) -> &[Expression] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListNode {
    elements: Vec<Expression>,
}

impl ListNode {
    pub fn new(elements: Vec<Expression>) -> ListNode {
        ListNode { elements }
    }

    pub fn elements(&self) -> &[Expression] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructNode {
    pairs: Vec<StructPairNode>,
}

impl StructNode {
    pub fn new(pairs: Vec<StructPairNode>) -> StructNode {
        StructNode { pairs }
    }

    pub fn pairs(&self) -> &[StructPairNode] {
        &self.pairs
    }
}

/// One `ident: value` member of a struct literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructPairNode {
    ident: String,
    value: Expression,
}

impl StructPairNode {
    pub fn new(ident: impl Into<String>, value: Expression) -> StructPairNode {
        StructPairNode { ident: ident.into(), value }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

/* Definitions */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Definition {
    Variable(VariableDefNode),
    Function(FunctionDefNode),
    Type(TypeDefNode),
}

/// Binds a variable of a declared type to a value. Nothing here checks that the
/// value actually has that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefNode {
    variable: VariableRefNode,
    variable_type: TypeNode,
    body: Expression,
}

impl VariableDefNode {
    pub fn new(variable: VariableRefNode, variable_type: TypeNode, body: Expression) -> VariableDefNode {
        VariableDefNode { variable, variable_type, body }
    }

    pub fn variable(&self) -> &VariableRefNode {
        &self.variable
    }

    pub fn variable_type(&self) -> &TypeNode {
        &self.variable_type
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }
}

/// A named function. Visited as header, then parameters, then body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefNode {
    header: FunctionDefHeaderNode,
    params: Vec<FunctionParamNode>,
    body: Expression,
}

impl FunctionDefNode {
    pub fn new(header: FunctionDefHeaderNode, params: Vec<FunctionParamNode>, body: Expression) -> FunctionDefNode {
        FunctionDefNode { header, params, body }
    }

    pub fn header(&self) -> &FunctionDefHeaderNode {
        &self.header
    }

    pub fn params(&self) -> &[FunctionParamNode] {
        &self.params
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefNode {
    type_ref: TypeRefNode,
    definition: TypeNode,
}

impl TypeDefNode {
    pub fn new(type_ref: TypeRefNode, definition: TypeNode) -> TypeDefNode {
        TypeDefNode { type_ref, definition }
    }

    /// The name being defined.
    pub fn type_ref(&self) -> &TypeRefNode {
        &self.type_ref
    }

    pub fn definition(&self) -> &TypeNode {
        &self.definition
    }
}

/// The name and return type of a [`FunctionDefNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefHeaderNode {
    variable: VariableRefNode,
    return_type: TypeNode,
}

impl FunctionDefHeaderNode {
    pub fn new(variable: VariableRefNode, return_type: TypeNode) -> FunctionDefHeaderNode {
        FunctionDefHeaderNode { variable, return_type }
    }

    pub fn variable(&self) -> &VariableRefNode {
        &self.variable
    }

    pub fn return_type(&self) -> &TypeNode {
        &self.return_type
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParamNode {
    name: String,
    param_type: TypeNode,
}

impl FunctionParamNode {
    pub fn new(name: impl Into<String>, param_type: TypeNode) -> FunctionParamNode {
        FunctionParamNode { name: name.into(), param_type }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_type(&self) -> &TypeNode {
        &self.param_type
    }
}

/* Types */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    Ref(TypeRefNode),
    Tuple(TupleTypeNode),
    Maybe(MaybeTypeNode),
    List(ListTypeNode),
    Struct(StructTypeNode),
}

/// A use of a named type, possibly qualified by a namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRefNode {
    #[serde(default, skip_serializing_if = "Namespace::is_unqualified")]
    namespace: Namespace,
    ident: String,
}

impl TypeRefNode {
    pub fn new(namespace: Namespace, ident: impl Into<String>) -> TypeRefNode {
        TypeRefNode { namespace, ident: ident.into() }
    }

    pub fn unqualified(ident: impl Into<String>) -> TypeRefNode {
        TypeRefNode::new(Namespace::unqualified(), ident)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn local_ident(&self) -> &str {
        &self.ident
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleTypeNode {
    members: Vec<TypeNode>,
}

impl TupleTypeNode {
    pub fn new(members: Vec<TypeNode>) -> TupleTypeNode {
        TupleTypeNode { members }
    }

    pub fn members(&self) -> &[TypeNode] {
        &self.members
    }
}

/// A type that may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaybeTypeNode {
    base: Box<TypeNode>,
}

impl MaybeTypeNode {
    pub fn new(base: TypeNode) -> MaybeTypeNode {
        MaybeTypeNode { base: Box::new(base) }
    }

    pub fn base(&self) -> &TypeNode {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListTypeNode {
    base: Box<TypeNode>,
}

impl ListTypeNode {
    pub fn new(base: TypeNode) -> ListTypeNode {
        ListTypeNode { base: Box::new(base) }
    }

    pub fn base(&self) -> &TypeNode {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructTypeNode {
    pairs: Vec<StructTypePairNode>,
}

impl StructTypeNode {
    pub fn new(pairs: Vec<StructTypePairNode>) -> StructTypeNode {
        StructTypeNode { pairs }
    }

    pub fn pairs(&self) -> &[StructTypePairNode] {
        &self.pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructTypePairNode {
    ident: String,
    member_type: TypeNode,
}

impl StructTypePairNode {
    pub fn new(ident: impl Into<String>, member_type: TypeNode) -> StructTypePairNode {
        StructTypePairNode { ident: ident.into(), member_type }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn member_type(&self) -> &TypeNode {
        &self.member_type
    }
}

/* Conversions into the family types, so trees can be written without wrapping
 * every node by hand. */

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}

impl From<FunctionCallNode> for Expression {
    fn from(value: FunctionCallNode) -> Self {
        Expression::FunctionCall(value)
    }
}

impl From<VariableRefNode> for Expression {
    fn from(value: VariableRefNode) -> Self {
        Expression::VariableRef(value)
    }
}

impl From<LambdaFunctionNode> for Expression {
    fn from(value: LambdaFunctionNode) -> Self {
        Expression::LambdaFunction(value)
    }
}

impl From<ElvisNode> for Expression {
    fn from(value: ElvisNode) -> Self {
        Expression::Elvis(value)
    }
}

impl From<BlockNode> for Expression {
    fn from(value: BlockNode) -> Self {
        Expression::Block(value)
    }
}

impl From<NumberNode> for Expression {
    fn from(value: NumberNode) -> Self {
        Expression::Literal(Literal::Number(value))
    }
}

impl From<StringNode> for Expression {
    fn from(value: StringNode) -> Self {
        Expression::Literal(Literal::String(value))
    }
}

impl From<AtomNode> for Expression {
    fn from(value: AtomNode) -> Self {
        Expression::Literal(Literal::Atom(value))
    }
}

impl From<TupleNode> for Expression {
    fn from(value: TupleNode) -> Self {
        Expression::Literal(Literal::Tuple(value))
    }
}

impl From<ListNode> for Expression {
    fn from(value: ListNode) -> Self {
        Expression::Literal(Literal::List(value))
    }
}

impl From<StructNode> for Expression {
    fn from(value: StructNode) -> Self {
        Expression::Literal(Literal::Struct(value))
    }
}

impl From<VariableDefNode> for Definition {
    fn from(value: VariableDefNode) -> Self {
        Definition::Variable(value)
    }
}

impl From<FunctionDefNode> for Definition {
    fn from(value: FunctionDefNode) -> Self {
        Definition::Function(value)
    }
}

impl From<TypeDefNode> for Definition {
    fn from(value: TypeDefNode) -> Self {
        Definition::Type(value)
    }
}

impl From<TypeRefNode> for TypeNode {
    fn from(value: TypeRefNode) -> Self {
        TypeNode::Ref(value)
    }
}

impl From<TupleTypeNode> for TypeNode {
    fn from(value: TupleTypeNode) -> Self {
        TypeNode::Tuple(value)
    }
}

impl From<MaybeTypeNode> for TypeNode {
    fn from(value: MaybeTypeNode) -> Self {
        TypeNode::Maybe(value)
    }
}

impl From<ListTypeNode> for TypeNode {
    fn from(value: ListTypeNode) -> Self {
        TypeNode::List(value)
    }
}

impl From<StructTypeNode> for TypeNode {
    fn from(value: StructTypeNode) -> Self {
        TypeNode::Struct(value)
    }
}
