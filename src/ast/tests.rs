use test_generator::test_resources;

use std::io::Read;

use super::*;

fn read_file(resource: &str) -> String {
    let mut file = std::fs::File::open(resource).expect("File opens");
    let mut input = String::new();
    file.read_to_string(&mut input).expect("Read successful");
    input
}

fn kinds(nodes: &[AnyNode]) -> Vec<NodeKind> {
    nodes.iter().map(AnyNode::kind).collect()
}

fn int_type() -> TypeNode {
    TypeRefNode::unqualified("Int").into()
}

/// Every reference in a well formed tree carries a non-empty local identifier,
/// and every namespace chain ends at a root.
fn validate_references(node: AnyNode) {
    match node {
        AnyNode::VariableRef(_) | AnyNode::TypeRef(_) => {
            assert!(!node.ident().expect("references carry an identifier").is_empty());
        }
        AnyNode::Namespace(namespace) => {
            assert!(namespace.ancestors().last().expect("at least one segment").parent().is_none());
        }
        _ => assert!(node.ident().is_none()),
    }

    for child in node.children() {
        validate_references(child);
    }
}

#[test_resources("samples/successful/**/*.json")]
fn samples_are_well_formed(resource: &str) {
    let input = read_file(resource);

    let file: FileNode = serde_json::from_str(&input).expect("Sample decodes");

    validate_references(AnyNode::File(&file));
}

/* Namespaces */

#[test]
fn unqualified_is_a_single_shared_value() {
    let first = Namespace::unqualified();
    let second = VariableRefNode::unqualified("x").namespace().clone();

    assert!(first.ptr_eq(&second));
    assert!(first.is_unqualified());
    assert!(first.is_empty());
    assert_eq!(first.ident(), "");
    assert!(first.parent().is_none());
    assert_eq!(Namespace::default(), first);
}

#[test]
fn explicit_empty_namespace_is_not_unqualified() {
    let explicit = Namespace::root("");

    assert!(explicit.is_empty());
    assert!(!explicit.is_unqualified());
    assert_ne!(explicit, Namespace::unqualified());
    assert_eq!(explicit, Namespace::root(""));
    assert_eq!(explicit.to_string(), Namespace::unqualified().to_string());
}

#[test]
fn chain_walks_inner_to_outer() {
    let a = Namespace::root("a");
    let b = Namespace::child(&a, "b");
    let c = Namespace::child(&b, "c");

    let idents: Vec<&str> = c.ancestors().map(Namespace::ident).collect();

    assert_eq!(idents, ["c", "b", "a"]);
    assert_eq!(c.path(), ["a", "b", "c"]);
    assert_eq!(c.depth(), 2);
    assert_eq!(a.depth(), 0);
    assert_eq!(c.to_string(), "a.b.c");
    assert!(c.parent().expect("c has a parent").ptr_eq(&b));
    assert!(!c.is_empty());
}

#[test]
fn from_path_builds_root_first() {
    let built = Namespace::from_path(&["std", "io"]).expect("Non-empty path");

    assert_eq!(built.ident(), "io");
    assert_eq!(built.parent().map(Namespace::ident), Some("std"));
    assert_eq!(built, Namespace::child(&Namespace::root("std"), "io"));
    assert!(Namespace::from_path::<&str>(&[]).is_none());
}

#[test]
fn table_shares_chains_and_prefixes() {
    let mut table = NamespaceTable::new();

    let ab = table.intern(&["a", "b"]);
    let ab_again = table.intern(&["a", "b"]);
    let ac = table.intern(&["a", "c"]);

    assert!(ab.ptr_eq(&ab_again));
    assert!(!ab.ptr_eq(&ac));
    assert!(ab.parent().expect("b sits in a").ptr_eq(ac.parent().expect("c sits in a")));
    assert!(table.get(&["a"]).expect("prefix was interned").ptr_eq(ab.parent().expect("b sits in a")));
    assert_eq!(table.len(), 3);
}

#[test]
fn table_maps_empty_path_to_unqualified() {
    let mut table = NamespaceTable::new();

    assert!(table.intern::<&str>(&[]).is_unqualified());
    assert!(table.is_empty());
    assert!(table.get(&["missing"]).is_none());
}

/* Nodes */

#[test]
fn constructors_keep_what_they_are_given() {
    let call = FunctionCallNode::new(
        VariableRefNode::unqualified("f").into(),
        vec![NumberNode::new(1.0).into(), StringNode::new("two").into(), AtomNode::new("three").into()],
    );

    let Expression::VariableRef(callee) = call.function() else { panic!("callee is a variable reference") };
    assert_eq!(callee.local_ident(), "f");
    assert_eq!(call.arguments().len(), 3);
    assert_eq!(call.arguments()[0], Expression::Literal(Literal::Number(NumberNode::new(1.0))));

    let pair = StructPairNode::new("x", StringNode::new("value").into());
    assert_eq!(pair.ident(), "x");
    assert_eq!(pair.value(), &Expression::from(StringNode::new("value")));

    let param = FunctionParamNode::new("n", MaybeTypeNode::new(int_type()).into());
    assert_eq!(param.name(), "n");
    let TypeNode::Maybe(maybe) = param.param_type() else { panic!("parameter type is a maybe") };
    assert_eq!(maybe.base(), &int_type());
}

#[test]
fn children_follow_declaration_order() {
    let function = FunctionDefNode::new(
        FunctionDefHeaderNode::new(VariableRefNode::unqualified("f"), int_type()),
        vec![FunctionParamNode::new("a", int_type()), FunctionParamNode::new("b", int_type())],
        NumberNode::new(0.0).into(),
    );
    let function = Definition::from(function);

    assert_eq!(
        kinds(&AnyNode::from(&function).children()),
        [NodeKind::FunctionDefHeader, NodeKind::FunctionParam, NodeKind::FunctionParam, NodeKind::Number]
    );

    let lambda = LambdaFunctionNode::new(vec![FunctionParamNode::new("a", int_type())], TupleNode::new(vec![]).into());

    assert_eq!(kinds(&AnyNode::LambdaFunction(&lambda).children()), [NodeKind::FunctionParam, NodeKind::Tuple]);

    let variable = VariableDefNode::new(
        VariableRefNode::unqualified("v"),
        ListTypeNode::new(int_type()).into(),
        ListNode::new(vec![]).into(),
    );

    assert_eq!(
        kinds(&AnyNode::VariableDef(&variable).children()),
        [NodeKind::VariableRef, NodeKind::ListType, NodeKind::List]
    );
}

#[test]
fn leaves_have_no_children() {
    assert!(AnyNode::Number(&NumberNode::new(1.0)).children().is_empty());
    assert!(AnyNode::String(&StringNode::new("")).children().is_empty());
    assert!(AnyNode::Atom(&AtomNode::new("a")).children().is_empty());
    assert!(AnyNode::Namespace(&Namespace::unqualified()).children().is_empty());
}

#[test]
fn namespace_child_is_its_parent() {
    let type_ref = TypeRefNode::new(Namespace::from_path(&["a", "b"]).expect("Non-empty path"), "T");

    let below_ref = AnyNode::TypeRef(&type_ref).children();
    assert_eq!(below_ref.len(), 1);
    assert_eq!(below_ref[0].ident(), Some("b"));

    let below_b = below_ref[0].children();
    assert_eq!(below_b.len(), 1);
    assert_eq!(below_b[0].ident(), Some("a"));
    assert!(below_b[0].children().is_empty());
}

#[test]
fn kind_names_are_snake_case() {
    assert_eq!(NodeKind::FunctionDefHeader.name(), "function_def_header");
    assert_eq!(NodeKind::StructTypePair.to_string(), "struct_type_pair");
    assert_eq!(AnyNode::File(&FileNode::new(NumberNode::new(1.0).into())).kind().name(), "file");
}

/* Serialization */

#[test]
fn json_round_trip() {
    let file = FileNode::new(
        BlockNode::new(
            TypeDefNode::new(
                TypeRefNode::new(Namespace::root("geo"), "Point"),
                StructTypeNode::new(vec![StructTypePairNode::new(
                    "x",
                    TupleTypeNode::new(vec![int_type(), int_type()]).into(),
                )])
                .into(),
            )
            .into(),
            ElvisNode::new(VariableRefNode::unqualified("p").into(), AtomNode::new("none").into()).into(),
        )
        .into(),
    );

    let json = serde_json::to_string(&file).expect("Tree encodes");
    let decoded: FileNode = serde_json::from_str(&json).expect("Tree decodes");

    assert_eq!(decoded, file);
}

#[test]
fn missing_namespace_means_unqualified() {
    let decoded: VariableRefNode = serde_json::from_str(r#"{"ident": "x"}"#).expect("Reference decodes");

    assert!(decoded.namespace().is_unqualified());
    assert_eq!(serde_json::to_string(&decoded).expect("Reference encodes"), r#"{"ident":"x"}"#);
}

#[test]
fn explicit_empty_namespace_survives_encoding() {
    let decoded: TypeRefNode =
        serde_json::from_str(r#"{"namespace": [""], "ident": "T"}"#).expect("Reference decodes");

    assert!(decoded.namespace().is_empty());
    assert!(!decoded.namespace().is_unqualified());
    assert_eq!(serde_json::to_string(&decoded).expect("Reference encodes"), r#"{"namespace":[""],"ident":"T"}"#);
}

#[test]
fn empty_namespace_path_is_rejected() {
    let result = serde_json::from_str::<VariableRefNode>(r#"{"namespace": [], "ident": "x"}"#);

    assert!(result.is_err());
}

#[test]
fn literals_are_tagged_by_their_own_kind() {
    let expression: Expression = serde_json::from_str(r#"{"tuple": [{"number": 1}, {"atom": "a"}]}"#).expect("Literal decodes");

    assert_eq!(expression, TupleNode::new(vec![NumberNode::new(1.0).into(), AtomNode::new("a").into()]).into());
    assert_eq!(serde_json::to_string(&Expression::from(NumberNode::new(2.5))).expect("Literal encodes"), r#"{"number":2.5}"#);
}
