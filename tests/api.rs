use std::path::Path;

use sprig::ast::*;
use sprig::{
    collect_stats, pretty_error_message, print_tree, print_tree_with, read_tree, read_tree_file, LoadError, PrintOptions,
    TreeDisplay,
};

#[test]
fn missing_file_names_the_path() {
    let error = read_tree_file(Path::new("samples/does/not/exist.json")).expect_err("No such file");

    assert!(matches!(error, LoadError::Io { .. }));
    assert!(error.to_string().contains("exist.json"), "{error}");
}

#[test]
fn malformed_json_is_reported() {
    let error = read_tree(r#"{"root": {"number": }"#).expect_err("Not JSON");

    assert!(matches!(error, LoadError::Json(_)));
    assert!(pretty_error_message(&error).starts_with("Error occurred"));
}

#[test]
fn unknown_node_kind_is_rejected() {
    let error = read_tree(r#"{"root": {"while_loop": []}}"#).expect_err("No such kind");

    assert!(matches!(error, LoadError::Json(_)));
}

#[test]
fn empty_namespace_path_is_rejected() {
    let error = read_tree(r#"{"root": {"variable_ref": {"namespace": [], "ident": "x"}}}"#).expect_err("Empty path");

    assert!(error.to_string().contains("at least one segment"), "{error}");
}

#[test]
fn trailing_input_is_rejected() {
    let error = read_tree(r#"{"root": {"number": 1}} {"root": {"number": 2}}"#).expect_err("Two documents");

    assert!(matches!(error, LoadError::Json(_)));
}

#[test]
fn display_matches_print_with() {
    let file = FileNode::new(ListNode::new(vec![AtomNode::new("a").into()]).into());
    let options = PrintOptions { indent: "..".to_string() };

    let displayed = TreeDisplay::with_options(&file, options.clone()).to_string();

    assert_eq!(displayed, print_tree_with(&file, &options));
    assert_eq!(displayed, "file\n..list\n....atom\n");
}

/* Deep trees */

const DEPTH: usize = 5_000;

fn nested_tuples(depth: usize) -> FileNode {
    let mut expression: Expression = NumberNode::new(0.0).into();
    for _ in 0..depth {
        expression = TupleNode::new(vec![expression]).into();
    }
    FileNode::new(expression)
}

fn nested_maybes(depth: usize) -> TypeNode {
    let mut node: TypeNode = TypeRefNode::unqualified("T").into();
    for _ in 0..depth {
        node = MaybeTypeNode::new(node).into();
    }
    node
}

/// Building and dropping these trees is itself recursive, so give the test room
/// for that. Dispatch must cope on its own.
fn with_big_stack(test: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(test)
        .expect("Thread spawns")
        .join()
        .expect("Test thread succeeds");
}

#[test]
fn deeply_nested_expressions() {
    with_big_stack(|| {
        let file = nested_tuples(DEPTH);

        let stats = collect_stats(&file);

        // file, DEPTH tuples, one number
        assert_eq!(stats.nodes, DEPTH + 2);
        assert_eq!(stats.max_depth, DEPTH + 1);
    });
}

#[test]
fn deeply_nested_types() {
    with_big_stack(|| {
        let param = FunctionParamNode::new("p", nested_maybes(DEPTH));
        let file = FileNode::new(LambdaFunctionNode::new(vec![param], TupleNode::new(vec![]).into()).into());

        let stats = collect_stats(&file);

        // file, lambda, param, DEPTH maybes, type_ref, namespace, tuple
        assert_eq!(stats.nodes, DEPTH + 6);
        assert_eq!(stats.max_depth, DEPTH + 4);
        assert_eq!(stats.namespaces, 1);
    });
}

#[test]
fn deeply_nested_json_loads_and_prints() {
    const JSON_DEPTH: usize = 1_000;

    with_big_stack(|| {
        let input = format!(
            r#"{{"root": {}{{"number": 0}}{}}}"#,
            r#"{"tuple": ["#.repeat(JSON_DEPTH),
            "]}".repeat(JSON_DEPTH),
        );

        let file = read_tree(&input).expect("Deep tree loads");
        let printed = print_tree(&file);

        // file, JSON_DEPTH tuples, one number
        assert_eq!(printed.lines().count(), JSON_DEPTH + 2);
        assert_eq!(printed.lines().last(), Some(format!("{}number", "| ".repeat(JSON_DEPTH + 1)).as_str()));
        assert_eq!(file, nested_tuples(JSON_DEPTH));
    });
}
