use test_generator::test_resources;

use std::io::Read;
use std::path::Path;

use sprig::ast::{FileNode, NumberNode};
use sprig::{print_tree, read_tree, read_tree_file, write_tree, LoadError};

fn read_file(resource: &str) -> String {
    let mut file = std::fs::File::open(resource).expect("File opens");
    let mut input = String::new();
    file.read_to_string(&mut input).expect("Read successful");
    input
}

/// Each sample tree sits next to a `.expected` file holding its printed form.
#[test_resources("samples/**/*.json")]
fn print_sample(resource: &str) {
    let input = read_file(resource);
    let expected_output = read_file(&resource.replace(".json", ".expected"));

    let file = read_tree(&input).expect("Sample loads");
    let output = print_tree(&file);

    println!("{output}");

    assert_eq!(expected_output, output);
}

#[test_resources("samples/**/*.json")]
fn sample_survives_reencoding(resource: &str) {
    let file = read_tree_file(Path::new(resource)).expect("Sample loads");

    let reencoded = write_tree(&file).expect("Tree encodes");
    let reloaded = read_tree(&reencoded).expect("Encoded tree loads");

    assert_eq!(reloaded, file);
    assert_eq!(print_tree(&reloaded), print_tree(&file));
}

#[test]
fn non_finite_numbers_are_not_encoded() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let file = FileNode::new(NumberNode::new(value).into());

        let error = write_tree(&file).expect_err("JSON has no form for this number");

        assert!(matches!(error, LoadError::Encode(_)), "{error:?}");
    }
}

#[test]
fn finite_numbers_survive_reencoding() {
    for value in [0.5, -0.0, 1e10, -123.25] {
        let file = FileNode::new(NumberNode::new(value).into());

        let reloaded = read_tree(&write_tree(&file).expect("Finite numbers encode")).expect("Encoded tree loads");

        assert_eq!(reloaded, file);
    }
}
