//! Renders a tree as indented text, one line per node.
//!
//! ```text
//! file
//! | function_call
//! | | variable_ref (print)
//! | | | namespace ()
//! | | string
//! ```
//!
//! Each line is the node's kind name, plus the identifier in parentheses for
//! namespaces and references. A reference shows only its local identifier; its
//! namespace chain follows on the lines below it.

use crate::ast::*;
use crate::visit::{Accept, Visitor};

use std::fmt::Display;
use std::io::{self, Write};

/// Settings for [`print_tree_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Written once per level of depth in front of each line.
    pub indent: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions { indent: "| ".to_string() }
    }
}

/// The printing traversal. Each handler writes its line and returns a printer one
/// level deeper for the node's children.
#[derive(Debug, Clone, Copy)]
pub struct TreePrinter<'a> {
    depth: usize,
    indent: &'a str,
}

impl<'a> TreePrinter<'a> {
    pub fn new(indent: &'a str) -> TreePrinter<'a> {
        TreePrinter { depth: 0, indent }
    }

    fn line(&self, out: &mut String, kind: NodeKind, ident: Option<&str>) -> TreePrinter<'a> {
        for _ in 0..self.depth {
            out.push_str(self.indent);
        }
        out.push_str(kind.name());
        if let Some(ident) = ident {
            out.push_str(" (");
            out.push_str(ident);
            out.push(')');
        }
        out.push('\n');

        TreePrinter { depth: self.depth + 1, indent: self.indent }
    }
}

impl<'a> Visitor for TreePrinter<'a> {
    type Output = String;

    fn visit_file(&self, _: &FileNode, out: &mut String) -> Self {
        self.line(out, NodeKind::File, None)
    }

    fn visit_function_call(&self, _: &FunctionCallNode, out: &mut String) -> Self {
        self.line(out, NodeKind::FunctionCall, None)
    }

    fn visit_namespace(&self, node: &Namespace, out: &mut String) -> Self {
        self.line(out, NodeKind::Namespace, Some(node.ident()))
    }

    fn visit_variable_ref(&self, node: &VariableRefNode, out: &mut String) -> Self {
        self.line(out, NodeKind::VariableRef, Some(node.local_ident()))
    }

    fn visit_lambda_function(&self, _: &LambdaFunctionNode, out: &mut String) -> Self {
        self.line(out, NodeKind::LambdaFunction, None)
    }

    fn visit_elvis(&self, _: &ElvisNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Elvis, None)
    }

    fn visit_block(&self, _: &BlockNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Block, None)
    }

    fn visit_number(&self, _: &NumberNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Number, None)
    }

    fn visit_string(&self, _: &StringNode, out: &mut String) -> Self {
        self.line(out, NodeKind::String, None)
    }

    fn visit_atom(&self, _: &AtomNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Atom, None)
    }

    fn visit_tuple(&self, _: &TupleNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Tuple, None)
    }

    fn visit_list(&self, _: &ListNode, out: &mut String) -> Self {
        self.line(out, NodeKind::List, None)
    }

    fn visit_struct(&self, _: &StructNode, out: &mut String) -> Self {
        self.line(out, NodeKind::Struct, None)
    }

    fn visit_struct_pair(&self, _: &StructPairNode, out: &mut String) -> Self {
        self.line(out, NodeKind::StructPair, None)
    }

    fn visit_variable_def(&self, _: &VariableDefNode, out: &mut String) -> Self {
        self.line(out, NodeKind::VariableDef, None)
    }

    fn visit_function_def(&self, _: &FunctionDefNode, out: &mut String) -> Self {
        self.line(out, NodeKind::FunctionDef, None)
    }

    fn visit_type_def(&self, _: &TypeDefNode, out: &mut String) -> Self {
        self.line(out, NodeKind::TypeDef, None)
    }

    fn visit_function_def_header(&self, _: &FunctionDefHeaderNode, out: &mut String) -> Self {
        self.line(out, NodeKind::FunctionDefHeader, None)
    }

    fn visit_function_param(&self, _: &FunctionParamNode, out: &mut String) -> Self {
        self.line(out, NodeKind::FunctionParam, None)
    }

    fn visit_type_ref(&self, node: &TypeRefNode, out: &mut String) -> Self {
        self.line(out, NodeKind::TypeRef, Some(node.local_ident()))
    }

    fn visit_tuple_type(&self, _: &TupleTypeNode, out: &mut String) -> Self {
        self.line(out, NodeKind::TupleType, None)
    }

    fn visit_maybe_type(&self, _: &MaybeTypeNode, out: &mut String) -> Self {
        self.line(out, NodeKind::MaybeType, None)
    }

    fn visit_list_type(&self, _: &ListTypeNode, out: &mut String) -> Self {
        self.line(out, NodeKind::ListType, None)
    }

    fn visit_struct_type(&self, _: &StructTypeNode, out: &mut String) -> Self {
        self.line(out, NodeKind::StructType, None)
    }

    fn visit_struct_type_pair(&self, _: &StructTypePairNode, out: &mut String) -> Self {
        self.line(out, NodeKind::StructTypePair, None)
    }
}

/// Prints a tree with the default indentation.
pub fn print_tree(file: &FileNode) -> String {
    print_tree_with(file, &PrintOptions::default())
}

pub fn print_tree_with(file: &FileNode, options: &PrintOptions) -> String {
    print_node(file, options)
}

/// Prints any node as the root of its own tree, at depth zero.
pub fn print_node<N: Accept + ?Sized>(node: &N, options: &PrintOptions) -> String {
    let mut out = String::new();
    node.accept(&TreePrinter::new(&options.indent), &mut out);

    log::trace!("printed tree of {} lines", out.lines().count());

    out
}

/// Prints a tree straight into `writer`.
///
/// A reader that hangs up early (`sprig tree.json | head`) is not an error: the
/// rest of the output is simply dropped.
pub fn write_printed_tree<W: Write>(writer: &mut W, file: &FileNode, options: &PrintOptions) -> io::Result<()> {
    let printed = print_tree_with(file, options);

    match writer.write_all(printed.as_bytes()).and_then(|()| writer.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Defers printing until the value is formatted.
///
/// ```ignore
/// println!("{}", TreeDisplay::new(&file));
/// ```
pub struct TreeDisplay<'a> {
    file: &'a FileNode,
    options: PrintOptions,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(file: &'a FileNode) -> TreeDisplay<'a> {
        TreeDisplay { file, options: PrintOptions::default() }
    }

    pub fn with_options(file: &'a FileNode, options: PrintOptions) -> TreeDisplay<'a> {
        TreeDisplay { file, options }
    }
}

impl Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&print_tree_with(self.file, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Expression {
        NumberNode::new(value).into()
    }

    #[test]
    fn number_file() {
        let file = FileNode::new(num(3.0));

        assert_eq!(print_tree(&file), "file\n| number\n");
    }

    #[test]
    fn unqualified_variable_shows_empty_namespace() {
        let file = FileNode::new(VariableRefNode::unqualified("x").into());

        assert_eq!(print_tree(&file), "file\n| variable_ref (x)\n| | namespace ()\n");
    }

    #[test]
    fn list_elements_share_a_depth() {
        let file = FileNode::new(ListNode::new(vec![num(1.0), num(2.0)]).into());

        assert_eq!(print_tree(&file), "file\n| list\n| | number\n| | number\n");
    }

    #[test]
    fn qualified_type_ref_prints_chain_inner_first() {
        let a = Namespace::root("a");
        let b = Namespace::child(&a, "b");
        let type_ref = TypeRefNode::new(b, "T");

        let printed = print_node(&type_ref, &PrintOptions::default());

        assert_eq!(printed, "type_ref (T)\n| namespace (b)\n| namespace (a)\n");
    }

    #[test]
    fn custom_indent() {
        let file = FileNode::new(TupleNode::new(vec![StringNode::new("s").into()]).into());
        let options = PrintOptions { indent: "  ".to_string() };

        assert_eq!(print_tree_with(&file, &options), "file\n  tuple\n    string\n");
    }

    #[test]
    fn printing_twice_is_identical() {
        let file = FileNode::new(
            FunctionCallNode::new(
                VariableRefNode::unqualified("f").into(),
                vec![AtomNode::new("ok").into(), num(1.5)],
            )
            .into(),
        );

        assert_eq!(print_tree(&file), print_tree(&file));
        assert_eq!(TreeDisplay::new(&file).to_string(), print_tree(&file));
    }

    /// Accepts `limit` bytes, then behaves like a pipe whose reader went away.
    struct HungUp {
        taken: Vec<u8>,
        limit: usize,
    }

    impl Write for HungUp {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.taken.len();
            if room == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let count = room.min(buf.len());
            self.taken.extend_from_slice(&buf[..count]);
            Ok(count)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_printed_tree_matches_print_tree() {
        let file = FileNode::new(ListNode::new(vec![num(1.0)]).into());
        let mut buffer = vec![];

        write_printed_tree(&mut buffer, &file, &PrintOptions::default()).expect("Vec never fails");

        assert_eq!(String::from_utf8(buffer).expect("Printed text is UTF-8"), print_tree(&file));
    }

    #[test]
    fn closed_reader_is_not_an_error() {
        let file = FileNode::new(ListNode::new(vec![num(1.0), num(2.0)]).into());
        let mut pipe = HungUp { taken: vec![], limit: 5 };

        write_printed_tree(&mut pipe, &file, &PrintOptions::default()).expect("Broken pipe is swallowed");

        assert_eq!(pipe.taken, b"file\n");
    }

    #[test]
    fn other_write_errors_are_returned() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let file = FileNode::new(num(1.0));

        let err = write_printed_tree(&mut Full, &file, &PrintOptions::default()).expect_err("Not a broken pipe");

        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn print_node_on_a_file_is_print_tree_with() {
        let file = FileNode::new(AtomNode::new("a").into());
        let options = PrintOptions { indent: "-".to_string() };

        assert_eq!(print_node(&file, &options), print_tree_with(&file, &options));
    }

    #[test]
    fn explicit_empty_namespace_renders_like_unqualified() {
        let explicit = FileNode::new(VariableRefNode::new(Namespace::root(""), "x").into());
        let implicit = FileNode::new(VariableRefNode::unqualified("x").into());

        assert_eq!(print_tree(&explicit), print_tree(&implicit));
    }
}
