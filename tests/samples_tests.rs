use xtree::ast::NodeKind;
use xtree::errors::XTreeResult;
use xtree::printer::{render, TreePrinter};
use xtree::samples::Sample;
use xtree::visitor::NodeCounter;

const FACTORIAL: &str = "\
36: Program
35:   Block
25:     FunctionDecl  Label: factorial
1:        IntType
2:        Id: factorial  Dec: 37
6:        Formals
5:          Decl
3:            IntType
4:            Id: n  Dec: 37  Addr: 0
24:       Block
23:         If  Label: L1
9:            RelOp: <=  Dec: 38
7:              Id: n  Dec: 5  Addr: 0
8:              Int: 1  Dec: 37
12:           Block
11:             Return
10:               Int: 1  Dec: 37
22:           Block  Label: L2
21:             Return
20:               MultOp: *  Dec: 37
13:                 Id: n  Dec: 5  Addr: 0
19:                 Call  Dec: 37
14:                   Id: factorial  Dec: 25
18:                   ActualArgs
17:                     AddOp: -  Dec: 37
15:                       Id: n  Dec: 5  Addr: 0
16:                       Int: 1  Dec: 37
28:     Decl
26:       IntType
27:       Id: i  Dec: 37  Addr: 0
34:     Assign
29:       Id: i  Dec: 28  Addr: 0
33:       Call  Dec: 37
30:         Id: factorial  Dec: 25
32:         ActualArgs
31:           Int: 5  Dec: 37
";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_factorial_sample_output() -> XTreeResult<()> {
        let tree = Sample::Factorial.build()?;
        assert_eq!(render(&tree.ast, tree.root)?, FACTORIAL);
        Ok(())
    }

    #[test]
    fn test_one_line_per_node() -> XTreeResult<()> {
        for sample in [Sample::Factorial, Sample::Outline, Sample::Nested] {
            let tree = sample.build()?;
            let counter = NodeCounter::count(&tree.ast, tree.root)?;

            let mut printer = TreePrinter::new(Vec::new());
            printer.print_tree(&tree.ast, tree.root)?;
            assert_eq!(printer.lines_written(), counter.nodes, "sample {}", sample);

            let output = String::from_utf8(printer.into_inner()).unwrap();
            assert_eq!(output.lines().count(), counter.nodes, "sample {}", sample);
        }
        Ok(())
    }

    #[test]
    fn test_detached_type_nodes_are_not_printed() -> XTreeResult<()> {
        let tree = Sample::Factorial.build()?;
        let counter = NodeCounter::count(&tree.ast, tree.root)?;
        assert_eq!(tree.ast.len(), counter.nodes + 2);

        let output = render(&tree.ast, tree.root)?;
        assert!(!output.contains("BoolType"));
        assert!(!output.lines().any(|line| line.starts_with("37:") || line.starts_with("38:")));
        Ok(())
    }

    #[test]
    fn test_outline_sample_with_root_label() -> XTreeResult<()> {
        let tree = Sample::Outline.build()?;
        let mut printer = TreePrinter::new(Vec::new());
        printer.print("root", &tree.ast, tree.root)?;
        let output = String::from_utf8(printer.into_inner()).unwrap();

        let expected = "\
1:  root
2:    Decl
3:    Block
4:      Assign
5:      Call
6:      Return
7:    Decl
";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_nested_sample_depths() -> XTreeResult<()> {
        let tree = Sample::Nested.build()?;
        assert!(matches!(tree.ast.kind(tree.root)?, NodeKind::Program));

        let output = render(&tree.ast, tree.root)?;
        let indents: Vec<usize> = output
            .lines()
            .map(|line| {
                let body = &line[4..];
                body.len() - body.trim_start().len()
            })
            .collect();
        assert_eq!(indents, vec![0, 2, 4]);
        Ok(())
    }
}
