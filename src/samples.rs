// Prebuilt trees standing in for the output of the front end. Each one is
// shaped the way the parser builds it and decorated the way the later
// passes leave it (types, labels, frame offsets).

use std::fmt;

use clap::ValueEnum;
use log::debug;

use crate::ast::{Ast, NodeId, NodeKind};
use crate::errors::XTreeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// Recursive factorial program with types, labels and frame offsets
    Factorial,
    /// Root with three kids, the middle one holding three more
    Outline,
    /// Program, Block and Decl nested in a single chain
    Nested,
}

impl Sample {
    pub fn build(self) -> XTreeResult<SampleTree> {
        debug!("building sample tree '{}'", self);
        match self {
            Sample::Factorial => factorial(),
            Sample::Outline => outline(),
            Sample::Nested => nested(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sample::Factorial => "factorial",
            Sample::Outline => "outline",
            Sample::Nested => "nested",
        };
        f.write_str(name)
    }
}

pub struct SampleTree {
    pub ast: Ast,
    pub root: NodeId,
}

fn node(ast: &mut Ast, kind: NodeKind, children: &[NodeId]) -> XTreeResult<NodeId> {
    ast.add_with_children(kind, children)
}

fn id_at(ast: &mut Ast, name: &str, offset: Option<u32>) -> XTreeResult<NodeId> {
    let id = ast.add(NodeKind::id(name));
    if let Some(offset) = offset {
        ast.set_frame_offset(id, offset)?;
    }
    Ok(id)
}

// program {
//   int factorial(int n) {
//     if (n <= 1) then { return 1 } else { return n * factorial(n - 1) }
//   }
//   int i
//   i = factorial(5)
// }
fn factorial() -> XTreeResult<SampleTree> {
    let mut ast = Ast::new();

    // int factorial(int n)
    let ret_type = ast.add(NodeKind::IntType);
    let fn_name = id_at(&mut ast, "factorial", None)?;
    let formal_type = ast.add(NodeKind::IntType);
    let formal_name = id_at(&mut ast, "n", Some(0))?;
    let formal = node(&mut ast, NodeKind::Decl, &[formal_type, formal_name])?;
    let formals = node(&mut ast, NodeKind::Formals, &[formal])?;

    // n <= 1
    let cond_lhs = id_at(&mut ast, "n", Some(0))?;
    let cond_rhs = ast.add(NodeKind::int("1"));
    let cond = node(&mut ast, NodeKind::rel_op("<="), &[cond_lhs, cond_rhs])?;

    // return 1
    let one = ast.add(NodeKind::int("1"));
    let base_return = node(&mut ast, NodeKind::Return, &[one])?;
    let then_block = node(&mut ast, NodeKind::Block, &[base_return])?;

    // return n * factorial(n - 1)
    let factor = id_at(&mut ast, "n", Some(0))?;
    let callee = id_at(&mut ast, "factorial", None)?;
    let minus_lhs = id_at(&mut ast, "n", Some(0))?;
    let minus_rhs = ast.add(NodeKind::int("1"));
    let minus = node(&mut ast, NodeKind::add_op("-"), &[minus_lhs, minus_rhs])?;
    let args = node(&mut ast, NodeKind::ActualArgs, &[minus])?;
    let call = node(&mut ast, NodeKind::Call, &[callee, args])?;
    let product = node(&mut ast, NodeKind::mult_op("*"), &[factor, call])?;
    let rec_return = node(&mut ast, NodeKind::Return, &[product])?;
    let else_block = node(&mut ast, NodeKind::Block, &[rec_return])?;

    let branch = node(&mut ast, NodeKind::If, &[cond, then_block, else_block])?;
    let body = node(&mut ast, NodeKind::Block, &[branch])?;
    let function = node(&mut ast, NodeKind::FunctionDecl, &[ret_type, fn_name, formals, body])?;

    // int i
    let var_type = ast.add(NodeKind::IntType);
    let var_name = id_at(&mut ast, "i", Some(0))?;
    let var_decl = node(&mut ast, NodeKind::Decl, &[var_type, var_name])?;

    // i = factorial(5)
    let target = id_at(&mut ast, "i", Some(0))?;
    let main_callee = id_at(&mut ast, "factorial", None)?;
    let five = ast.add(NodeKind::int("5"));
    let main_args = node(&mut ast, NodeKind::ActualArgs, &[five])?;
    let main_call = node(&mut ast, NodeKind::Call, &[main_callee, main_args])?;
    let assign = node(&mut ast, NodeKind::Assign, &[target, main_call])?;

    let block = node(&mut ast, NodeKind::Block, &[function, var_decl, assign])?;
    let root = node(&mut ast, NodeKind::Program, &[block])?;

    // Shared type nodes built by the type checker; never attached to the tree
    let int_type = ast.add(NodeKind::IntType);
    let bool_type = ast.add(NodeKind::BoolType);

    for declared in [fn_name, formal_name, var_name] {
        ast.decorate(declared, int_type)?;
    }
    for expr in [cond_rhs, one, minus_rhs, five, minus, product, call, main_call] {
        ast.decorate(expr, int_type)?;
    }
    ast.decorate(cond, bool_type)?;
    // uses point back at their declarations
    for used in [cond_lhs, factor, minus_lhs] {
        ast.decorate(used, formal)?;
    }
    for used in [callee, main_callee] {
        ast.decorate(used, function)?;
    }
    ast.decorate(target, var_decl)?;

    ast.set_label(function, "factorial")?;
    ast.set_label(branch, "L1")?;
    ast.set_label(else_block, "L2")?;

    Ok(SampleTree { ast, root })
}

fn outline() -> XTreeResult<SampleTree> {
    let mut ast = Ast::new();
    let root = ast.add(NodeKind::Program);
    let kid1 = ast.add(NodeKind::Decl);
    let kid2 = ast.add(NodeKind::Block);
    let grandkids = [
        ast.add(NodeKind::Assign),
        ast.add(NodeKind::Call),
        ast.add(NodeKind::Return),
    ];
    let kid3 = ast.add(NodeKind::Decl);

    for &grandkid in &grandkids {
        ast.add_child(kid2, grandkid)?;
    }
    for kid in [kid1, kid2, kid3] {
        ast.add_child(root, kid)?;
    }
    Ok(SampleTree { ast, root })
}

fn nested() -> XTreeResult<SampleTree> {
    let mut ast = Ast::new();
    let decl = ast.add(NodeKind::Decl);
    let block = ast.add_with_children(NodeKind::Block, &[decl])?;
    let root = ast.add_with_children(NodeKind::Program, &[block])?;
    Ok(SampleTree { ast, root })
}
