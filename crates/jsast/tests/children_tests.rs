//! Direct-child enumeration: documented slot order, absent-optional and
//! elision skipping, and the generic helpers layered on top.

use jsast::{Ast, LiteralValue, NodeId, NodeKind, Span, UnaryOp};

fn sp() -> Span {
    Span::EMPTY
}

fn name_expr(ast: &mut Ast, text: &str) -> NodeId {
    let name = ast.add_name(sp(), 1, text);
    ast.add_name_expression(sp(), 1, name)
}

fn expr_stmt(ast: &mut Ast, text: &str) -> NodeId {
    let e = name_expr(ast, text);
    ast.add_expression_statement(sp(), 1, e)
}

#[test]
fn if_else_children_in_documented_order() {
    // if (x) { y; } else { z; }
    let mut ast = Ast::new();
    let x = ast.add_name(Span::new(4, 5), 1, "x");
    let condition = ast.add_name_expression(Span::new(4, 5), 1, x);
    let y_stmt = expr_stmt(&mut ast, "y");
    let then_block = ast.add_block(Span::new(7, 13), 1, vec![y_stmt]);
    let z_stmt = expr_stmt(&mut ast, "z");
    let else_block = ast.add_block(Span::new(19, 25), 1, vec![z_stmt]);
    let if_stmt = ast.add_if(Span::new(0, 25), 1, condition, then_block, Some(else_block));

    assert_eq!(
        ast.children(if_stmt),
        vec![condition, then_block, else_block],
        "If enumerates condition, then, otherwise"
    );
    assert_eq!(ast.children(then_block), vec![y_stmt]);
    assert!(ast.validate(if_stmt).is_empty(), "example tree is well formed");
}

#[test]
fn if_without_else_skips_absent_slot() {
    let mut ast = Ast::new();
    let condition = name_expr(&mut ast, "x");
    let then_branch = ast.add_empty(sp(), 1);
    let if_stmt = ast.add_if(sp(), 1, condition, then_branch, None);

    assert_eq!(ast.children(if_stmt), vec![condition, then_branch]);
}

#[test]
fn array_elision_keeps_slot_but_skips_enumeration() {
    // [1, , 3]
    let mut ast = Ast::new();
    let one = ast.add_literal(sp(), 1, LiteralValue::Number(1.0), "1");
    let three = ast.add_literal(sp(), 1, LiteralValue::Number(3.0), "3");
    let array = ast.add_array(sp(), 1, vec![Some(one), None, Some(three)]);

    assert_eq!(ast.array_data(array).elements.len(), 3, "elision slot survives");
    assert_eq!(ast.array_data(array).elements[1], None);
    assert_eq!(ast.children(array), vec![one, three]);
}

#[test]
fn for_enumerates_present_slots_then_body() {
    let mut ast = Ast::new();
    let body = ast.add_empty(sp(), 1);
    let bare = ast.add_for(sp(), 1, None, None, None, body);
    assert_eq!(ast.children(bare), vec![body], "for(;;) has only its body");

    let condition = name_expr(&mut ast, "c");
    let update = name_expr(&mut ast, "u");
    let body2 = ast.add_empty(sp(), 1);
    let partial = ast.add_for(sp(), 1, None, Some(condition), Some(update), body2);
    assert_eq!(ast.children(partial), vec![condition, update, body2]);
}

#[test]
fn try_enumerates_block_handler_finalizer() {
    let mut ast = Ast::new();
    let block = ast.add_block(sp(), 1, vec![]);
    let param = ast.add_name(sp(), 1, "e");
    let handler_body = ast.add_block(sp(), 1, vec![]);
    let handler = ast.add_catch_clause(sp(), 1, param, handler_body);
    let finalizer = ast.add_block(sp(), 1, vec![]);
    let try_stmt = ast.add_try(sp(), 1, block, Some(handler), Some(finalizer));

    assert_eq!(ast.children(try_stmt), vec![block, handler, finalizer]);

    let bare_block = ast.add_block(sp(), 1, vec![]);
    let fin_only = ast.add_block(sp(), 1, vec![]);
    let try_finally = ast.add_try(sp(), 1, bare_block, None, Some(fin_only));
    assert_eq!(ast.children(try_finally), vec![bare_block, fin_only]);
}

#[test]
fn switch_enumerates_argument_then_cases_in_order() {
    let mut ast = Ast::new();
    let argument = name_expr(&mut ast, "k");
    let one = ast.add_literal(sp(), 1, LiteralValue::Number(1.0), "1");
    let case_one = ast.add_switch_case(sp(), 1, Some(one), vec![]);
    let default_stmt = ast.add_empty(sp(), 1);
    let default_case = ast.add_switch_case(sp(), 1, None, vec![default_stmt]);
    let switch = ast.add_switch(sp(), 1, argument, vec![case_one, default_case]);

    assert_eq!(ast.children(switch), vec![argument, case_one, default_case]);
    assert_eq!(
        ast.children(default_case),
        vec![default_stmt],
        "default clause skips its absent expression"
    );
    assert_eq!(ast.children(case_one), vec![one]);
}

#[test]
fn function_node_enumerates_name_params_body() {
    let mut ast = Ast::new();
    let fn_name = ast.add_name(sp(), 1, "f");
    let a = ast.add_name(sp(), 1, "a");
    let b = ast.add_name(sp(), 1, "b");
    let body = ast.add_block(sp(), 1, vec![]);
    let func = ast.add_function_node(sp(), 1, Some(fn_name), vec![a, b], body);
    assert_eq!(ast.children(func), vec![fn_name, a, b, body]);

    let body2 = ast.add_block(sp(), 1, vec![]);
    let anon = ast.add_function_node(sp(), 1, None, vec![], body2);
    assert_eq!(ast.children(anon), vec![body2], "anonymous function skips name");
}

#[test]
fn declarator_and_leaf_children() {
    let mut ast = Ast::new();
    let n = ast.add_name(sp(), 1, "v");
    let init = name_expr(&mut ast, "w");
    let declarator = ast.add_variable_declarator(sp(), 1, n, Some(init));
    assert_eq!(ast.children(declarator), vec![n, init]);

    assert!(ast.children(n).is_empty(), "Name is a leaf");
    let this = ast.add_this(sp(), 1);
    assert!(ast.children(this).is_empty());
    let regexp = ast.add_regexp(sp(), 1, "/a+/g");
    assert!(ast.children(regexp).is_empty());
}

#[test]
fn find_all_and_height_compose_over_child_enumeration() {
    let mut ast = Ast::new();
    let x = name_expr(&mut ast, "x");
    let not_x = ast.add_unary(sp(), 1, UnaryOp::Not, x);
    let stmt = ast.add_expression_statement(sp(), 1, not_x);
    let block = ast.add_block(sp(), 1, vec![stmt]);
    let program = ast.add_program(sp(), 1, "t.js", vec![block]);

    let names = ast.find_all(program, |a, id| matches!(a.kind(id), NodeKind::Name(_)));
    assert_eq!(names.len(), 1);

    // program -> block -> stmt -> unary -> name_expr -> name
    assert_eq!(ast.height(program), 5);
    assert_eq!(ast.height(names[0]), 0);
}

#[test]
fn dump_reflects_kind_and_child_order() {
    let mut ast = Ast::new();
    let condition = name_expr(&mut ast, "x");
    let then_branch = ast.add_empty(sp(), 1);
    let if_stmt = ast.add_if(sp(), 1, condition, then_branch, None);

    let dumped = ast.dump(if_stmt);
    assert_eq!(dumped["kind"], "If");
    assert_eq!(dumped["children"][0]["kind"], "NameExpression");
    assert_eq!(dumped["children"][0]["children"][0]["text"], "x");
    assert_eq!(dumped["children"][1]["kind"], "Empty");
}
