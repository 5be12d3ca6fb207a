//! Structural classification, ancestor queries, and the scope side channel
//! a binding pass writes into.

use jsast::{Ast, NodeId, PropertyKind, Span};

fn sp() -> Span {
    Span::EMPTY
}

fn name_expr(ast: &mut Ast, text: &str) -> (NodeId, NodeId) {
    let name = ast.add_name(sp(), 1, text);
    let expr = ast.add_name_expression(sp(), 1, name);
    (name, expr)
}

// ==========================================================================
// Name classification
// ==========================================================================

#[test]
fn member_property_slot_is_a_property_mention() {
    // a.b: `a` is a variable mention, `b` a property mention.
    let mut ast = Ast::new();
    let (a, a_expr) = name_expr(&mut ast, "a");
    let b = ast.add_name(sp(), 1, "b");
    let _member = ast.add_member(sp(), 1, a_expr, b);

    assert!(ast.name_is_property(b));
    assert!(!ast.name_is_variable(b));
    assert!(!ast.name_is_label(b));

    assert!(ast.name_is_variable(a));
    assert!(!ast.name_is_property(a));
}

#[test]
fn property_key_slot_is_a_property_mention() {
    let mut ast = Ast::new();
    let key = ast.add_name(sp(), 1, "k");
    let (_, value) = name_expr(&mut ast, "v");
    let _property = ast.add_property(sp(), 1, key, value, PropertyKind::Init);

    assert!(ast.name_is_property(key));
    assert!(!ast.name_is_variable(key));
}

#[test]
fn declarator_name_is_a_variable() {
    let mut ast = Ast::new();
    let v = ast.add_name(sp(), 1, "v");
    let _declarator = ast.add_variable_declarator(sp(), 1, v, None);

    assert!(ast.name_is_variable(v));
    assert!(!ast.name_is_property(v));
    assert!(!ast.name_is_label(v));
}

#[test]
fn break_and_labeled_slots_are_labels() {
    let mut ast = Ast::new();
    let target = ast.add_name(sp(), 1, "loop");
    let _brk = ast.add_break(sp(), 1, Some(target));
    assert!(ast.name_is_label(target));
    assert!(!ast.name_is_variable(target));

    let label = ast.add_name(sp(), 1, "outer");
    let body = ast.add_empty(sp(), 1);
    let _labeled = ast.add_labeled(sp(), 1, label, body);
    assert!(ast.name_is_label(label));

    let cont_target = ast.add_name(sp(), 1, "outer");
    let _cont = ast.add_continue(sp(), 1, Some(cont_target));
    assert!(ast.name_is_label(cont_target));
}

#[test]
fn classification_follows_reparenting() {
    // Start as a declarator name, move into a Member property slot.
    let mut ast = Ast::new();
    let n = ast.add_name(sp(), 1, "n");
    let declarator = ast.add_variable_declarator(sp(), 1, n, None);
    assert!(ast.name_is_variable(n));

    let (_, object) = name_expr(&mut ast, "o");
    let placeholder = ast.add_name(sp(), 1, "p");
    let member = ast.add_member(sp(), 1, object, placeholder);

    // Swap `n` into the property slot and re-wire its parent; the answers
    // change because nothing was cached.
    ast.member_data_mut(member).property = n;
    ast.set_parent(n, Some(member));

    assert!(ast.name_is_property(n));
    assert!(!ast.name_is_variable(n));
    let _ = declarator;
}

#[test]
fn orphan_name_is_a_variable_mention() {
    let mut ast = Ast::new();
    let n = ast.add_name(sp(), 1, "free");
    assert!(ast.name_is_variable(n));
    assert!(!ast.name_is_property(n));
    assert!(!ast.name_is_label(n));
}

// ==========================================================================
// FunctionNode / Property classification
// ==========================================================================

#[test]
fn function_classification_follows_parent_shape() {
    let mut ast = Ast::new();
    let body = ast.add_block(sp(), 1, vec![]);
    let func = ast.add_function_node(sp(), 1, None, vec![], body);
    let expr = ast.add_function_expression(sp(), 1, func);

    assert!(ast.function_is_expression(func));
    assert!(!ast.function_is_declaration(func));
    assert!(!ast.function_is_accessor(func));

    // Reparent the same FunctionNode under a declaration.
    let body2 = ast.add_block(sp(), 1, vec![]);
    let stand_in = ast.add_function_node(sp(), 1, None, vec![], body2);
    let decl = ast.add_function_declaration(sp(), 1, stand_in);
    ast.function_declaration_data_mut(decl).function = func;
    ast.set_parent(func, Some(decl));

    assert!(ast.function_is_declaration(func));
    assert!(!ast.function_is_expression(func));
    let _ = expr;
}

#[test]
fn getter_value_is_an_accessor_but_init_function_is_not() {
    let mut ast = Ast::new();

    let key = ast.add_name(sp(), 1, "x");
    let body = ast.add_block(sp(), 1, vec![]);
    let getter_fn = ast.add_function_node(sp(), 1, None, vec![], body);
    let getter = ast.add_property(sp(), 1, key, getter_fn, PropertyKind::Get);
    assert!(ast.property_is_accessor(getter));
    assert!(ast.function_is_accessor(getter_fn));

    // { f: function () {} }: function-valued but still a plain property.
    let key2 = ast.add_name(sp(), 1, "f");
    let body2 = ast.add_block(sp(), 1, vec![]);
    let init_fn = ast.add_function_node(sp(), 1, None, vec![], body2);
    let init_value = ast.add_function_expression(sp(), 1, init_fn);
    let plain = ast.add_property(sp(), 1, key2, init_value, PropertyKind::Init);
    assert!(!ast.property_is_accessor(plain));
    assert!(!ast.function_is_accessor(init_fn));
}

// ==========================================================================
// Ancestor queries
// ==========================================================================

#[test]
fn orphan_queries_fail_soft() {
    let mut ast = Ast::new();
    let n = ast.add_name(sp(), 1, "x");
    assert_eq!(ast.enclosing_program(n), None);
    assert_eq!(ast.enclosing_function(n), None);
    assert_eq!(ast.location(n), None);
}

#[test]
fn program_is_its_own_enclosing_program() {
    let mut ast = Ast::new();
    let program = ast.add_program(sp(), 1, "root.js", vec![]);
    assert_eq!(ast.enclosing_program(program), Some(program));

    let loc = ast.location(program).expect("program resolves its own location");
    assert_eq!(loc.filename, "root.js");
}

#[test]
fn deep_nesting_resolves_nearest_ancestors() {
    // function f(p) { return p.q; } at program depth > 3
    let mut ast = Ast::new();
    let p_use = ast.add_name(sp(), 3, "p");
    let p_expr = ast.add_name_expression(sp(), 3, p_use);
    let q = ast.add_name(sp(), 3, "q");
    let member = ast.add_member(sp(), 3, p_expr, q);
    let ret = ast.add_return(sp(), 3, Some(member));
    let body = ast.add_block(sp(), 2, vec![ret]);
    let f_name = ast.add_name(sp(), 2, "f");
    let p_param = ast.add_name(sp(), 2, "p");
    let func = ast.add_function_node(sp(), 2, Some(f_name), vec![p_param], body);
    let decl = ast.add_function_declaration(sp(), 2, func);
    let program = ast.add_program(sp(), 1, "deep.js", vec![decl]);

    assert_eq!(ast.enclosing_function(q), Some(func));
    assert_eq!(ast.enclosing_program(q), Some(program));
    let loc = ast.location(q).expect("q is reachable from the program");
    assert_eq!(loc.filename, "deep.js");
    assert_eq!(loc.line, 3, "location carries the node's own line");

    // Depth 1: a direct child of the program has no enclosing function.
    assert_eq!(ast.enclosing_function(decl), None);
    assert_eq!(ast.enclosing_program(decl), Some(program));
}

#[test]
fn enclosing_function_of_a_function_is_the_next_one_out() {
    let mut ast = Ast::new();
    let inner_body = ast.add_block(sp(), 1, vec![]);
    let inner = ast.add_function_node(sp(), 1, None, vec![], inner_body);
    let inner_expr = ast.add_function_expression(sp(), 1, inner);
    let inner_stmt = ast.add_expression_statement(sp(), 1, inner_expr);
    let outer_body = ast.add_block(sp(), 1, vec![inner_stmt]);
    let outer = ast.add_function_node(sp(), 1, None, vec![], outer_body);

    assert_eq!(ast.enclosing_function(inner), Some(outer));
    assert_eq!(ast.enclosing_function(outer), None);
}

// ==========================================================================
// Scope environments and Name.scope
// ==========================================================================

#[test]
fn environments_start_empty_and_accept_declarations() {
    let mut ast = Ast::new();
    let body = ast.add_block(sp(), 1, vec![]);
    let a = ast.add_name(sp(), 1, "a");
    let func = ast.add_function_node(sp(), 1, None, vec![a], body);

    assert!(ast.environment(func).is_empty(), "construction never populates");

    // What a binding pass does: parameters plus the implicit arguments entry.
    assert!(ast.declare(func, "a"));
    assert!(ast.declare(func, "arguments"));
    assert!(!ast.declare(func, "a"), "redeclaration reports false");

    assert!(ast.environment(func).contains("a"));
    assert!(ast.environment(func).contains("arguments"));
    assert_eq!(ast.environment(func).len(), 2);
}

#[test]
fn catch_clause_and_program_are_scopes() {
    let mut ast = Ast::new();
    let param = ast.add_name(sp(), 1, "e");
    let body = ast.add_block(sp(), 1, vec![]);
    let catch = ast.add_catch_clause(sp(), 1, param, body);
    let program = ast.add_program(sp(), 1, "t.js", vec![]);

    assert!(ast.is_scope(catch));
    assert!(ast.is_scope(program));
    assert!(!ast.is_scope(body));

    ast.declare(catch, "e");
    assert!(ast.environment(catch).contains("e"));
}

#[test]
#[should_panic(expected = "expected a scope node")]
fn declaring_on_a_non_scope_is_a_contract_violation() {
    let mut ast = Ast::new();
    let block = ast.add_block(sp(), 1, vec![]);
    ast.declare(block, "x");
}

#[test]
fn unbound_name_has_no_scope() {
    // Resolution policy: no implicit fallback to the nearest Program; the
    // slot stays empty until a binding pass writes it.
    let mut ast = Ast::new();
    let (x, x_expr) = name_expr(&mut ast, "x");
    let stmt = ast.add_expression_statement(sp(), 1, x_expr);
    let program = ast.add_program(sp(), 1, "t.js", vec![stmt]);

    assert_eq!(ast.name_scope(x), None);
    assert_eq!(ast.enclosing_program(x), Some(program), "even with a program above");
}

#[test]
fn binding_pass_writes_the_name_scope_slot() {
    let mut ast = Ast::new();
    let param = ast.add_name(sp(), 1, "p");
    let (p_use, p_expr) = name_expr(&mut ast, "p");
    let ret = ast.add_return(sp(), 1, Some(p_expr));
    let body = ast.add_block(sp(), 1, vec![ret]);
    let func = ast.add_function_node(sp(), 1, None, vec![param], body);

    // Minimal binding pass for this tree.
    ast.declare(func, "p");
    ast.declare(func, "arguments");
    ast.set_name_scope(param, Some(func));
    ast.set_name_scope(p_use, Some(func));

    assert_eq!(ast.name_scope(p_use), Some(func));
    assert_eq!(ast.enclosing_scope(p_use), Some(func), "slot agrees with structure here");

    ast.set_name_scope(p_use, None);
    assert_eq!(ast.name_scope(p_use), None, "slot is plainly mutable");
}

#[test]
#[should_panic(expected = "must be a scope node")]
fn name_scope_target_must_be_a_scope() {
    let mut ast = Ast::new();
    let n = ast.add_name(sp(), 1, "x");
    let block = ast.add_block(sp(), 1, vec![]);
    ast.set_name_scope(n, Some(block));
}
