//! End-to-end exercise of the data layer: carve spans from a source
//! buffer the way the scanner would, compose nodes the way the parser
//! would, and hand the hoisting result to a pretend scope builder.

use ecma_ast::{
    AstArena, BlockStatement, ClassDeclaration, Directive, ExpressionStatement,
    FunctionDeclaration, HoistingScope, Identifier, LabeledStatement, Literal, NodeId, NodeKind,
    NodeType, Program, SourceType, Span, StatementTables, VarKind, VariableDeclaration,
    VariableDeclarator,
};
use pretty_assertions::assert_eq;

const SOURCE: &str = "\
'use strict';
var total = 0;
function add(a, b) {}
class Counter {}
loop: { ; }
";

/// Byte span of `needle` within the source buffer.
fn spot<'s>(buffer: Span<'s>, needle: &str) -> Span<'s> {
    let start = buffer
        .as_str()
        .find(needle)
        .and_then(|p| u32::try_from(p).ok());
    let (Some(start), Ok(len)) = (start, u32::try_from(needle.len())) else {
        panic!("fixture text {needle:?} not found in source");
    };
    match buffer.slice(start, len) {
        Ok(span) => span,
        Err(err) => panic!("fixture span for {needle:?}: {err}"),
    }
}

fn ident<'s>(arena: &mut AstArena<'s>, name: Span<'s>) -> NodeId {
    arena.push(NodeKind::Identifier(Identifier::new(Some(name))), name)
}

#[test]
fn builds_a_program_with_directive_hoisting_and_labels() {
    let buffer = Span::of(SOURCE);
    let mut arena = AstArena::with_capacity(SOURCE.len());
    let mut scope = HoistingScope::new();
    let mut tables = StatementTables::new();
    let mut body = Vec::new();

    // --- 'use strict'; ---------------------------------------------------
    let literal_raw = spot(buffer, "'use strict'");
    let statement_raw = spot(buffer, "'use strict';");
    let literal = arena.push(
        NodeKind::Literal(Literal::string("use strict", literal_raw)),
        literal_raw,
    );
    let expr_stmt = ExpressionStatement {
        expression: literal,
    };
    let Some(directive) = Directive::recognize(&arena, &expr_stmt, statement_raw) else {
        panic!("string-literal statement must be recognized as a directive");
    };
    assert!(directive.is_strict_mode_marker());
    body.push(arena.push(NodeKind::Directive(directive), statement_raw));

    // --- var total = 0; --------------------------------------------------
    let total = ident(&mut arena, spot(buffer, "total"));
    let zero_raw = spot(buffer, "0;");
    let zero = match zero_raw.slice(0, 1) {
        Ok(raw) => arena.push(NodeKind::Literal(Literal::numeric(0.0, raw)), raw),
        Err(err) => panic!("zero literal: {err}"),
    };
    let declarator = arena.push(
        NodeKind::VariableDeclarator(VariableDeclarator {
            ident: total,
            init: Some(zero),
        }),
        spot(buffer, "total = 0"),
    );
    let var_decl = arena.push(
        NodeKind::VariableDeclaration(VariableDeclaration {
            kind: VarKind::Var,
            declarators: vec![declarator],
        }),
        spot(buffer, "var total = 0;"),
    );
    scope.add(&arena, var_decl);
    body.push(var_decl);

    // --- function add(a, b) {} -------------------------------------------
    let fn_name = ident(&mut arena, spot(buffer, "add"));
    let params_text = spot(buffer, "a, b");
    let (Ok(a_span), Ok(b_span)) = (params_text.slice(0, 1), params_text.slice(3, 1)) else {
        panic!("parameter spans must be in bounds");
    };
    let param_a = ident(&mut arena, a_span);
    let param_b = ident(&mut arena, b_span);
    let fn_body = arena.push(
        NodeKind::BlockStatement(BlockStatement { body: Vec::new() }),
        spot(buffer, "{}"),
    );
    let fn_decl = arena.push(
        NodeKind::FunctionDeclaration(FunctionDeclaration {
            ident: fn_name,
            params: vec![param_a, param_b],
            body: fn_body,
            is_async: false,
            is_generator: false,
        }),
        spot(buffer, "function add(a, b) {}"),
    );
    scope.add(&arena, fn_decl);
    body.push(fn_decl);

    // --- class Counter {} ------------------------------------------------
    let class_name = ident(&mut arena, spot(buffer, "Counter"));
    let class_stmt_raw = spot(buffer, "class Counter {}");
    let Ok(class_braces) = class_stmt_raw.slice(14, 2) else {
        panic!("class body braces must be in bounds");
    };
    let class_body = arena.push(
        NodeKind::BlockStatement(BlockStatement { body: Vec::new() }),
        class_braces,
    );
    let class_decl = arena.push(
        NodeKind::ClassDeclaration(ClassDeclaration {
            ident: class_name,
            superclass: None,
            body: class_body,
        }),
        class_stmt_raw,
    );
    scope.add(&arena, class_decl);
    body.push(class_decl);

    // --- loop: { ; } -----------------------------------------------------
    let label_span = spot(buffer, "loop");
    let label = ident(&mut arena, label_span);
    let block_raw = spot(buffer, "{ ; }");
    let Ok(semi) = block_raw.slice(2, 1) else {
        panic!("empty-statement span must be in bounds");
    };
    let empty = arena.push(NodeKind::EmptyStatement, semi);
    let labeled_block = arena.push(
        NodeKind::BlockStatement(BlockStatement { body: vec![empty] }),
        block_raw,
    );
    let labeled = arena.push(
        NodeKind::LabeledStatement(LabeledStatement {
            label,
            body: labeled_block,
        }),
        spot(buffer, "loop: { ; }"),
    );
    tables.set_label_set(labeled_block, label_span);
    body.push(labeled);

    // --- program root ----------------------------------------------------
    let program = arena.push(
        NodeKind::Program(Program {
            source_type: SourceType::Script,
            body: body.clone(),
        }),
        buffer,
    );

    // The tree is done; everything below is read-only.
    assert_eq!(arena.node_type(program), NodeType::Program);
    assert_eq!(arena.children(program).as_slice(), body.as_slice());

    // Raw spans round-trip the exact source text.
    let directive_node = arena.kind(body[0]);
    assert_eq!(
        directive_node
            .as_directive()
            .map(|d| d.statement_raw().as_str()),
        Some("'use strict';")
    );
    assert_eq!(arena.span(var_decl).as_str(), "var total = 0;");
    assert_eq!(arena.span(fn_decl).as_str(), "function add(a, b) {}");

    // Hoisting collections, in insertion order, no reordering.
    let declarations = scope.close();
    assert_eq!(declarations.variables, vec![var_decl]);
    assert_eq!(declarations.functions, vec![fn_decl]);
    assert_eq!(declarations.classes, vec![class_decl]);

    // The label relation resolves without touching the tree.
    assert_eq!(
        tables.label_set(labeled_block).map(|s| s.as_str()),
        Some("loop")
    );
    assert!(tables.hoisting_tags(labeled_block).is_empty());

    // A full walk visits every node reachable from the root.
    let mut stack = vec![program];
    let mut visited = 0;
    while let Some(id) = stack.pop() {
        visited += 1;
        stack.extend(arena.children(id).iter().copied().rev());
    }
    assert_eq!(visited, arena.len());
}
