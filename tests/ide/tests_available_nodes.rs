//! Available-node tests: what the palette offers for the cursor's context.

use flowmodel::model::{Item, NodeKind};
use flowmodel::semantic::TypeSymbol;
use flowmodel::syntax::SyntaxKind;
use flowmodel::{FlowModelError, Position};
use rstest::rstest;

use crate::helpers::assertions::{assert_absent, category, kinds, labels};
use crate::helpers::fixtures::*;

const STATEMENT: [NodeKind; 4] = [
    NodeKind::Variable,
    NodeKind::Assign,
    NodeKind::Function,
    NodeKind::DataMapper,
];

const CONTROL: [NodeKind; 5] = [
    NodeKind::If,
    NodeKind::Match,
    NodeKind::While,
    NodeKind::Foreach,
    NodeKind::Return,
];

fn control_with(extra: &[NodeKind]) -> Vec<NodeKind> {
    CONTROL.iter().chain(extra).copied().collect()
}

/// `function main() { <body> }` with `main` bound to the given return type.
fn in_main(returns: Option<TypeSymbol>, body: impl FnOnce(&mut flowmodel::syntax::TreeBuilder)) -> Fixture {
    let mut fixture = Fixture::build(|b| function(b, "main", None, body));
    fixture.bind_function(0, returns);
    fixture
}

// =============================================================================
// FLOW NODES BY CONTEXT
// =============================================================================

#[test]
fn test_function_body_offers_defaults_and_stop() {
    let env = TestEnv::default();
    let items = in_main(None, |b| {
        statement(b);
        cursor(b);
    })
    .available_nodes(&env);

    assert_eq!(labels(&items), vec!["Statement", "Control", "Error Handling"]);
    assert_eq!(kinds(&items, "Statement"), STATEMENT.to_vec());
    assert_eq!(kinds(&items, "Control"), control_with(&[NodeKind::Stop]));
    assert_eq!(kinds(&items, "Error Handling"), vec![NodeKind::Fail, NodeKind::Panic]);
}

#[test]
fn test_function_call_entry_is_customized() {
    let env = TestEnv::default();
    let items = in_main(None, cursor).available_nodes(&env);

    let call = category(&items, "Statement")
        .items
        .iter()
        .filter_map(Item::as_node)
        .find(|n| n.kind() == NodeKind::Function)
        .expect("function call entry");
    assert_eq!(call.metadata.label, "Function Call");
    assert_eq!(
        call.metadata.description.as_deref(),
        Some("Both project and utility functions")
    );
    assert!(call.enabled);
}

#[rstest]
#[case::while_loop(SyntaxKind::WHILE_STATEMENT, SyntaxKind::WHILE_KW, "while")]
#[case::foreach_loop(SyntaxKind::FOREACH_STATEMENT, SyntaxKind::FOREACH_KW, "foreach")]
fn test_iterating_block_adds_break_and_continue(
    #[case] kind: SyntaxKind,
    #[case] keyword: SyntaxKind,
    #[case] text: &str,
) {
    let env = TestEnv::default();
    let items = in_main(None, |b| block(b, kind, keyword, text, cursor)).available_nodes(&env);

    assert_eq!(
        kinds(&items, "Control"),
        control_with(&[NodeKind::Stop, NodeKind::Break, NodeKind::Continue])
    );
}

#[rstest]
#[case::lock(SyntaxKind::LOCK_STATEMENT, SyntaxKind::LOCK_KW, "lock")]
#[case::transaction(SyntaxKind::TRANSACTION_STATEMENT, SyntaxKind::TRANSACTION_KW, "transaction")]
#[case::match_statement(SyntaxKind::MATCH_STATEMENT, SyntaxKind::MATCH_KW, "match")]
fn test_branching_block_offers_defaults_only(
    #[case] kind: SyntaxKind,
    #[case] keyword: SyntaxKind,
    #[case] text: &str,
) {
    let env = TestEnv::default();
    let items = in_main(None, |b| block(b, kind, keyword, text, cursor)).available_nodes(&env);

    assert_eq!(kinds(&items, "Control"), control_with(&[NodeKind::Stop]));
    assert_absent(&items, NodeKind::Break);
    assert_absent(&items, NodeKind::Continue);
}

#[test]
fn test_if_and_else_branches_are_branching() {
    let env = TestEnv::default();
    let then_branch = in_main(None, |b| if_else(b, cursor, statement)).available_nodes(&env);
    let else_branch = in_main(None, |b| if_else(b, statement, cursor)).available_nodes(&env);

    assert_eq!(then_branch, else_branch);
    assert_absent(&then_branch, NodeKind::Break);
}

#[test]
fn test_do_and_on_fail_are_branching() {
    let env = TestEnv::default();
    let in_do = in_main(None, |b| do_on_fail(b, cursor, statement)).available_nodes(&env);
    let in_on_fail = in_main(None, |b| do_on_fail(b, statement, cursor)).available_nodes(&env);

    assert_eq!(kinds(&in_do, "Control"), control_with(&[NodeKind::Stop]));
    assert_eq!(kinds(&in_on_fail, "Control"), control_with(&[NodeKind::Stop]));
}

#[test]
fn test_innermost_construct_wins() {
    let env = TestEnv::default();

    // if inside while: the branching block is nearer
    let if_in_while = in_main(None, |b| {
        block(b, SyntaxKind::WHILE_STATEMENT, SyntaxKind::WHILE_KW, "while", |b| {
            if_else(b, cursor, statement)
        })
    })
    .available_nodes(&env);
    assert_absent(&if_in_while, NodeKind::Break);

    // while inside if: the loop is nearer
    let while_in_if = in_main(None, |b| {
        if_else(
            b,
            |b| block(b, SyntaxKind::WHILE_STATEMENT, SyntaxKind::WHILE_KW, "while", cursor),
            statement,
        )
    })
    .available_nodes(&env);
    assert_eq!(
        kinds(&while_in_if, "Control"),
        control_with(&[NodeKind::Stop, NodeKind::Break, NodeKind::Continue])
    );
}

#[test]
fn test_cursor_inside_a_statement_uses_enclosing_loop() {
    let env = TestEnv::default();
    let items = in_main(None, |b| {
        block(
            b,
            SyntaxKind::FOREACH_STATEMENT,
            SyntaxKind::FOREACH_KW,
            "foreach",
            statement_with_cursor,
        )
    })
    .available_nodes(&env);

    assert_eq!(
        kinds(&items, "Control"),
        control_with(&[NodeKind::Stop, NodeKind::Break, NodeKind::Continue])
    );
}

#[test]
fn test_cursor_outside_any_function() {
    let env = TestEnv::default();
    let fixture = Fixture::build(|b| {
        cursor(b);
        function(b, "main", None, statement);
    });
    let items = fixture.available_nodes(&env);

    // No enclosing function, so no stop.
    assert_eq!(kinds(&items, "Control"), CONTROL.to_vec());
}

// =============================================================================
// STOP
// =============================================================================

#[rstest]
#[case::no_return_type(None, true)]
#[case::nil(Some(TypeSymbol::Nil), true)]
#[case::nil_or_never(Some(TypeSymbol::Union(vec![TypeSymbol::Nil, TypeSymbol::Never])), true)]
#[case::int(Some(TypeSymbol::Int), false)]
#[case::optional_int(Some(TypeSymbol::Union(vec![TypeSymbol::Int, TypeSymbol::Nil])), false)]
#[case::error(Some(TypeSymbol::Error), false)]
fn test_stop_follows_return_type(#[case] returns: Option<TypeSymbol>, #[case] expected: bool) {
    let env = TestEnv::default();
    let items = in_main(returns, cursor).available_nodes(&env);

    let has_stop = kinds(&items, "Control").contains(&NodeKind::Stop);
    assert_eq!(has_stop, expected);
}

#[test]
fn test_stop_absent_when_function_is_unresolved() {
    let env = TestEnv::default();
    let fixture = Fixture::build(|b| function(b, "main", None, cursor));
    let items = fixture.available_nodes(&env);

    assert_absent(&items, NodeKind::Stop);
}

#[test]
fn test_stop_offered_once_inside_nested_loops() {
    let env = TestEnv::default();
    let items = in_main(None, |b| {
        block(b, SyntaxKind::WHILE_STATEMENT, SyntaxKind::WHILE_KW, "while", |b| {
            block(b, SyntaxKind::FOREACH_STATEMENT, SyntaxKind::FOREACH_KW, "foreach", cursor)
        })
    })
    .available_nodes(&env);

    let stops = kinds(&items, "Control")
        .into_iter()
        .filter(|k| *k == NodeKind::Stop)
        .count();
    assert_eq!(stops, 1);
}

#[test]
fn test_stop_in_method_and_resource() {
    let env = TestEnv::default();

    let mut in_method = Fixture::build(|b| class(b, "Counter", |b| method(b, "tick", None, cursor)));
    in_method.bind_function(0, Some(TypeSymbol::Nil));
    assert!(kinds(&in_method.available_nodes(&env), "Control").contains(&NodeKind::Stop));

    let mut in_resource =
        Fixture::build(|b| service(b, |b| resource(b, "greeting", Some("string"), cursor)));
    in_resource.bind_function(0, Some(TypeSymbol::String));
    assert_absent(&in_resource.available_nodes(&env), NodeKind::Stop);
}

#[rstest]
#[case::outer_nil_inner_int(None, Some(TypeSymbol::Int), true)]
#[case::outer_int_inner_nil(Some(TypeSymbol::Int), Some(TypeSymbol::Nil), true)]
#[case::both_nil(None, None, true)]
#[case::both_int(Some(TypeSymbol::Int), Some(TypeSymbol::String), false)]
fn test_any_enclosing_function_enables_stop(
    #[case] outer: Option<TypeSymbol>,
    #[case] inner: Option<TypeSymbol>,
    #[case] expected: bool,
) {
    let env = TestEnv::default();
    // A method nested in `main`'s body, cursor inside the method.
    let mut fixture = Fixture::build(|b| {
        function(b, "main", None, |b| method(b, "inner", Some("int"), cursor))
    });
    fixture.bind_function(0, outer).bind_function(1, inner);

    let stops = kinds(&fixture.available_nodes(&env), "Control")
        .into_iter()
        .filter(|k| *k == NodeKind::Stop)
        .count();
    assert_eq!(stops, usize::from(expected));
}

#[test]
fn test_sibling_function_does_not_enable_stop() {
    let env = TestEnv::default();
    let mut fixture = Fixture::build(|b| {
        function(b, "helper", None, statement);
        function(b, "main", Some("int"), cursor);
    });
    fixture
        .bind_function(0, None)
        .bind_function(1, Some(TypeSymbol::Int));

    assert_absent(&fixture.available_nodes(&env), NodeKind::Stop);
}

// =============================================================================
// LOCAL INDEX, IDEMPOTENCE, ERRORS
// =============================================================================

#[test]
fn test_local_index_is_appended_last() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("functions.json");
    std::fs::write(
        &path,
        r#"[
            {
                "metadata": { "label": "Utilities" },
                "items": [
                    {
                        "metadata": { "label": "format" },
                        "codedata": { "node": "FUNCTION", "org": "ballerina", "module": "lang.string", "symbol": "format" },
                        "enabled": true
                    }
                ]
            }
        ]"#,
    )
    .unwrap();

    let mut env = TestEnv::default();
    env.config.local_index_path = Some(path);
    env.local_index = flowmodel::central::LocalIndex::load(&env.config).unwrap();

    let items = in_main(None, cursor).available_nodes(&env);
    assert_eq!(
        labels(&items),
        vec!["Statement", "Control", "Error Handling", "Utilities"]
    );
    let utilities = category(&items, "Utilities");
    assert_eq!(utilities.node_kinds(), vec![NodeKind::Function]);
}

#[test]
fn test_repeated_requests_are_identical() {
    let env = TestEnv::default();
    let fixture = in_main(None, |b| {
        block(b, SyntaxKind::WHILE_STATEMENT, SyntaxKind::WHILE_KW, "while", cursor)
    });

    let first = fixture.available_nodes(&env);
    let second = fixture.available_nodes(&env);
    assert_eq!(first, second);
}

#[test]
fn test_position_outside_document_is_an_error() {
    let env = TestEnv::default();
    let fixture = in_main(None, cursor);

    let result = fixture
        .analysis(&env)
        .available_nodes(Position::new(999, 0));
    assert!(matches!(
        result,
        Err(FlowModelError::InvalidPosition { line: 999, column: 0 })
    ));
}

#[test]
fn test_serialized_shape() {
    let env = TestEnv::default();
    let items = in_main(None, cursor).available_nodes(&env);

    let json = serde_json::to_value(&items).unwrap();
    let statement = &json[0];
    assert_eq!(statement["metadata"]["label"], "Statement");
    assert_eq!(statement["items"][0]["codedata"]["node"], "VARIABLE");
    assert!(statement["items"][0]["codedata"].get("org").is_none());
}
