use super::{complete_from_keys, ArgumentRecord, CommandGraph, Node, Outcome, Status};

const RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "TXT"];

/// Handler invocations seen by the dispatch context.
#[derive(Default)]
struct Probe {
    calls: Vec<(&'static str, Vec<(String, String)>)>,
    records: Vec<&'static str>,
}

fn capture(name: &'static str) -> impl Fn(&mut ArgumentRecord, &mut Probe) -> Outcome {
    move |record, probe| {
        let bound = record
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        probe.calls.push((name, bound));
        Outcome::success()
    }
}

fn domain_graph() -> CommandGraph<Probe> {
    let mut graph = CommandGraph::new();
    let lit_domain = graph.add(Node::literal("domain"));
    let lit_domain_list = graph.add(Node::literal("list").with_handler(capture("H1")));
    let lit_record = graph.add(Node::literal("record"));
    let lit_record_list = graph.add(Node::literal("list").with_handler(capture("H2")));
    let lit_add = graph.add(Node::literal("add"));
    let lit_type = graph.add(Node::literal("type"));

    let arg_domain = graph.add(Node::string("domain"));
    let arg_record = graph.add(
        Node::string("record")
            .with_completion(|_, probe: &Probe| complete_from_keys(&probe.records)),
    );
    let arg_value = graph.add(Node::string("value"));
    let arg_type = graph.add(
        Node::choice("type", RECORD_TYPES.iter().copied()).with_handler(capture("H3")),
    );

    graph.register_path(&[lit_domain, lit_domain_list]);
    graph.register_path(&[lit_domain, arg_domain, lit_record, lit_record_list]);
    graph.register_path(&[
        lit_domain, arg_domain, lit_record, arg_record, lit_add, arg_value, lit_type, arg_type,
    ]);
    graph
}

fn bound(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn domain_list_runs_with_empty_record() {
    let graph = domain_graph();
    let mut probe = Probe::default();

    let outcome = graph.dispatch(&["domain", "list"], &mut probe);
    assert_eq!(outcome.status, Status::Success);
    assert_eq!(probe.calls, vec![("H1", Vec::new())]);
}

#[test]
fn record_list_binds_domain() {
    let graph = domain_graph();
    let mut probe = Probe::default();

    graph.dispatch(&["domain", "example.com", "record", "list"], &mut probe);
    assert_eq!(
        probe.calls,
        vec![("H2", bound(&[("domain", "example.com")]))]
    );
}

#[test]
fn record_add_binds_all_arguments_in_order() {
    let graph = domain_graph();
    let mut probe = Probe::default();

    let outcome = graph.dispatch(
        &["domain", "example.com", "record", "www", "add", "1.2.3.4", "type", "A"],
        &mut probe,
    );
    assert!(outcome.is_success());
    assert_eq!(
        probe.calls,
        vec![(
            "H3",
            bound(&[
                ("domain", "example.com"),
                ("record", "www"),
                ("value", "1.2.3.4"),
                ("type", "A"),
            ])
        )]
    );
}

#[test]
fn unknown_choice_is_rejected_by_matcher() {
    let graph = domain_graph();
    let mut probe = Probe::default();

    let outcome = graph.dispatch(
        &["domain", "example.com", "record", "www", "add", "1.2.3.4", "type", "ZZZ"],
        &mut probe,
    );
    assert!(outcome.is_usage());
    assert!(probe.calls.is_empty());
}

#[test]
fn unmatched_sequences_never_run_handlers() {
    let graph = domain_graph();
    let mut probe = Probe::default();
    let cases: &[&[&str]] = &[
        &[],
        &["domain"],
        &["domain", "example.com"],
        &["domain", "example.com", "record"],
        &["domain", "example.com", "record", "www", "add"],
        &["domain", "list", "now"],
        &["record", "list"],
        &["DOMAIN", "list"],
    ];
    for &tokens in cases {
        let outcome = graph.dispatch(tokens, &mut probe);
        assert!(outcome.is_usage(), "expected usage for {tokens:?}");
    }
    assert!(probe.calls.is_empty());
}

#[test]
fn shared_prefix_is_visible_from_every_path() {
    let mut graph = domain_graph();
    let lit_domain = graph.roots()[0];
    let lit_delete = graph.add(Node::literal("delete").with_handler(capture("H4")));
    graph.register_path_from(lit_domain, &[lit_delete]);

    let mut probe = Probe::default();
    graph.dispatch(&["domain", "delete"], &mut probe);
    assert_eq!(probe.calls, vec![("H4", Vec::new())]);
    assert_eq!(graph.roots().len(), 1);
    assert_eq!(
        graph.complete(&["domain"], "", &probe),
        vec!["list", "delete"]
    );
}

#[test]
fn record_completion_offers_literal_then_provider() {
    let graph = domain_graph();
    let mut probe = Probe::default();
    let tokens = ["domain", "example.com", "record"];

    assert_eq!(graph.complete(&tokens, "", &probe), vec!["list"]);

    probe.records = vec!["www", "mail", "www"];
    assert_eq!(
        graph.complete(&tokens, "", &probe),
        vec!["list", "mail", "www"]
    );
    assert!(probe.calls.is_empty());
}

#[test]
fn provider_value_equal_to_literal_keeps_literal_position() {
    let graph = domain_graph();
    let probe = Probe {
        records: vec!["list", "aaa"],
        ..Probe::default()
    };
    let tokens = ["domain", "example.com", "record"];

    assert_eq!(graph.complete(&tokens, "", &probe), vec!["list", "aaa"]);
    assert_eq!(graph.complete(&tokens, "l", &probe), vec!["list"]);
}

#[test]
fn completion_is_monotonic_in_the_prefix() {
    let graph = domain_graph();
    let probe = Probe {
        records: vec!["www", "webmail", "ftp"],
        ..Probe::default()
    };
    let prefixes: &[&[&str]] = &[
        &[],
        &["domain"],
        &["domain", "example.com", "record"],
        &["domain", "example.com", "record", "www", "add", "v", "type"],
    ];
    for &tokens in prefixes {
        let all = graph.complete(tokens, "", &probe);
        for partial in ["", "w", "we", "l", "A", "C", "x"] {
            let narrowed = graph.complete(tokens, partial, &probe);
            let expected: Vec<String> = all
                .iter()
                .filter(|candidate| candidate.starts_with(partial))
                .cloned()
                .collect();
            assert_eq!(narrowed, expected, "tokens {tokens:?} partial {partial:?}");
        }
    }
}

#[test]
fn choice_values_complete_in_declared_order() {
    let graph = domain_graph();
    let probe = Probe::default();
    let tokens = ["domain", "example.com", "record", "www", "add", "v", "type"];

    assert_eq!(graph.complete(&tokens, "", &probe), RECORD_TYPES.to_vec());
    assert_eq!(graph.complete(&tokens, "A", &probe), vec!["A", "AAAA"]);
}

#[test]
fn display_dumps_the_forest() {
    let graph = domain_graph();
    let dump = graph.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "domain");
    assert_eq!(lines[1], "  list *");
    assert_eq!(lines[2], "  <domain>");
    assert!(lines.contains(&"              <type> *"));
}
