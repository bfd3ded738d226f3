//! DNS zone commands.
//!
//! Works against a local zone cache (store.rs). Commands:
//! - `domain list`
//! - `domain <domain> record list`
//! - `domain <domain> record <record> add <value> type <type>`
//! - `domain <domain> record <record> delete`

mod store;


use std::cell::RefCell;
use std::rc::Rc;

use super::Module;
use crate::config::DomainConfig;
use crate::graph::{
    complete_from_keys, ArgumentError, ArgumentRecord, CommandGraph, Node, Outcome, Severity,
};
use crate::shell::ShellContext;

pub use store::{Record, ZoneStore};

pub const RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "CNAME", "DKIM", "LOC", "MX", "NAPTR", "NS", "PTR", "SPF", "SRV", "SSHFP", "TXT",
];

type SharedStore = Rc<RefCell<ZoneStore>>;

pub struct DomainModule {
    store: SharedStore,
}

impl DomainModule {
    pub fn new(store: ZoneStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Open the configured cache. An unreadable cache is replaced by an
    /// empty in-memory one so the file is never overwritten.
    pub fn open(config: &DomainConfig) -> Self {
        let store = match &config.store_path {
            Some(path) => ZoneStore::open(path, config.default_ttl).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "zone cache unavailable, using an empty one");
                ZoneStore::in_memory(config.default_ttl)
            }),
            None => ZoneStore::in_memory(config.default_ttl),
        };
        Self::new(store)
    }
}

/// Adapt a store-backed command to a graph handler.
fn handler<F>(
    store: &SharedStore,
    run: F,
) -> impl Fn(&mut ArgumentRecord, &mut ShellContext) -> Outcome
where
    F: Fn(&RefCell<ZoneStore>, &ArgumentRecord, &mut ShellContext) -> Result<Outcome, ArgumentError>
        + 'static,
{
    let store = Rc::clone(store);
    move |record, ctx| run(&*store, &*record, ctx).unwrap_or_else(Outcome::from)
}

fn domain_list(
    store: &RefCell<ZoneStore>,
    _record: &ArgumentRecord,
    ctx: &mut ShellContext,
) -> Result<Outcome, ArgumentError> {
    let store = store.borrow();
    let mut empty = true;
    for name in store.domain_names() {
        ctx.console.println(name);
        empty = false;
    }
    if empty {
        ctx.report(Severity::Info, "No domain in cache");
    }
    Ok(Outcome::success())
}

fn record_list(
    store: &RefCell<ZoneStore>,
    record: &ArgumentRecord,
    ctx: &mut ShellContext,
) -> Result<Outcome, ArgumentError> {
    let domain = record.require("domain")?;
    let store = store.borrow();
    let Some(records) = store.records(domain) else {
        return Ok(Outcome::failure(
            Severity::Warn,
            format!("Unknown domain '{domain}'"),
        ));
    };
    if records.is_empty() {
        ctx.report(Severity::Info, format!("No record for '{domain}'"));
    }
    for entry in records {
        ctx.console.println(format!(
            "{} {} => {} (ttl: {}, id: {})",
            entry.kind,
            entry.fqdn(domain),
            entry.target,
            entry.ttl,
            entry.id
        ));
    }
    Ok(Outcome::success())
}

fn record_add(
    store: &RefCell<ZoneStore>,
    record: &ArgumentRecord,
    ctx: &mut ShellContext,
) -> Result<Outcome, ArgumentError> {
    let domain = record.require("domain")?;
    let name = record.require("record")?;
    let value = record.require("value")?;
    let kind = record.require("type")?;

    let mut store = store.borrow_mut();
    let Some(id) = store.add_record(domain, name, kind, value) else {
        return Ok(Outcome::failure(
            Severity::Error,
            format!("No record id left in '{domain}'"),
        ));
    };
    if let Err(err) = store.save() {
        return Ok(Outcome::failure(Severity::Error, err.to_string()));
    }
    tracing::debug!(domain, record = name, id, "record added");
    ctx.report(Severity::Notice, format!("record {id} added to '{domain}'"));
    Ok(Outcome::success())
}

fn record_delete(
    store: &RefCell<ZoneStore>,
    record: &ArgumentRecord,
    ctx: &mut ShellContext,
) -> Result<Outcome, ArgumentError> {
    let domain = record.require("domain")?;
    let name = record.require("record")?;

    let matches: Vec<u32> = store
        .borrow()
        .records(domain)
        .unwrap_or(&[])
        .iter()
        .filter(|entry| entry.name == name)
        .map(|entry| entry.id)
        .collect();
    let id = match matches.as_slice() {
        [id] => *id,
        [] => {
            return Ok(Outcome::failure(
                Severity::Warn,
                format!("Abort, no record match '{name}'"),
            ))
        }
        _ => {
            return Ok(Outcome::failure(
                Severity::Warn,
                format!("Abort, more than one record match '{name}'"),
            ))
        }
    };

    if !ctx.confirm(&format!("Confirm deletion of '{name}.{domain}' (y/N)> ")) {
        return Ok(Outcome::success().skip_history());
    }

    let mut store = store.borrow_mut();
    store.remove_record(domain, id);
    if let Err(err) = store.save() {
        return Ok(Outcome::failure(Severity::Error, err.to_string()));
    }
    ctx.console.println(format!("deletion of '{name}.{domain}' done"));
    Ok(Outcome::success())
}

impl Module for DomainModule {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn register(&self, graph: &mut CommandGraph<ShellContext>) {
        let domains = Rc::clone(&self.store);
        let records = Rc::clone(&self.store);

        let lit_domain = graph.add(Node::literal("domain"));
        let lit_domain_list = graph.add(
            Node::literal("list")
                .with_description("List cached domains")
                .with_handler(handler(&self.store, domain_list)),
        );
        let arg_domain = graph.add(Node::string("domain").with_completion(
            move |_, _: &ShellContext| complete_from_keys(domains.borrow().domain_names()),
        ));
        let lit_record = graph.add(Node::literal("record"));
        let lit_record_list = graph.add(
            Node::literal("list")
                .with_description("List the records of a domain")
                .with_handler(handler(&self.store, record_list)),
        );
        let arg_record = graph.add(Node::string("record").with_completion(
            move |_, _: &ShellContext| complete_from_keys(records.borrow().record_names()),
        ));
        let lit_add = graph.add(Node::literal("add"));
        let arg_value = graph.add(Node::string("value"));
        let lit_type = graph.add(Node::literal("type"));
        let arg_type = graph.add(
            Node::choice("type", RECORD_TYPES.iter().copied())
                .with_description("Add a record to a domain")
                .with_handler(handler(&self.store, record_add)),
        );
        let lit_delete = graph.add(
            Node::literal("delete")
                .with_description("Delete a record (confirmation required)")
                .with_handler(handler(&self.store, record_delete)),
        );

        graph.register_path(&[lit_domain, lit_domain_list]);
        graph.register_path(&[lit_domain, arg_domain, lit_record, lit_record_list]);
        graph.register_path(&[
            lit_domain, arg_domain, lit_record, arg_record, lit_add, arg_value, lit_type, arg_type,
        ]);
        graph.register_path(&[lit_domain, arg_domain, lit_record, arg_record, lit_delete]);
    }
}
