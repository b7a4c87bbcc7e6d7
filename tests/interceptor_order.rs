use std::sync::Arc;

use synapse::intercept::{
    ComponentLocation, FactoryRegistration, InterceptorChain, InterceptorFactory, sort_by_priority,
};

struct StubFactory;

impl InterceptorFactory for StubFactory {}

fn chain_of(identities: &[&str]) -> InterceptorChain {
    let mut chain = InterceptorChain::new();
    for identity in identities {
        chain.add(*identity, Arc::new(StubFactory));
    }
    chain
}

fn priority_of(prefixes: &[&str]) -> Vec<String> {
    prefixes.iter().map(|prefix| prefix.to_string()).collect()
}

fn ordered_identities(chain: &InterceptorChain, priority: &[String]) -> Vec<String> {
    chain
        .ordered(priority)
        .into_iter()
        .map(|registration| registration.identity)
        .collect()
}

#[test]
fn given_priority_prefixes_when_chain_is_ordered_then_matches_precede_insertion_ties() {
    let chain = chain_of(&["com.x.Foo", "org.y.Bar", "com.x.Baz"]);
    let priority = priority_of(&["org.y", "com.x"]);

    assert_eq!(
        ordered_identities(&chain, &priority),
        vec!["org.y.Bar", "com.x.Foo", "com.x.Baz"]
    );
}

#[test]
fn given_empty_priority_list_when_chain_is_ordered_then_insertion_order_is_kept() {
    let chain = chain_of(&["com.x.Foo", "org.y.Bar", "com.x.Baz"]);

    assert_eq!(
        ordered_identities(&chain, &[]),
        vec!["com.x.Foo", "org.y.Bar", "com.x.Baz"]
    );
}

#[test]
fn given_no_matching_prefix_when_chain_is_ordered_then_output_equals_input() {
    let chain = chain_of(&["net.a.First", "net.b.Second", "net.c.Third"]);
    let priority = priority_of(&["org.y", "com.x"]);

    assert_eq!(
        ordered_identities(&chain, &priority),
        vec!["net.a.First", "net.b.Second", "net.c.Third"]
    );
}

#[test]
fn given_overlapping_prefixes_when_chain_is_ordered_then_list_position_beats_specificity() {
    let chain = chain_of(&["org.package.logging.LoggerInterceptor", "org.package.Plain"]);
    let priority = priority_of(&["org.package", "org.package.logging"]);

    assert_eq!(
        ordered_identities(&chain, &priority),
        vec!["org.package.logging.LoggerInterceptor", "org.package.Plain"]
    );
}

#[test]
fn given_same_inputs_when_ordering_runs_twice_then_outputs_are_identical() {
    let chain = chain_of(&[
        "com.plugin.SomeInterceptor",
        "org.vendor.VendorInterceptor",
        "org.package.logging.LoggerInterceptor",
        "com.plugin.SomeOtherInterceptor",
    ]);
    let priority = priority_of(&["org.package", "com.plugin"]);

    let first = ordered_identities(&chain, &priority);
    let second = ordered_identities(&chain, &priority);
    assert_eq!(first, second);
}

#[test]
fn given_registrations_when_sorted_directly_then_unmatched_keep_relative_order_after_matched() {
    let registrations = ["org.y.Bar", "net.a.First", "com.x.Foo", "net.b.Second"]
        .into_iter()
        .map(|identity| FactoryRegistration {
            identity: identity.to_string(),
            factory: Arc::new(StubFactory),
        })
        .collect();
    let priority = priority_of(&["com.x", "org.y"]);

    let sorted: Vec<String> = sort_by_priority(registrations, &priority)
        .into_iter()
        .map(|registration| registration.identity)
        .collect();
    assert_eq!(
        sorted,
        vec!["com.x.Foo", "org.y.Bar", "net.a.First", "net.b.Second"]
    );
}

#[test]
fn given_location_filter_when_chain_is_resolved_then_only_applicable_factories_remain() {
    struct SourceOnlyFactory;

    impl InterceptorFactory for SourceOnlyFactory {
        fn intercept(&self, location: &ComponentLocation) -> bool {
            location.path.starts_with("source/")
        }
    }

    let mut chain = InterceptorChain::new();
    chain.add("com.x.Foo", Arc::new(SourceOnlyFactory));
    chain.add("org.y.Bar", Arc::new(StubFactory));

    let location = ComponentLocation {
        path: "flow/process".to_string(),
        component_id: "processor-1".to_string(),
    };
    let priority = priority_of(&["com.x", "org.y"]);
    let applicable = chain.applicable(&location, &priority);

    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0].identity, "org.y.Bar");
}
