//! End-to-end resolution behaviour.

use std::collections::BTreeMap;

use motif::{
    resolve, ErrorKind, FieldKind, FieldSpec, Integration, MergeError, Predicate,
    ResolutionError, Schema, SchemaError, SubIntegration, ThemeBuildConfig, ThemeDefinition,
    ThemeUsage,
};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

fn pages(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn theme() -> ThemeDefinition {
    ThemeDefinition::named("theme-playground")
        .schema(
            Schema::new()
                .field("title", FieldSpec::string())
                .field("description", FieldSpec::string().optional())
                .field("sitemap", FieldSpec::boolean().default(true))
                .field("search", FieldSpec::boolean().default(false))
                .field("tags", FieldSpec::array(FieldKind::String).default(json!([]))),
        )
        .component("Heading", "./components/Heading")
        .component("Footer", "./components/Footer")
        .page("home", "/")
        .page("about", "/about")
        .css("a.css")
        .integration(SubIntegration::fixed(Predicate::Always, Integration::new("X")))
        .integration(SubIntegration::fixed(
            Predicate::enabled("search"),
            Integration::new("Y"),
        ))
        .integration(SubIntegration::fixed(
            Predicate::enabled("sitemap"),
            Integration::new("Z"),
        ))
}

fn usage() -> ThemeUsage {
    ThemeUsage::new().config(json!({ "title": "Hey!" }))
}

fn resolved(usage: ThemeUsage) -> ThemeBuildConfig {
    resolve(&theme(), &usage).unwrap()
}

// ============================================================================
// Schema
// ============================================================================

#[test]
fn omitted_optional_fields_take_their_defaults_exactly() {
    let build = resolved(usage());
    let config = build.config();
    assert_eq!(config.get("sitemap"), Some(&json!(true)));
    assert_eq!(config.get("search"), Some(&json!(false)));
    assert_eq!(config.get("tags"), Some(&json!([])));
    assert!(!config.contains("description"));
}

#[test]
fn undeclared_key_is_always_a_schema_error() {
    let err = resolve(
        &theme(),
        &ThemeUsage::new().config(json!({ "title": "Hey!", "colour": "red" })),
    )
    .unwrap_err();

    match err {
        ResolutionError::Schema(SchemaError::UnknownField { path }) => assert_eq!(path, "colour"),
        other => panic!("expected unknown field error, got {:?}", other),
    }
}

#[test]
fn type_mismatch_names_path_and_kinds() {
    let err = resolve(
        &theme(),
        &ThemeUsage::new().config(json!({ "title": "Hey!", "tags": ["ok", false] })),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert_eq!(err.path(), Some("tags[1]"));
    assert!(err.to_string().contains("expected string, got boolean"));
}

// ============================================================================
// Pages
// ============================================================================

#[test]
fn page_override_reroutes() {
    let build = resolved(usage().page("about", "/team"));
    assert_eq!(build.pages(), &pages(&[("home", "/"), ("about", "/team")]));
}

#[test]
fn page_removal_drops_the_key() {
    let build = resolved(usage().remove_page("about"));
    assert_eq!(build.pages(), &pages(&[("home", "/")]));
    assert!(!build.pages().contains_key("about"));
}

#[test]
fn unknown_page_key_is_fatal() {
    let err = resolve(&theme(), &usage().page("blog", "/b")).unwrap_err();
    assert!(matches!(
        err,
        ResolutionError::Merge(MergeError::UnknownPageKey { ref key }) if key == "blog"
    ));
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn every_default_slot_survives() {
    let build = resolved(usage().component("Heading", "./MyHeading"));
    let slots: Vec<_> = build.components().keys().map(String::as_str).collect();
    assert_eq!(slots, vec!["Footer", "Heading"]);
    assert_eq!(build.components()["Heading"].as_str(), "./MyHeading");
    assert_eq!(build.components()["Footer"].as_str(), "./components/Footer");
}

#[test]
fn unknown_slot_is_fatal() {
    let err = resolve(&theme(), &usage().component("Sidebar", "./S")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSlot);
}

// ============================================================================
// CSS
// ============================================================================

#[test]
fn css_is_append_only() {
    let build = resolved(usage().css("b.css"));
    assert_eq!(build.css(), ["a.css", "b.css"]);
}

#[test]
fn css_duplicates_are_kept_in_order() {
    let build = resolved(usage().css("a.css").css("a.css"));
    assert_eq!(build.css(), ["a.css", "a.css", "a.css"]);
}

// ============================================================================
// Integrations
// ============================================================================

#[test]
fn integrations_follow_declaration_order_of_passing_predicates() {
    let build = resolved(usage());
    let names: Vec<_> = build.integrations().iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["X", "Z"]);
}

#[test]
fn integrations_react_to_config() {
    let build = resolved(
        ThemeUsage::new().config(json!({ "title": "Hey!", "search": true, "sitemap": false })),
    );
    let names: Vec<_> = build.integrations().iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["X", "Y"]);
}

// ============================================================================
// Determinism and isolation
// ============================================================================

#[test]
fn resolving_twice_gives_equal_configs() {
    let theme = theme();
    let usage = usage()
        .page("about", "/team")
        .css("b.css")
        .component("Footer", "./F");
    assert_eq!(
        resolve(&theme, &usage).unwrap(),
        resolve(&theme, &usage).unwrap()
    );
}

#[test]
fn absent_and_empty_overrides_are_equivalent() {
    let absent = ThemeUsage::from_json(r#"{ "config": { "title": "Hey!" } }"#).unwrap();
    let empty = ThemeUsage::from_json(
        r#"{
            "config": { "title": "Hey!" },
            "pages": {},
            "overrides": { "css": [], "components": {} }
        }"#,
    )
    .unwrap();
    assert_eq!(resolve(&theme(), &absent).unwrap(), resolve(&theme(), &empty).unwrap());
}

#[test]
fn definitions_and_usages_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ThemeDefinition>();
    assert_send_sync::<ThemeUsage>();
    assert_send_sync::<ThemeBuildConfig>();
}

#[test]
fn parallel_resolutions_do_not_interfere() {
    let theme = theme();
    let handles: Vec<_> = ["/a", "/b", "/c", "/d"]
        .into_iter()
        .map(|route| {
            let theme = theme.clone();
            std::thread::spawn(move || {
                let build = resolve(&theme, &usage().page("about", route)).unwrap();
                (route, build.pages()["about"].clone())
            })
        })
        .collect();

    for handle in handles {
        let (route, resolved_route) = handle.join().unwrap();
        assert_eq!(route, resolved_route);
    }
}
