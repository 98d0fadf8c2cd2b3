use pretty_assertions::assert_eq;

use super::*;

#[test]
fn element_keys_are_capitalized_camel_case() {
    assert_eq!(element_key("paper-icon-button"), "PaperIconButton");
    assert_eq!(element_key("x"), "X");
    assert_eq!(element_key("my--elem"), "MyElem");
    assert_eq!(element_key("already-Camel"), "AlreadyCamel");
}

#[test]
fn behavior_namespace_prefix_is_stripped() {
    assert_eq!(behavior_key("Polymer.MyBehavior", "Polymer"), "MyBehavior");
    assert_eq!(behavior_key("MyBehavior", "Polymer"), "MyBehavior");
    assert_eq!(behavior_key("PolymerX.MyBehavior", "Polymer"), "PolymerX.MyBehavior");
    assert_eq!(behavior_key("Polymer.MyBehavior", ""), "Polymer.MyBehavior");
    assert_eq!(behavior_key("Acme.Thing", "Acme"), "Thing");
}

#[test]
fn only_entities_from_the_target_file_are_selected() {
    let result = extract_paper_input();
    let keys: Vec<&str> = result.elements.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["PaperInput", "PaperInputContainer"]);
    assert!(!result.behaviors.contains_key("OtherBehavior"));
}

#[test]
fn first_declared_element_wins() {
    let result = extract_paper_input();
    let input = element(&result, "PaperInput");
    assert_eq!(input.entity.name, "paper-input");
    assert_eq!(input.entity.description, "Material design text field.");
}

#[test]
fn element_record_carries_description_and_behaviors() {
    let result = extract_paper_input();
    let input = element(&result, "PaperInput");
    assert_eq!(
        input.entity.behaviors,
        vec![
            "Polymer.PaperInputBehavior".to_string(),
            "Polymer.IronFormElementBehavior".to_string(),
        ]
    );

    let container = element(&result, "PaperInputContainer");
    assert_eq!(container.entity.description, "");
    assert!(container.entity.behaviors.is_empty());
    assert!(container.entity.properties.is_empty());
    assert!(container.entity.methods.is_empty());
}

#[test]
fn behaviors_are_keyed_without_namespace() {
    let result = extract_paper_input();
    let keys: Vec<&str> = result.behaviors.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["PaperInputBehavior", "IronA11yKeysBehavior"]);

    let shared = behavior(&result, "PaperInputBehavior");
    assert_eq!(shared.name, "PaperInputBehavior");
    assert_eq!(shared.description, "Shared input behavior.");
    assert_eq!(shared.behaviors, vec!["Polymer.IronControlState".to_string()]);
    assert!(shared.properties.contains_key("disabled"));
    assert!(shared.methods.contains_key("focus"));
}

#[test]
fn custom_namespace_is_honored() {
    let options = ExtractOptions {
        behavior_namespace: String::new(),
    };
    let result = extract(&paper_input_snapshot(), PAPER_INPUT, &options);
    let keys: Vec<&str> = result.behaviors.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["Polymer.PaperInputBehavior", "IronA11yKeysBehavior", "PaperInputBehavior"]
    );
}

#[test]
fn imports_and_path_pass_through() {
    let result = extract_paper_input();
    assert_eq!(result.path, PAPER_INPUT);
    assert_eq!(
        result.imports,
        vec![
            "../polymer/polymer.html".to_string(),
            "../iron-input/iron-input.html".to_string(),
        ]
    );
}

#[test]
fn absent_behavior_list_is_empty() {
    let snapshot = load_snapshot(include_str!("../../tests/fixtures/no_behaviors.json"));
    let result = extract(&snapshot, "base-element.html", &ExtractOptions::default());
    assert!(result.behaviors.is_empty());
    assert_eq!(result.imports, vec!["polymer.html".to_string()]);
    assert_eq!(element(&result, "BaseElement").extends_name, None);
}

#[test]
fn unknown_path_yields_empty_result() {
    let result = extract(&paper_input_snapshot(), "missing.html", &ExtractOptions::default());
    assert_eq!(result, ExtractionResult::new("missing.html"));
}
