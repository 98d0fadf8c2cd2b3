use polydoc_core::{AnalysisSnapshot, ElementRecord, NormalizedEntity, RawMember};

use super::*;

mod elements_and_behaviors;

const PAPER_INPUT: &str = "src/paper-input.html";

fn load_snapshot(json: &str) -> AnalysisSnapshot {
    serde_json::from_str(json).expect("fixture snapshot should decode")
}

fn paper_input_snapshot() -> AnalysisSnapshot {
    load_snapshot(include_str!("../../tests/fixtures/paper_input.json"))
}

fn extract_paper_input() -> ExtractionResult {
    extract(&paper_input_snapshot(), PAPER_INPUT, &ExtractOptions::default())
}

fn element<'a>(result: &'a ExtractionResult, key: &str) -> &'a ElementRecord {
    result
        .elements
        .get(key)
        .unwrap_or_else(|| panic!("should find element '{key}', have {:?}", result.elements.keys()))
}

fn behavior<'a>(result: &'a ExtractionResult, key: &str) -> &'a NormalizedEntity {
    result
        .behaviors
        .get(key)
        .unwrap_or_else(|| panic!("should find behavior '{key}', have {:?}", result.behaviors.keys()))
}

fn members(json: &str) -> Vec<RawMember> {
    serde_json::from_str(json).expect("member list should decode")
}
