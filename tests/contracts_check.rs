mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::path::Path;

/// Checks a report's `data` against `docs/contracts/<command>.schema.json`.
fn assert_contract(command: &str, report: &Value) {
    assert_eq!(report["ok"], true, "{command} envelope");

    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("docs/contracts")
        .join(format!("{command}.schema.json"));
    let raw = std::fs::read_to_string(&path).expect("read contract schema");
    let schema: Value = serde_json::from_str(&raw).expect("contract schema is json");
    let compiled = JSONSchema::compile(&schema).expect("compile schema");

    if let Err(errors) = compiled.validate(&report["data"]) {
        let violations: Vec<String> = errors.map(|e| format!("{}: {e}", e.instance_path)).collect();
        panic!("{command} report breaks its contract: {}", violations.join(" | "));
    };
}

#[test]
fn json_reports_match_contracts() {
    let env = TestEnv::new();

    assert_contract("encode", &env.run_json(&["encode", "v1.1.0", "v1.2.1"]));
    assert_contract("decode", &env.run_json(&["decode", "v1.3001002.3000001"]));
    assert_contract("version", &env.run_json(&["version"]));
}
