//! Scenario: a parent checks compatibility with their child
//!
//! Journey: validate both years, look up each sign, then ask for the match.

use crate::common::*;

/// SCENARIO: 1990 child, 1985 parent
///
/// Horse and Ox sit in a harm relation, so the reading is Caution.
#[test]
fn scenario_horse_child_with_ox_parent() {
    let env = TestEnv::new();

    // Step 1: both years pass form validation
    for year in ["1990", "1985"] {
        let result = env.run(&["validate", year, "--locale", "en"]);
        assert!(result.success, "Step 1: {year} should be valid\n{}", result.stdout);
    }

    // Step 2: each year resolves to its sign
    let child = env.run(&["sign", "1990", "--json"]);
    assert_eq!(child.result_data()["animal"], "horse");
    let parent = env.run(&["sign", "1985", "--json"]);
    assert_eq!(parent.result_data()["animal"], "ox");

    // Step 3: the match carries the curated narrative
    let reading = env.run(&["match", "--child", "1990", "--parent", "1985", "--json"]);
    let data = reading.result_data();
    assert_eq!(data["result"]["score"], 30);
    assert_eq!(data["result"]["grade"], "caution");
    assert_eq!(data["result"]["positive_aspects"].as_array().unwrap().len(), 3);
    assert_eq!(data["result"]["challenges"].as_array().unwrap().len(), 3);
    assert_eq!(data["result"]["advice"].as_array().unwrap().len(), 3);

    // Step 4: the text view agrees with the JSON
    let text = env.run(&["match", "--child", "1990", "--parent", "1985", "--locale", "en"]);
    assert!(text.stdout.contains("30% Caution"), "Step 4:\n{}", text.stdout);
    // long lines wrap inside the box, so compare the opening words
    let summary = data["result"]["summary"].as_str().unwrap();
    let opening: String = summary.chars().take(30).collect();
    assert!(text.stdout.contains(&opening), "Step 4: summary missing\n{}", text.stdout);
}

/// SCENARIO: a typo in the year is caught before any reading
#[test]
fn scenario_typo_in_year_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["validate", "199O"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("not a number"), "{}", result.stdout);

    let result = env.run(&["validate", "1990"]);
    assert!(result.success);
}
