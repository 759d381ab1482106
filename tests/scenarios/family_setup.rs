//! Scenario: a family saves its preferences and reads both parents
//!
//! Journey: write a project config, then run a family reading that picks
//! up the configured locale and detail level.

use crate::common::*;

/// SCENARIO: English locale and verbose detail from `.zodiac.toml`
#[test]
fn scenario_family_reading_with_saved_preferences() {
    let env = TestEnv::new();

    // Step 1: save preferences
    env.write_project_config(
        "[display]\nlocale = \"en\"\n\n[output]\nverbosity = \"verbose\"\nunicode = false\n",
    );

    // Step 2: read a child against both parents
    let result = env.run(&[
        "family", "--child", "2008", "--father", "1982", "--mother", "1997",
    ]);
    assert!(result.success, "Step 2:\n{}", result.combined_output());

    let output = &result.stdout;
    assert!(output.contains("Father"), "{output}");
    assert!(output.contains("Mother"), "{output}");
    assert!(output.contains("50% Average"), "{output}");
    assert!(output.contains("90% Best"), "{output}");
    assert!(output.contains("narrative: authored"), "{output}");

    // unicode = false falls back to ASCII borders
    assert!(!output.contains('╭'), "{output}");

    // Step 3: the father's result comes first
    let father_at = output.find("50% Average").unwrap();
    let mother_at = output.find("90% Best").unwrap();
    assert!(father_at < mother_at);
}
