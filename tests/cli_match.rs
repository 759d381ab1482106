mod common;

use common::TestEnv;

#[test]
fn test_match_english() {
    let env = TestEnv::new();
    let result = env.run(&["match", "--child", "1990", "--parent", "1985", "--locale", "en"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("30% Caution"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("🐴 Horse → 🐮 Ox"));
    assert!(result.stdout.contains("Strengths"));
    assert!(result.stdout.contains("Advice"));
}

#[test]
fn test_match_korean_badge() {
    let env = TestEnv::new();
    let result = env.run(&["match", "--child", "1990", "--parent", "1985"]);

    assert!(result.success);
    assert!(result.stdout.contains("30% 주의"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("말띠"));
}

#[test]
fn test_match_verbose_shows_narrative_source() {
    let env = TestEnv::new();

    let authored = env.run(&["match", "--child", "1990", "--parent", "1985", "-v"]);
    assert!(authored.stdout.contains("narrative: authored"), "{}", authored.stdout);

    // Pig and Goat have no curated copy
    let synthesized = env.run(&["match", "--child", "2007", "--parent", "1979", "-v"]);
    assert!(
        synthesized.stdout.contains("narrative: synthesized"),
        "{}",
        synthesized.stdout
    );

    let quiet = env.run(&["match", "--child", "1990", "--parent", "1985"]);
    assert!(!quiet.stdout.contains("narrative:"));
}

#[test]
fn test_match_requires_both_years() {
    let env = TestEnv::new();
    let result = env.run(&["match", "--child", "1990"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--parent"), "{}", result.stderr);
}

#[test]
fn test_match_invalid_parent_year() {
    let env = TestEnv::new();
    let result = env.run(&["match", "--child", "1990", "--parent", "1800"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid year '1800'"), "{}", result.stderr);
}
