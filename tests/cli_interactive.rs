mod common;

use common::TestEnv;

#[test]
fn test_no_command_without_terminal_prints_hint() {
    let env = TestEnv::new();
    let result = env.run(&[]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("No command provided."), "{}", result.stderr);
    assert!(result.stderr.contains("zodiac --help"));
}

#[test]
fn test_no_command_json_emits_error_event() {
    let env = TestEnv::new();
    let result = env.run(&["--json"]);

    assert_eq!(result.exit_code, 2);
    let events = result.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "interactive");
    assert_eq!(events[0]["code"], "no_command");
}
