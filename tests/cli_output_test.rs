use std::process::{Command, Output};

// These tests exercise the real binary against a real system Python, the
// way the script is actually used.

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cli"))
        .args(args)
        .output()
        .expect("failed to spawn cli binary")
}

#[test]
fn test_no_arguments_exits_zero_with_two_lines() {
    let output = run_cli(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Running example Python CLI from usefull-scripts");
}

#[test]
fn test_version_line_is_major_minor_patch() {
    let output = run_cli(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let version_line = stdout.lines().nth(1).expect("missing version line");

    let rest = version_line.strip_prefix("Python: ").expect("missing 'Python: ' prefix");
    let components: Vec<&str> = rest.split('.').collect();
    assert_eq!(components.len(), 3);
    for component in components {
        component.parse::<u32>().expect("version component is not a number");
    }
}

#[test]
fn test_extraneous_arguments_are_ignored() {
    let baseline = run_cli(&[]);
    let with_args = run_cli(&["foo", "--bar", "-v", "--help"]);

    assert!(with_args.status.success());
    assert_eq!(with_args.stdout, baseline.stdout);
}

#[test]
fn test_successive_runs_are_byte_identical() {
    let first = run_cli(&[]);
    let second = run_cli(&[]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
