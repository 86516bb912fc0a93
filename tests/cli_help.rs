use std::process::Command;

#[test]
fn test_help_mentions_prompting_for_map_name() {
    let bin = env!("CARGO_BIN_EXE_mapprep");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'mapprep' without arguments to be prompted for the map name."),
        "help output should mention running without arguments; got:\n{}",
        stdout
    );
    assert!(stdout.contains("--content-root"));
    assert!(stdout.contains("--no-compile"));
}

#[test]
fn test_compile_flags_conflict() {
    let bin = env!("CARGO_BIN_EXE_mapprep");

    let output = Command::new(bin)
        .args(["--map", "kz_test", "--compile", "--no-compile"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "got:\n{stderr}");
}
