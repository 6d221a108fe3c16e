use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn doodlepad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("doodlepad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("WAYLAND_DISPLAY");
    cmd
}

const SCRIPT: &str = r#"
width = 120
height = 80
seed = 3

[[events]]
kind = "down"
x = 10
y = 40

[[events]]
kind = "move"
x = 60
y = 40

[[events]]
kind = "move"
x = 110
y = 20
"#;

fn write_script(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("drag.toml");
    std::fs::write(&path, SCRIPT).unwrap();
    path
}

#[test]
fn doodlepad_help_prints_usage() {
    let home = TempDir::new().unwrap();
    doodlepad_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pointer-driven drawing toy"))
        .stdout(predicate::str::contains("--replay"));
}

#[test]
fn active_mode_requires_wayland_env() {
    let home = TempDir::new().unwrap();
    doodlepad_cmd(&home)
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn replay_writes_my_canvas_png() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let script = write_script(&home);

    doodlepad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("my-canvas.png"));

    let bytes = std::fs::read(out.path().join("my-canvas.png")).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn replay_can_print_data_url() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let script = write_script(&home);

    doodlepad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(out.path())
        .args(["--shape", "circles", "--fill", "red", "--print-data-url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data:image/png;base64,"));
}

#[test]
fn invalid_fill_color_is_rejected() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home);

    doodlepad_cmd(&home)
        .arg("--replay")
        .arg(&script)
        .args(["--fill", "#12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("six hex digits"));
}

#[test]
fn print_data_url_requires_replay() {
    let home = TempDir::new().unwrap();
    doodlepad_cmd(&home)
        .arg("--print-data-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}
