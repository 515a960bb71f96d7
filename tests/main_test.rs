use std::{io::Write, process::Command};
use tempfile::NamedTempFile;
use torus_life::{load_cell_group, DefaultLife, Error};

const GLIDER: &str = "0 1\n1 2\n2 0\n2 1\n2 2\n";

fn pattern_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn seeded(contents: &str) -> DefaultLife {
    let file = pattern_file(contents);
    let mut life = DefaultLife::new();
    let group = load_cell_group(file.path(), life.height(), life.width()).unwrap();
    life.set_cell_group(&group, true).unwrap();
    life
}

fn live_sorted(life: &DefaultLife) -> Vec<(usize, usize)> {
    let mut cells = life.live_cells().collect::<Vec<_>>();
    cells.sort();
    cells
}

#[test]
fn test_glider_moves_diagonally() {
    let mut life = seeded(GLIDER);
    let start = live_sorted(&life);

    for _ in 0..4 {
        life.update();
    }
    let shifted = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect::<Vec<_>>();
    assert_eq!(live_sorted(&life), shifted);
}

#[test]
fn test_glider_circles_the_torus() {
    // One cell per 4 generations: 40 columns take 160 generations, rows wrap twice.
    let mut life = seeded(GLIDER);
    let start = life.render();
    for _ in 0..160 {
        life.update();
        assert_eq!(life.population(), 5);
    }
    assert_eq!(life.render(), start);
    assert_eq!(life.generation(), 160);
}

#[test]
fn test_loading_errors() {
    let file = pattern_file("25 5\n");
    assert!(matches!(
        load_cell_group(file.path(), 20, 40),
        Err(Error::OutOfBounds { .. })
    ));

    let file = pattern_file("abc 3\n");
    assert!(matches!(
        load_cell_group(file.path(), 20, 40),
        Err(Error::Parse { line: 1, .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_cell_group(dir.path().join("nope"), 20, 40),
        Err(Error::FileOpen { .. })
    ));
}

#[test]
fn test_cli_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_torus_life"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);

    let output = Command::new(env!("CARGO_BIN_EXE_torus_life"))
        .args(["a.txt", "b.txt"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_reports_loading_errors() {
    let file = pattern_file("1 2\nabc 3\n");
    let output = Command::new(env!("CARGO_BIN_EXE_torus_life"))
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error, "), "stderr: {}", stderr);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}
