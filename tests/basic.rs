// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, stubbify_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stub_single_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "app.js",
        "start();\n//STUB\nenableDebug();\n//ENDSTUB\nfinish();",
    )?;

    stubbify_cmd()
        .args(["app.js", "-d", "dist"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let stubbed = fs::read_to_string(temp.path().join("dist/app.js"))?;
    assert_eq!(stubbed, "start();\nfinish();\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_stub_directory_mirrors_structure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.js", "a();\n// STUB\nx();\n// ENDSTUB\n")?;
    create_file(temp.path(), "src/lib/b.js", "b();\n")?;

    stubbify_cmd()
        .args(["src", "--dest", "out"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("out/src/a.js"))?, "a();\n");
    assert_eq!(fs::read_to_string(temp.path().join("out/src/lib/b.js"))?, "b();\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_no_recursive_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.js", "a();\n")?;
    create_file(temp.path(), "src/lib/b.js", "b();\n")?;

    stubbify_cmd()
        .args(["src", "-d", "out", "-n"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("out/src/a.js").exists());
    assert!(!temp.path().join("out/src/lib/b.js").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_rerun_skips_destination_inside_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.js", "a();\n")?;

    for _ in 0..2 {
        stubbify_cmd()
            .args([".", "-d", "out"])
            .current_dir(temp.path())
            .assert()
            .success();
    }

    assert!(temp.path().join("out/a.js").exists());
    assert!(!temp.path().join("out/out").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_custom_patterns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "script.py",
        "import os\n# begin debug\nimport pdb\n# END DEBUG\nprint(os.name)\n",
    )?;

    stubbify_cmd()
        .args([
            "script.py",
            "-d",
            "out",
            "--begin",
            r"^#\s*BEGIN DEBUG$",
            "--end",
            r"^#\s*END DEBUG$",
            "--ignore-case",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("out/script.py"))?,
        "import os\nprint(os.name)\n"
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_html_style() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "index.html",
        "<p>a</p>\n<!-- STUB -->\n<p>dev</p>\n<!-- ENDSTUB -->\n<p>b</p>\n",
    )?;

    stubbify_cmd()
        .args(["index.html", "-d", "out", "--style", "html"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("out/index.html"))?,
        "<p>a</p>\n<p>b</p>\n"
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_summary_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.js", "a();\n//STUB\nb();\n//ENDSTUB\n")?;

    stubbify_cmd()
        .args(["a.js", "-d", "out", "--summary"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stubbed Files: (1)"))
        .stdout(predicate::str::contains(
            "- a.js -> out/a.js (kept 1/4 lines, 1 block(s) removed)",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unterminated_block_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.js", "keep();\n//STUB\nlost();\n")?;

    stubbify_cmd()
        .args(["a.js", "-d", "out"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("out/a.js"))?, "keep();\n");

    temp.close()?;
    Ok(())
}
