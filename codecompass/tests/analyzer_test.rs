//! File- and directory-level analyzer integration tests.

#![allow(clippy::unwrap_used)] // Tests use unwrap for clarity

use codecompass::analyzer::{analyze_directory, analyze_file};
use std::fs;
use tempfile::tempdir;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn analyze_file_reports_functions_in_textual_order() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("math.ts");
    fs::write(
        &path,
        r"function add(a, b) { return a + b; }

function classify(x) {
    if (x > 0) {
        return 'pos';
    }
    return 'neg';
}
",
    )?;

    let result = analyze_file(&path)?;

    assert!(result.file_path.ends_with("math.ts"));
    assert_eq!(result.aggregate.function_count, 2);
    assert_eq!(result.functions[0].name, "add");
    assert_eq!(result.functions[1].name, "classify");
    assert_eq!(result.functions[0].location.start_line, 1);
    assert_eq!(result.functions[1].location.start_line, 3);
    assert_eq!(result.functions[0].mccabe, 1);
    assert_eq!(result.functions[1].mccabe, 2);
    assert!(close(result.aggregate.mccabe.total, 3.0));
    assert!(close(result.aggregate.mccabe.avg, 1.5));
    Ok(())
}

#[test]
fn class_methods_are_extracted_as_units() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("car.js");
    fs::write(
        &path,
        r"class Car {
    drive(x) {
        if (x > 0) {
            return 'forward';
        }
        return 'idle';
    }
}
",
    )?;

    let result = analyze_file(&path)?;

    assert_eq!(result.aggregate.function_count, 1);
    assert_eq!(result.functions[0].name, "drive");
    assert_eq!(result.functions[0].location.start_line, 2);
    assert_eq!(result.functions[0].mccabe, 2);
    assert!(result.functions[0].halstead.volume > 0.0);
    Ok(())
}

#[test]
fn analyze_file_with_no_functions_yields_zeroed_aggregate() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.js");
    fs::write(&path, "// just a comment\n")?;

    let result = analyze_file(&path)?;

    assert_eq!(result.aggregate.function_count, 0);
    assert!(result.functions.is_empty());
    assert!(close(result.aggregate.mccabe.total, 0.0));
    assert!(close(result.aggregate.halstead.volume.avg, 0.0));
    Ok(())
}

#[test]
fn analyze_file_rejects_unsupported_extension() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("notes.md");
    fs::write(&path, "function f() {}")?;
    assert!(analyze_file(&path).is_err());
    Ok(())
}

#[test]
fn median_is_the_middle_of_the_sorted_pool() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("branches.js");
    // Complexities 1, 2, 3, 4
    fs::write(
        &path,
        r"function f1() { return 1; }
function f2(a) { if (a) { return 1; } return 0; }
function f3(a, b) { if (a) { if (b) { return 2; } return 1; } return 0; }
function f4(a, b, c) { if (a) { if (b) { if (c) { return 3; } } } return 0; }
",
    )?;

    let result = analyze_file(&path)?;

    assert_eq!(result.aggregate.function_count, 4);
    assert!(close(result.aggregate.mccabe.total, 10.0));
    assert!(close(result.aggregate.mccabe.avg, 2.5));
    // even-sized pool: mean of the two middle values
    assert!(close(result.aggregate.mccabe.median, 2.5));
    Ok(())
}

#[test]
fn directory_drops_zero_signal_files_from_files_and_pool() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(
        root.join("good.js"),
        "function f(a) { if (a) { return 1; } return 0; }\n",
    )?;
    fs::write(root.join("empty.js"), "// nothing analyzable here\n")?;

    let result = analyze_directory(root, &[])?;

    assert_eq!(result.aggregate.file_count, 1);
    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].file_path.ends_with("good.js"));
    assert_eq!(result.aggregate.function_count, 1);
    // The dropped file must not dilute the aggregate
    assert!(close(result.aggregate.mccabe.avg, 2.0));
    Ok(())
}

#[test]
fn directory_pool_weights_every_function_equally() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    // one file with three functions, one file with one
    fs::write(
        root.join("many.js"),
        r"function a(x) { if (x) { return 1; } return 0; }
function b(x) { if (x) { return 1; } return 0; }
function c(x) { if (x) { return 1; } return 0; }
",
    )?;
    fs::write(root.join("one.js"), "function d() { return 1; }\n")?;

    let result = analyze_directory(root, &[])?;

    assert_eq!(result.aggregate.file_count, 2);
    assert_eq!(result.aggregate.function_count, 4);
    // pool of [2, 2, 2, 1], not an average of per-file averages
    assert!(close(result.aggregate.mccabe.total, 7.0));
    assert!(close(result.aggregate.mccabe.avg, 1.75));
    Ok(())
}

#[test]
fn directory_files_are_sorted_by_path() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("zeta.js"), "function z() { return 1; }\n")?;
    fs::write(root.join("alpha.js"), "function a() { return 1; }\n")?;

    let result = analyze_directory(root, &[])?;

    assert_eq!(result.files.len(), 2);
    assert!(result.files[0].file_path.ends_with("alpha.js"));
    assert!(result.files[1].file_path.ends_with("zeta.js"));
    Ok(())
}

#[test]
fn directory_skips_default_excluded_folders() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules/pkg"))?;
    fs::write(
        root.join("node_modules/pkg/index.js"),
        "function vendored() { return 1; }\n",
    )?;
    fs::write(root.join("app.js"), "function app() { return 1; }\n")?;

    let result = analyze_directory(root, &[])?;

    assert_eq!(result.aggregate.file_count, 1);
    assert!(result.files[0].file_path.ends_with("app.js"));
    Ok(())
}

#[test]
fn directory_honors_extra_excludes() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("generated"))?;
    fs::write(
        root.join("generated/gen.js"),
        "function gen() { return 1; }\n",
    )?;
    fs::write(root.join("app.js"), "function app() { return 1; }\n")?;

    let result = analyze_directory(root, &["generated".to_owned()])?;

    assert_eq!(result.aggregate.file_count, 1);
    assert!(result.files[0].file_path.ends_with("app.js"));
    Ok(())
}

#[test]
fn analysis_is_deterministic() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(
        root.join("a.js"),
        "function f(x) { return x > 0 ? 1 : 0; }\n",
    )?;
    fs::write(root.join("b.ts"), "function g() { return 'ok'; }\n")?;

    let first = analyze_directory(root, &[])?;
    let second = analyze_directory(root, &[])?;
    assert_eq!(first, second);
    Ok(())
}
