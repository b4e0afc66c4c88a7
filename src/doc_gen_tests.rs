use super::*;
use std::fs;
use tempfile::tempdir;

const ARITHMETIC: &str = r#"export const arithmetic = {
  /**
   * Returns the absolute value of a number.
   */
  $abs(args: Value, vars: Variables): number {
    return Math.abs(args as number);
  },
  $add(args: Value[], vars: Variables): number {
    return 0;
  },
};
"#;

const STRING_OPS: &str = r#"export const string = {
  /**
   * Concatenates strings.
   */
  $concat(args: Value[], vars: Variables): string {
    return "";
  },
};
"#;

fn project_with_operations() -> std::io::Result<tempfile::TempDir> {
    let dir = tempdir()?;
    let ops = dir.path().join("src/operations");
    fs::create_dir_all(&ops)?;
    fs::write(ops.join("arithmetic.ts"), ARITHMETIC)?;
    fs::write(ops.join("string.ts"), STRING_OPS)?;
    fs::write(ops.join("index.ts"), "export * from \"./arithmetic\";\n")?;
    fs::write(
        ops.join("arithmetic.test.ts"),
        "$shouldNotAppear(args: 1)\n",
    )?;
    Ok(dir)
}

#[test]
fn catalog_skips_empty_and_test_files() -> Result<()> {
    let dir = project_with_operations()?;
    let config = DocGenConfig::new(dir.path().to_path_buf());

    let catalog = build_catalog(&config)?;
    let files: Vec<&str> = catalog
        .sections
        .iter()
        .map(|section| section.filename.as_str())
        .collect();
    assert_eq!(files, vec!["arithmetic.ts", "string.ts"]);
    assert_eq!(catalog.operation_count(), 3);
    assert_eq!(
        catalog.sections[0].operations,
        vec![OperationRecord::new("$abs", 2), OperationRecord::new("$add", 8)]
    );
    assert_eq!(catalog.sections[1].category, "String");
    Ok(())
}

#[test]
fn generation_writes_document_and_creates_parent() -> Result<()> {
    let dir = project_with_operations()?;
    let config = DocGenConfig::new(dir.path().to_path_buf());

    let summary = run_generation(&config)?;
    assert_eq!(summary.output, dir.path().join("docs/operations.md"));
    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.sections, 2);
    assert_eq!(summary.operations, 3);

    let written = fs::read_to_string(&summary.output)?;
    assert!(written.starts_with("# Available Operations\n\n## Arithmetic Operations\n"));
    assert!(written.contains("| `$add` | [source](src/operations/arithmetic.ts#L8) |"));
    assert!(!written.contains("Index Operations"));
    assert!(!written.contains("$shouldNotAppear"));
    Ok(())
}

#[test]
fn check_document_detects_staleness() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("docs/operations.md");
    assert!(!check_document(&path, "# Available Operations\n\n")?);

    write_document(&path, "# Available Operations\n\n")?;
    assert!(check_document(&path, "# Available Operations\n\n")?);
    assert!(!check_document(&path, "# Available Operations\n\n## X Operations\n")?);
    Ok(())
}

#[test]
fn unreadable_operations_dir_propagates() {
    let dir = tempdir().expect("tempdir");
    let config = DocGenConfig::new(dir.path().to_path_buf());
    let err = run_generation(&config).expect_err("missing operations dir must fail");
    assert!(err.to_string().contains("Failed to read directory"));
}

#[test]
fn invalid_config_is_rejected_before_scanning() {
    let mut config = DocGenConfig::default();
    config.extension = String::new();
    assert!(matches!(
        run_generation(&config),
        Err(OpdocsError::Validation { .. })
    ));
}
