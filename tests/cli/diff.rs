use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

/// A repository with one committed file. `None` when git is unavailable.
fn repository() -> Result<Option<CliTest>> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "<div>{t('title')}</div>\n<div>Old text</div>\n",
    )?;
    if !test.git(&["init", "--quiet"])? {
        return Ok(None);
    }
    test.git(&["add", "."])?;
    test.git(&["commit", "--quiet", "-m", "initial"])?;
    Ok(Some(test))
}

#[test]
fn test_diff_reports_only_added_lines() -> Result<()> {
    let Some(test) = repository()? else {
        return Ok(());
    };
    test.write_file(
        "src/app.tsx",
        "<div>{t('title')}</div>\n<div>Old text</div>\n<div>New text</div>\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("--diff"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    The following files contain non-internationalized user-visible text:

    src/app.tsx:3 -> "New text"


    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_diff_without_changes() -> Result<()> {
    let Some(test) = repository()? else {
        return Ok(());
    };

    assert_cmd_snapshot!(test.command().arg("--diff"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No changed lines to scan for i18n violations.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_staged_diff() -> Result<()> {
    let Some(test) = repository()? else {
        return Ok(());
    };
    test.write_file("src/app.tsx", "<h1>Staged title</h1>\n<div>Old text</div>\n")?;
    test.git(&["add", "src/app.tsx"])?;

    assert_cmd_snapshot!(test.command().arg("--staged"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    The following files contain non-internationalized user-visible text:

    src/app.tsx:1 -> "Staged title"


    ----- stderr -----
    "#);

    assert_cmd_snapshot!(test.command().arg("--diff"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No changed lines to scan for i18n violations.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_diff_limited_to_files() -> Result<()> {
    let Some(test) = repository()? else {
        return Ok(());
    };
    test.write_file("src/other.tsx", "<p>Other</p>\n")?;
    test.git(&["add", "src/other.tsx"])?;
    test.git(&["commit", "--quiet", "-m", "other"])?;
    test.write_file("src/other.tsx", "<p>Other</p>\n<p>Changed other</p>\n")?;
    test.write_file(
        "src/app.tsx",
        "<div>{t('title')}</div>\n<div>Old text</div>\n<div>Changed app</div>\n",
    )?;

    assert_cmd_snapshot!(test.command().args(["--diff", "src/app.tsx"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    The following files contain non-internationalized user-visible text:

    src/app.tsx:3 -> "Changed app"


    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_diff_ignores_test_files() -> Result<()> {
    let Some(test) = repository()? else {
        return Ok(());
    };
    test.write_file("src/app.test.tsx", "<div>Fixture</div>\n")?;
    test.git(&["add", "src/app.test.tsx"])?;

    assert_cmd_snapshot!(test.command().arg("--staged"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No changed lines to scan for i18n violations.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_diff_outside_repository() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "<div>Text</div>\n")?;
    let mut settings = test.settings();
    settings.add_filter(
        r"(?s)Unable to read git diff \(.*\)\.",
        "Unable to read git diff ([DETAILS]).",
    );
    let _guard = settings.bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("--diff"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Unable to read git diff ([DETAILS]).
    ");

    Ok(())
}
