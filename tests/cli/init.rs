use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Created .i18ncheckrc.json

    ----- stderr -----
    ");

    assert_snapshot!(test.read_file(".i18ncheckrc.json")?, @r#"
    {
      "sourceRoot": "src",
      "checkedAttributes": [
        "placeholder",
        "title",
        "aria-label",
        "alt",
        "label",
        "aria-placeholder",
        "aria-valuetext",
        "aria-roledescription"
      ],
      "toastMethods": [
        "error",
        "success",
        "warning",
        "info"
      ],
      "ignores": [],
      "ignoreTexts": [],
      "ignoreTestFiles": true
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18ncheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("--init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .i18ncheckrc.json already exists
    ");
    assert_eq!(test.read_file(".i18ncheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_scan() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("--init").output()?;
    test.write_file("src/app.tsx", "<div>Hello</div>\n")?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    The following files contain non-internationalized user-visible text:

    src/app.tsx:1 -> "Hello"


    ----- stderr -----
    "#);

    Ok(())
}
