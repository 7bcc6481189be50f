use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["marker"], "a18n");
    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );
    assert!(
        parsed.get("ignoreTestFiles").is_some(),
        "Config should have 'ignoreTestFiles' field"
    );
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .tagtextrc.json"));

    assert!(test.root().join(".tagtextrc.json").exists());
    assert_config_content(&test.read_file(".tagtextrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tagtextrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".tagtextrc.json already exists"));
    assert_eq!(test.read_file(".tagtextrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file("src/app.tsx", "export const App = () => <b>{a18n('Hi')}</b>;")?;

    let output = run(&mut test.extract_command())?;
    assert!(
        output.code == Some(0),
        "Extract should work with initialized config. stderr: {}",
        output.stderr
    );
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts[0]["text"], "Hi");

    Ok(())
}
