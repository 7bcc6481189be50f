use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", r#"const s = a18n("Hello");"#)?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let texts: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        texts,
        json!([{
            "type": "string",
            "text": "Hello",
            "context": {
                "path": "./src/a.ts",
                "line": 1,
                "column": 10,
                "text": "const s = a18n(\"Hello\");"
            }
        }])
    );
    assert!(output.stderr.contains("Extracted 1 text from 1 file"));

    Ok(())
}

#[test]
fn test_extract_interpolated_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/greet.tsx",
        "export const Greet = ({ name }) => <p>{a18n`Hello ${name}!`}</p>;\n",
    )?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let texts: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts[0]["type"], "interpolated");
    assert_eq!(texts[0]["textParts"], json!(["Hello ", "!"]));
    assert_eq!(texts[0]["context"]["line"], 1);

    Ok(())
}

#[test]
fn test_extract_orders_files_by_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.ts", "a18n('second');")?;
    test.write_file("src/a.ts", "a18n('first'); a18n`third`;")?;

    let output = run(&mut test.extract_command())?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    let paths: Vec<&str> = texts
        .iter()
        .filter_map(|t| t["context"]["path"].as_str())
        .collect();

    assert_eq!(paths, vec!["./src/a.ts", "./src/a.ts", "./src/b.ts"]);
    assert_eq!(texts[1]["textParts"], json!(["third"]));

    Ok(())
}

#[test]
fn test_invalid_marker_call_fails_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/bad.ts", "const x = 1;\nconst s = a18n(name);\n")?;
    test.write_file("src/good.ts", "a18n('kept');")?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.code, Some(1));

    // Only the good file contributes texts.
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0]["text"], "kept");

    assert!(
        output
            .stderr
            .contains("error: failed to extract texts from ./src/bad.ts:2:10"),
        "stderr: {}",
        output.stderr
    );
    assert!(
        output
            .stderr
            .contains("a18n() has signature a18n(text: string), instead received: Identifier")
    );
    assert!(output.stderr.contains("1 of 2 files failed"));

    Ok(())
}

#[test]
fn test_syntax_error_fails_file() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = a18n('x');")?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stderr
            .contains("failed to extract texts from ./src/broken.ts")
    );
    assert!(output.stderr.contains("syntax error"));
    assert_eq!(output.stdout.trim(), "[]");

    Ok(())
}

#[test]
fn test_marker_from_flag_env_and_config() -> Result<()> {
    let test = CliTest::with_file("app.ts", "t('from t'); _('from underscore'); a18n('default');")?;

    let output = run(test.extract_command().args(["--marker", "t"]))?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0]["text"], "from t");

    let output = run(test.extract_command().env("TAGTEXT_MARKER", "_"))?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts[0]["text"], "from underscore");

    test.write_file(".tagtextrc.json", r#"{ "marker": "t" }"#)?;
    let output = run(&mut test.extract_command())?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;
    assert_eq!(texts[0]["text"], "from t");

    Ok(())
}

#[test]
fn test_invalid_marker_flag_is_an_error() -> Result<()> {
    let test = CliTest::with_file("app.ts", "a18n('x');")?;

    let output = run(test.extract_command().args(["--marker", "i18n.t"]))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid marker"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_missing_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.extract_command().arg("nope.ts"))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Path does not exist: nope.ts"));

    Ok(())
}

#[test]
fn test_explicit_file_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.ts", "a18n('a');")?;
    test.write_file("src/b.ts", "a18n('b');")?;

    let output = run(test.extract_command().arg("src/b.ts"))?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;

    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0]["context"]["path"], "src/b.ts");

    Ok(())
}

#[test]
fn test_ignores_node_modules_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("node_modules/lib/index.js", "a18n('vendored');")?;
    test.write_file("src/a.js", "a18n('own');")?;

    let output = run(&mut test.extract_command())?;
    let texts: Vec<Value> = serde_json::from_str(&output.stdout)?;

    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0]["text"], "own");

    Ok(())
}

#[test]
fn test_text_format() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "const s = a18n(\"Hello\");\n")?;

    let output = run(test.extract_command().args(["--format", "text"]))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        concat!(
            "\"Hello\"  string\n",
            "  --> ./src/a.ts:1:10\n",
            "  |\n",
            "1 | const s = a18n(\"Hello\");\n",
            "  |           ^\n",
            "\n",
        )
    );

    Ok(())
}

#[test]
fn test_no_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout.trim(), "[]");
    assert!(output.stderr.contains("Extracted 0 texts from 0 files"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.extract_command().arg("--help"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--marker"));
    assert!(output.stdout.contains("--format"));

    Ok(())
}
