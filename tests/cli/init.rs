use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("baseSection").is_some(),
        "Config should have 'baseSection' field"
    );
    assert!(
        parsed.get("referenceSection").is_some(),
        "Config should have 'referenceSection' field"
    );
    assert!(
        parsed.get("languages").is_some(),
        "Config should have 'languages' field"
    );

    assert_eq!(parsed["baseSection"], "en");
    assert_eq!(parsed["languages"].as_array().unwrap().len(), 9);

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"));

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .transpatchrc.json"));
    assert!(test.root().join(".transpatchrc.json").exists());

    let content = test.read_file(".transpatchrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transpatchrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"));

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(
        "i18n.js",
        "const TRANSLATIONS = {\n  en: {\n    hi: \"Hello\",\n  },\n  pl: {\n    hi: \"Czesc\",\n  },\n};\n",
    )?;

    // default sections from the initialized config, file and language on
    // the command line
    let (code, _, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de", "--apply"]));
    assert_eq!(code, 0);
    assert!(test.read_file("i18n.js")?.contains("  de: {"));

    Ok(())
}
