use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TABLE: &str = r#"const TRANSLATIONS = {
  en: {
    cmd: {
      help: "Show help",
      status: "/status",
    },
    welcome: "Hello {user}, open the panel",
  },
  pl: {
    cmd: {
      help: "Pokaz pomoc",
      status: "/status",
    },
    welcome: "Czesc {user}",
  },
};

module.exports = { TRANSLATIONS };
"#;

const TABLE_WITH_DE: &str = r#"const TRANSLATIONS = {
  en: {
    cmd: {
      help: "Show help",
      status: "/status",
    },
    welcome: "Hello {user}, open the panel",
  },
  pl: {
    cmd: {
      help: "Pokaz pomoc",
      status: "/status",
    },
    welcome: "Czesc {user}",
  },
  de: {
    cmd: {
      help: "zeigen help",
      status: "/status",
    },
    welcome: "Hallo {user}, öffnen the Panel",
  },
};

module.exports = { TRANSLATIONS };
"#;

#[test]
fn test_dry_run_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    let (code, stdout, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de"]));

    assert_eq!(code, 1, "dry run with pending changes should exit 1");
    assert!(stdout.contains("Would inject"));
    assert!(stdout.contains("--apply"));
    assert_eq!(test.read_file("i18n.js")?, TABLE);
    Ok(())
}

#[test]
fn test_apply_injects_translated_section() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    let (code, stdout, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de", "--apply"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("Injected"));
    assert_eq!(test.read_file("i18n.js")?, TABLE_WITH_DE);
    Ok(())
}

#[test]
fn test_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de", "--apply"]));
    let after_first = test.read_file("i18n.js")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de", "--apply"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("already present"));
    assert_eq!(test.read_file("i18n.js")?, after_first);
    Ok(())
}

#[test]
fn test_second_dry_run_reports_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de", "--apply"]));

    let (code, stdout, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de"]));

    assert_eq!(code, 0, "no pending changes once the section exists");
    assert!(stdout.contains("nothing to do"));
    Ok(())
}

#[test]
fn test_multiple_languages_inject_in_order() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    let (code, _, _) = run(test.command().args([
        "generate", "--file", "i18n.js", "--lang", "de", "--lang", "fr", "--apply",
    ]));
    assert_eq!(code, 0);

    let content = test.read_file("i18n.js")?;
    let pl_pos = content.find("  pl: {").unwrap();
    let de_pos = content.find("  de: {").unwrap();
    let fr_pos = content.find("  fr: {").unwrap();
    let tail_pos = content.find("module.exports").unwrap();
    assert!(pl_pos < de_pos && de_pos < fr_pos && fr_pos < tail_pos);

    assert!(content.contains(r#"    welcome: "Bonjour {user}, ouvrir the panneau","#));
    Ok(())
}

#[test]
fn test_unknown_language_copies_base_text() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    let (code, stdout, _) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "xx", "--apply"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("no dictionary"));

    let content = test.read_file("i18n.js")?;
    assert!(content.contains("  xx: {"));
    assert!(content.contains(r#"    welcome: "Hello {user}, open the panel","#));
    Ok(())
}

#[test]
fn test_missing_base_section_fails() -> Result<()> {
    let test = CliTest::with_file("i18n.js", "const TRANSLATIONS = {\n  pl: {\n  },\n};\n")?;

    let (code, _, stderr) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "de"]));

    assert_eq!(code, 2);
    assert!(stderr.contains("not found"));
    assert_eq!(
        test.read_file("i18n.js")?,
        "const TRANSLATIONS = {\n  pl: {\n  },\n};\n"
    );
    Ok(())
}

#[test]
fn test_missing_file_argument_fails() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.command().args(["generate", "--lang", "de"]));

    assert_eq!(code, 2);
    assert!(stderr.contains("--file"));
    Ok(())
}

#[test]
fn test_config_file_drives_generation() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;
    test.write_file(
        ".transpatchrc.json",
        r#"{ "sourceFile": "i18n.js", "languages": ["de"] }"#,
    )?;

    let (code, _, _) = run(test.command().args(["generate", "--apply"]));

    assert_eq!(code, 0);
    assert_eq!(test.read_file("i18n.js")?, TABLE_WITH_DE);
    Ok(())
}

#[test]
fn test_terms_file_extends_builtin_dictionary() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;
    test.write_file("terms.json", r#"{ "de": { "help": "Hilfe" } }"#)?;

    let (code, _, _) = run(test.command().args([
        "generate",
        "--file",
        "i18n.js",
        "--lang",
        "de",
        "--terms-file",
        "terms.json",
        "--apply",
    ]));
    assert_eq!(code, 0);

    let content = test.read_file("i18n.js")?;
    assert!(content.contains(r#"      help: "zeigen Hilfe","#));
    Ok(())
}

#[test]
fn test_invalid_language_code_fails() -> Result<()> {
    let test = CliTest::with_file("i18n.js", TABLE)?;

    let (code, _, stderr) = run(test
        .command()
        .args(["generate", "--file", "i18n.js", "--lang", "DE"]));

    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid language code"));
    Ok(())
}
