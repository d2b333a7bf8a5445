use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const PAGE: &str = r#"import Upgrade from "./upgrade";

export default function Page() {
  return (
    <main>
      {currentPlan === "pro" ? (
        <Upgrade />
      ) : (
        <Badge />
      )}
    </main>
  );
}
"#;

const PAGE_PATCHED: &str = r#"import Upgrade from "./upgrade";

export default function Page() {
  return (
    <main>
      <BillingCTA currentPlan={currentPlan} />
    </main>
  );
}
"#;

const START: &str = r#"{currentPlan === "pro" ? ("#;

#[test]
fn test_dry_run_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    let (code, stdout, _) = run(test.command().args([
        "patch",
        "--file",
        "page.tsx",
        "--start",
        START,
        "--end",
        ")}",
        "--text",
        "<BillingCTA currentPlan={currentPlan} />",
    ]));

    assert_eq!(code, 1, "dry run with pending changes should exit 1");
    assert!(stdout.contains("Would patch"));
    assert_eq!(test.read_file("page.tsx")?, PAGE);
    Ok(())
}

#[test]
fn test_apply_replaces_span_inclusive_of_end_marker() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    let (code, stdout, _) = run(test.command().args([
        "patch",
        "--file",
        "page.tsx",
        "--start",
        START,
        "--end",
        ")}",
        "--text",
        "<BillingCTA currentPlan={currentPlan} />",
        "--apply",
    ]));

    assert_eq!(code, 0);
    assert!(stdout.contains("Patched"));
    assert_eq!(test.read_file("page.tsx")?, PAGE_PATCHED);
    Ok(())
}

#[test]
fn test_replacement_from_file() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;
    test.write_file("cta.txt", "<BillingCTA currentPlan={currentPlan} />")?;

    let (code, _, _) = run(test.command().args([
        "patch",
        "--file",
        "page.tsx",
        "--start",
        START,
        "--end",
        ")}",
        "--replacement",
        "cta.txt",
        "--apply",
    ]));

    assert_eq!(code, 0);
    assert_eq!(test.read_file("page.tsx")?, PAGE_PATCHED);
    Ok(())
}

#[test]
fn test_missing_end_marker_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    let (code, _, stderr) = run(test.command().args([
        "patch",
        "--file",
        "page.tsx",
        "--start",
        START,
        "--end",
        "NO_SUCH_MARKER",
        "--text",
        "x",
        "--apply",
    ]));

    assert_eq!(code, 2);
    assert!(stderr.contains("End marker not found"));
    assert_eq!(test.read_file("page.tsx")?, PAGE, "file must stay byte-identical");
    Ok(())
}

#[test]
fn test_missing_start_marker_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    let (code, _, stderr) = run(test.command().args([
        "patch",
        "--file",
        "page.tsx",
        "--start",
        "NO_SUCH_MARKER",
        "--end",
        ")}",
        "--text",
        "x",
        "--apply",
    ]));

    assert_eq!(code, 2);
    assert!(stderr.contains("Start marker not found"));
    assert_eq!(test.read_file("page.tsx")?, PAGE);
    Ok(())
}

#[test]
fn test_span_already_matching_is_a_no_op() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    // replacement equal to the span itself: nothing to change
    let span = r#"{currentPlan === "pro" ? (
        <Upgrade />
      ) : (
        <Badge />
      )}"#;
    let (code, stdout, _) = run(test.command().args([
        "patch", "--file", "page.tsx", "--start", START, "--end", ")}", "--text", span,
    ]));

    assert_eq!(code, 0);
    assert!(stdout.contains("nothing to do"));
    Ok(())
}

#[test]
fn test_requires_exactly_one_replacement_source() -> Result<()> {
    let test = CliTest::with_file("page.tsx", PAGE)?;

    let (code, _, stderr) = run(test.command().args([
        "patch", "--file", "page.tsx", "--start", START, "--end", ")}",
    ]));

    assert_eq!(code, 2);
    assert!(stderr.contains("--replacement or --text"));
    Ok(())
}
