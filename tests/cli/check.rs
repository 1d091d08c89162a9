use std::process::Command;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

/// Run the command, assert it completed, and return its stdout.
fn stdout_of(cmd: &mut Command) -> Result<String> {
    let output = cmd.output()?;
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[test]
fn test_all_clear() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/en-US/common.json",
        r#"{"hello": "Hi", "menu": {"open": "Open"}}"#,
    )?;
    test.write_file(
        "i18n/fr/common.json",
        r#"{"hello": "Salut", "menu": {"open": "Ouvrir"}}"#,
    )?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

No errors or warnings detected, your i18n folder is good to go!
"#
    );

    Ok(())
}

#[test]
fn test_absent_root_folder() -> Result<()> {
    let test = CliTest::new()?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 error(s):
     - E01: Cannot continue with the checks: folder "i18n" doesn't exist

Please fix them and run the check again.
"#
    );

    Ok(())
}

#[test]
fn test_root_path_is_a_file() -> Result<()> {
    let test = CliTest::with_file("i18n", "not a folder")?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 error(s):
     - E02: Cannot continue with the checks: file "i18n" is not a folder

Please fix them and run the check again.
"#
    );

    Ok(())
}

#[test]
fn test_orphan_translation() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;
    test.write_file(
        "i18n/fr/common.json",
        r#"{"hello": "Salut", "bye": "Au revoir"}"#,
    )?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 warning(s):
     - W07: String "common/bye" is translated in locale fr but is missing from default locale en-US (translation of unknown string)

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
"#
    );

    Ok(())
}

#[test]
fn test_missing_translation_grouped_across_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/en-US/common.json",
        r#"{"hello": "Hi", "bye": "Bye"}"#,
    )?;
    test.write_file("i18n/de/common.json", r#"{"hello": "Hallo"}"#)?;
    test.write_file("i18n/fr/common.json", r#"{"hello": "Salut"}"#)?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

2 warning(s):
     - W06: Locale de is missing string "common/bye" (untranslated from en-US)
     - W06: Locale fr is missing string "common/bye" (untranslated from en-US)

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
"#
    );

    Ok(())
}

#[test]
fn test_missing_domain_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/en-US/auth.json",
        r#"{"login": "Log in", "logout": "Log out"}"#,
    )?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("i18n/fr/common.json", r#"{"hello": "Salut"}"#)?;

    // A domain file absent from fr warns once per string it should hold.
    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

2 warning(s):
     - W06: Locale fr is missing string "auth/login" (untranslated from en-US)
     - W06: Locale fr is missing string "auth/logout" (untranslated from en-US)

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
"#
    );

    Ok(())
}

#[test]
fn test_illegal_key_character_stops_pipeline() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en-US/common.json", r#"{"a/b": "x"}"#)?;
    test.write_file("i18n/fr/common.json", "{}")?;

    // No W06 for fr lacking the key: the run stops at the first error.
    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 error(s):
     - E04: String "common/a/b" of en-US locale contains illegal character "/" in its name

Please fix them and run the check again.
"#
    );

    Ok(())
}

#[test]
fn test_invalid_value_type() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/en-US/common.json",
        r#"{"hello": "Hi", "count": 3}"#,
    )?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 error(s):
     - E05: String "common/count" of en-US locale contains data "3" of invalid type "number"

Please fix them and run the check again.
"#
    );

    Ok(())
}

#[test]
fn test_parse_failure() -> Result<()> {
    let test = CliTest::with_file("i18n/en-US/common.json", "{ broken")?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert!(stdout.contains("1 error(s):"));
    assert!(stdout.contains(r#"     - E03: Cannot parse JSON file "en-US/common.json": "#));
    assert!(stdout.ends_with("Please fix them and run the check again.\n"));

    Ok(())
}

#[test]
fn test_stray_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/README.md", "strays everywhere")?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("i18n/en-US/notes.txt", "scratch")?;
    test.create_dir("i18n/en-US/icons")?;
    test.write_file("i18n/fr/common.json", r#"{"hello": "Salut"}"#)?;
    test.create_dir("i18n/images")?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

4 warning(s):
     - W02: i18n folder contains stray file "README.md"
     - W04: en-US folder contains stray folder "icons"
     - W05: en-US folder contains stray file "notes.txt"
     - W03: Unknown locale for folder "images"

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
"#
    );

    Ok(())
}

#[test]
fn test_default_locale_folder_missing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/fr/common.json", r#"{"hello": "Salut"}"#)?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

2 warning(s):
     - W01: Default locale en-US is missing from the i18n folder
     - W07: String "common/hello" is translated in locale fr but is missing from default locale en-US (translation of unknown string)

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
"#
    );

    Ok(())
}

#[test]
fn test_warnings_listed_before_errors() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/README.md", "stray")?;
    test.write_file("i18n/en-US/common.json", r#"{"a b": "x"}"#)?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

1 warning(s):
     - W02: i18n folder contains stray file "README.md"

Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.
1 error(s):
     - E04: String "common/a b" of en-US locale contains illegal character " " in its name

Please fix them and run the check again.
"#
    );

    Ok(())
}

#[test]
fn test_empty_locale_folder_ignored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;
    test.create_dir("i18n/fr")?;

    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

No errors or warnings detected, your i18n folder is good to go!
"#
    );

    Ok(())
}

#[test]
fn test_custom_config_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingotrc.json",
        r#"{
         "supportedLocales": ["en-US", "tlh"],
         "defaultLocale": "en-US"
     }"#,
    )?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;
    test.write_file("i18n/tlh/common.json", r#"{"hello": "nuqneH"}"#)?;

    // "tlh" would be an unknown locale under the default configuration.
    let stdout = stdout_of(&mut test.check_command("i18n"))?;
    assert_eq!(
        stdout,
        r#"Checking i18n folder i18n...

No errors or warnings detected, your i18n folder is good to go!
"#
    );

    Ok(())
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingotrc.json", r#"{ "defaultLocale": "tlh" }"#)?;
    test.write_file("i18n/en-US/common.json", r#"{"hello": "Hi"}"#)?;

    let output = test.check_command("i18n").output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("supportedLocales"));

    // The run aborts before the banner.
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");

    Ok(())
}

#[test]
fn test_path_argument_required() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("<PATH>"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: lingot"));
    assert!(stdout.contains("The path to the i18n folder to check"));

    Ok(())
}
