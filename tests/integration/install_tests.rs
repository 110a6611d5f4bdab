use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `sam` isolated from the user's environment and global config
fn sam(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.env("HOME", home)
        .env_remove("SAM_PLATFORM")
        .env_remove("SAM_TEMPLATES_DIR")
        .env_remove("SAM_LOG")
        .arg("--no-color");
    cmd
}

fn file_count(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_install_cursor() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .args(["--platform", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ agent rules (7 files)"))
        .stdout(predicate::str::contains("✓ workflow rule (1 file)"))
        .stdout(predicate::str::contains("@atlas"))
        .stdout(predicate::str::contains("Restart Cursor"));

    assert!(target.path().join(".cursor/rules/sam-atlas.mdc").is_file());
    assert!(target.path().join(".cursor/rules/sam-workflow.mdc").is_file());
    assert!(!target.path().join(".codex").exists());
    assert!(!target.path().join("_sam").exists());
}

#[test]
fn test_install_all() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .args(["-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ _sam/"))
        .stdout(predicate::str::contains("✓ .claude/commands/sam/"))
        .stdout(predicate::str::contains("/sam:sam:agents:atlas"))
        .stdout(predicate::str::contains("/sam-tdd-pipeline"))
        .stdout(predicate::str::contains("Installation complete!"));

    assert!(target.path().join("_sam/sam/agents/atlas.md").is_file());
    assert!(target
        .path()
        .join(".claude/commands/sam/core/workflows/autonomous-tdd.md")
        .is_file());
    assert!(target.path().join(".cursor/rules/sam-sam.mdc").is_file());
    assert!(target
        .path()
        .join(".codex/skills/sam-iris/references/agent.md")
        .is_file());
}

#[test]
fn test_install_creates_missing_target() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let target = root.path().join("new/project");

    sam(home.path())
        .arg(&target)
        .args(["-p", "codex"])
        .assert()
        .success();

    assert!(target.join(".codex/skills/sam-tdd-pipeline/SKILL.md").is_file());
}

#[test]
fn test_missing_templates_is_fatal() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let missing = home.path().join("no-templates");

    sam(home.path())
        .arg(target.path())
        .args(["-p", "all", "--templates"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Templates directory not found"));

    assert_eq!(file_count(target.path()), 0);
}

#[test]
fn test_templates_from_env() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let source = templates.path().join("_sam/sam/agents/atlas.md");
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, "Only Atlas here.").unwrap();

    sam(home.path())
        .env("SAM_TEMPLATES_DIR", templates.path())
        .arg(target.path())
        .args(["-p", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ agent rules (1 file)"));

    let rule = fs::read_to_string(target.path().join(".cursor/rules/sam-atlas.mdc")).unwrap();
    assert!(rule.contains("Only Atlas here."));
    assert!(!target.path().join(".cursor/rules/sam-dyna.mdc").exists());
}

#[test]
fn test_prompt_selects_platform() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a platform"))
        .stdout(predicate::str::contains("Installing SAM for codex"));

    assert!(target.path().join(".codex/skills/sam-atlas/SKILL.md").is_file());
}

#[test]
fn test_prompt_without_answer_fails() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No platform selected"));

    assert_eq!(file_count(target.path()), 0);
}

#[test]
fn test_prompt_unknown_answer_fails() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .write_stdin("vscode\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown platform 'vscode'"));

    assert_eq!(file_count(target.path()), 0);
}

#[test]
fn test_project_config_sets_platform() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    fs::write(target.path().join(".sam.toml"), "platform = \"cursor\"\n").unwrap();

    sam(home.path())
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a platform").not());

    assert!(target.path().join(".cursor/rules/sam-atlas.mdc").is_file());
}

#[test]
fn test_invalid_config_platform_is_fatal() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    fs::write(target.path().join(".sam.toml"), "platform = \"vscode\"\n").unwrap();

    sam(home.path())
        .arg(target.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown platform"));

    assert!(!target.path().join(".cursor").exists());
}

#[test]
fn test_reinstall_warns_and_overwrites() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    sam(home.path())
        .arg(target.path())
        .args(["-p", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist").not());

    let rule = target.path().join(".cursor/rules/sam-atlas.mdc");
    let original = fs::read(&rule).unwrap();
    fs::write(&rule, "stale").unwrap();

    sam(home.path())
        .arg(target.path())
        .args(["-p", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SAM files already exist"))
        .stdout(predicate::str::contains(".cursor/rules (8 files)"));

    assert_eq!(fs::read(&rule).unwrap(), original);
}
