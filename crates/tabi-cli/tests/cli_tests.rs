use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tabi_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tabi").expect("Failed to find tabi binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_seeds_and_lists_days() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "days",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Days"))
        .stdout(predicate::str::contains("2026-01-04 (SUN)"))
        .stdout(predicate::str::contains("2026-01-10 (SAT)"));
}

#[test]
fn test_cli_default_shows_first_day() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day Plan — 2026-01-04 (SUN)"))
        .stdout(predicate::str::contains("起飛"));
}

#[test]
fn test_cli_show_specific_day() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "show",
            "--date",
            "2026-01-07",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day Plan — 2026-01-07 (WED)"))
        .stdout(predicate::str::contains("瑪利歐賽車"))
        .stdout(predicate::str::contains("15:00 – 15:30"));
}

#[test]
fn test_cli_search_spans_all_days() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // "dior" matches a title on day 1 and a checklist entry on day 7.
    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "show",
            "--date",
            "2026-01-05",
            "--search",
            "dior",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: \"dior\""))
        .stdout(predicate::str::contains("Dior 心斎橋"))
        .stdout(predicate::str::contains("2026-01-10"));
}

#[test]
fn test_cli_toggle_item_persists_across_invocations() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tabi_cmd()
        .args(["--database-file", db_arg, "schedule", "toggle", "d1-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked '起飛' as done"));

    tabi_cmd()
        .args(["--database-file", db_arg, "schedule", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 09:20 · 起飛 (d1-1)"));

    // Toggling again reopens the item.
    tabi_cmd()
        .args(["--database-file", db_arg, "schedule", "toggle", "d1-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened '起飛'"));
}

#[test]
fn test_cli_toggle_unknown_item_reports_gracefully() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "toggle",
            "no-such-item",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No schedule item"));
}

#[test]
fn test_cli_toggle_checklist_entry() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tabi_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "toggle",
            "d1-3",
            "--check",
            "d1-3-c1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked off"))
        .stdout(predicate::str::contains("Dior 心斎橋"));

    tabi_cmd()
        .args(["--database-file", db_arg, "schedule", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] 日本限定色｜女用卡夾/短夾 X1"))
        .stdout(predicate::str::contains("- [ ] 女用雙面皮帶"));
}

#[test]
fn test_cli_booking_list_filters_by_kind() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "booking",
            "list",
            "--kind",
            "flight",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("JX822"))
        .stdout(predicate::str::contains("JX823"))
        .stdout(predicate::str::contains("TPE → KIX"))
        .stdout(predicate::str::contains("1677120264").not());
}

#[test]
fn test_cli_booking_search_by_reference() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "booking",
            "list",
            "--search",
            "JX822",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("JX822"))
        .stdout(predicate::str::contains("JX823").not())
        .stdout(predicate::str::contains("MK-8829").not());
}

#[test]
fn test_cli_trip_show_overview() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("日本大阪7天6夜"))
        .stdout(predicate::str::contains("Bookings: 4"))
        .stdout(predicate::str::contains("2026-01-04 – 2026-01-10"));
}

#[test]
fn test_cli_trip_rename_persists() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tabi_cmd()
        .args(["--database-file", db_arg, "trip", "rename", "東京五日遊"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip renamed to '東京五日遊'"));

    tabi_cmd()
        .args(["--database-file", db_arg, "trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("東京五日遊"));
}

#[test]
fn test_cli_guide_returns_static_payload() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tabi_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "guide",
            "d3-4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guide — 難波八阪神社"))
        .stdout(predicate::str::contains("Matcha Soft Serve"));
}
