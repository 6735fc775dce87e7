use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const HEADER: &str = "date,entry,compound,positive,negative,neutral,emotion,color\n";

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("MOODJOUR_LOG");
    cmd
}

/// Initialize a journal at `root`
#[allow(dead_code)]
pub fn init_journal(root: &Path) {
    moodjour_cmd().arg("init").arg(root).assert().success();
}

/// Write a journal file with the given data rows below the header
#[allow(dead_code)]
pub fn write_journal(root: &Path, rows: &[&str]) {
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(root.join("journal_entries.csv"), content).unwrap();
}
