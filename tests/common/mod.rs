use assert_cmd::Command;
use std::path::Path;

/// Command for the notekeep binary, run inside `dir` with a clean environment
pub fn notekeep_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notekeep").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}
