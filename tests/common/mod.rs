use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const HEADER_REL: &str = "src/Pinball.h";
pub const COUNTER_REL: &str = "build_counter.txt";

/// A header body shaped like the real one: the three version defines
/// surrounded by unrelated content that must survive byte-for-byte. The
/// minor line carries trailing spaces on purpose.
pub fn header_body(major: u64, minor: u64, build: u64) -> String {
    format!(
        "// Version Information\n\
         #define PB_VERSION_MAJOR {major}\n\
         #define PB_VERSION_MINOR {minor}  \n\
         #define PB_VERSION_BUILD {build}\n\
         \n\
         #define PB_SCREENWIDTH 1920\n\
         #define PB_SCREENHEIGHT 1080\n"
    )
}

/// Create a temp project root containing `src/Pinball.h` with the given
/// version fields and no counter file.
pub fn project_fixture(major: u64, minor: u64, build: u64) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_header(tmp.path(), &header_body(major, minor, build));
    tmp
}

/// Write arbitrary header content under the project root.
pub fn write_header(root: &Path, content: &str) {
    let path = root.join(HEADER_REL);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Seed the counter file under the project root.
pub fn seed_counter(root: &Path, content: &str) {
    fs::write(root.join(COUNTER_REL), content).unwrap();
}

pub fn read_header(root: &Path) -> String {
    fs::read_to_string(root.join(HEADER_REL)).unwrap()
}

pub fn read_counter_file(root: &Path) -> String {
    fs::read_to_string(root.join(COUNTER_REL)).unwrap()
}

/// A pbstamp invocation pointed at the given project root.
pub fn stamp_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pbstamp").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}
