use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn texlip_bin() -> &'static str {
    env!("CARGO_BIN_EXE_texlip")
}

const DOC: &str = "\\documentclass{article}\n\
%texlip: +python\n\
%texlip: +c\n\
%texlip: #c#/* COMMENT */\n\
\\begin{document}\n\
\\begin[hello.py]{python}\n\
print('hello')\n\
\\end{python}\n\
Prose that is dropped.\n\
\\begin[main.c]{c}\n\
int main(void) { return 0; }\n\
\\end{c}\n\
\\begin[hello.py]{python}\n\
print('again')\n\
\\end{python}\n\
\\end{document}\n";

fn write_doc(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("doc.tex");
    fs::write(&path, content).expect("write input");
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(texlip_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to execute texlip")
}

#[test]
fn cli_without_input_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INPUT"), "stderr should mention INPUT: {stderr}");
}

#[test]
fn cli_unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(&dir, DOC);
    let output = run(dir.path(), &["--bogus", input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--bogus"), "stderr should name the flag: {stderr}");
    assert!(!dir.path().join("hello.py").exists());
}

#[test]
fn cli_verbose_narrates_progress() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(&dir, DOC);
    let output = run(dir.path(), &["-v", "-q", "-d", "gen", input.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running texlip"), "stderr: {stderr}");
    assert!(stderr.contains("Added language \"python\""), "stderr: {stderr}");
}

#[test]
fn cli_copies_latin1_blocks_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.tex");
    fs::write(
        &input,
        b"%texlip: +c\n\\begin[a.c]{c}\n/* caf\xE9 */\n\\end{c}\n",
    )
    .unwrap();
    let output = run(dir.path(), &["-q", input.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read(dir.path().join("a.c")).unwrap(), b"/* caf\xE9 */\n\n");
}

#[test]
fn cli_version_skips_processing() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["-V"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with(&format!("texlip, version {}.", env!("CARGO_PKG_VERSION"))),
        "unexpected version output: {stdout}"
    );
    assert!(stdout.contains("By "), "missing author line: {stdout}");
}

#[test]
fn cli_extracts_blocks_and_prints_statistics() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(&dir, DOC);
    let output = run(dir.path(), &["-d", "gen", input.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("gen/hello.py")).unwrap(),
        "print('hello')\n\nprint('again')\n\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("gen/main.c")).unwrap(),
        "int main(void) { return 0; }\n\n"
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1 file and 4 lines in python.\n\
         1 file and 2 lines in c.\n\
         2 files and 6 lines in total.\n"
    );
}

#[test]
fn cli_quiet_suppresses_statistics() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(&dir, DOC);
    let output = run(dir.path(), &["-q", "-d", "gen", input.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
    assert!(dir.path().join("gen/main.c").exists());
}

#[test]
fn cli_json_statistics() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(&dir, DOC);
    let output = run(dir.path(), &["--json", "-d", "gen", input.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"total_files\": 2"), "stdout: {stdout}");
    assert!(stdout.contains("\"total_lines\": 6"), "stdout: {stdout}");
}

#[test]
fn cli_tag_and_lang_hier() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, DOC);
    let output = run(dir.path(), &["-t", "-l", "-q", "-d", "gen", "doc.tex"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("gen/c/main.c")).unwrap(),
        "/* texlip: doc.tex -> main.c */\nint main(void) { return 0; }\n\n"
    );
    let python = fs::read_to_string(dir.path().join("gen/python/hello.py")).unwrap();
    assert!(python.starts_with("# texlip: doc.tex -> hello.py\n"));
}

#[test]
fn cli_timetag_appends_last_line() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, DOC);
    let output = run(dir.path(), &["-T", "-q", "-d", "gen", "doc.tex"]);

    assert!(output.status.success());
    let content = fs::read_to_string(dir.path().join("gen/main.c")).unwrap();
    let last = content.lines().last().unwrap();
    assert!(last.starts_with("/* texlip: ["), "last line: {last}");
    assert!(last.ends_with(" */"), "last line: {last}");
}

#[test]
fn cli_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["missing.tex"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
}

#[test]
fn cli_unknown_language_format_fails() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, "%texlip: #rust#// COMMENT\n");
    let output = run(dir.path(), &["doc.tex"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown language"), "stderr: {stderr}");
    assert!(stderr.contains("doc.tex:1"), "stderr: {stderr}");
}

#[test]
fn cli_reads_config_file() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, "\\begin[a.sh]{sh}\necho hi\n\\end{sh}\n");
    fs::write(
        dir.path().join("texlip.toml"),
        "basedir = \"scripts\"\ntag = true\n\n[[languages]]\nname = \"sh\"\n",
    )
    .unwrap();
    let output = run(dir.path(), &["-q", "doc.tex"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("scripts/a.sh")).unwrap(),
        "# texlip: doc.tex -> a.sh\necho hi\n\n"
    );
}

#[test]
fn cli_explicit_config_and_flag_override() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, "%texlip: +sh\n\\begin[a.sh]{sh}\necho hi\n\\end{sh}\n");
    fs::write(dir.path().join("custom.toml"), "basedir = \"from-config\"\n").unwrap();
    let output = run(
        dir.path(),
        &["-q", "-c", "custom.toml", "-d", "from-flag", "doc.tex"],
    );

    assert!(output.status.success());
    assert!(dir.path().join("from-flag/a.sh").exists());
    assert!(!dir.path().join("from-config").exists());
}
