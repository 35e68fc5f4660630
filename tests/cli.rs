use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn phrase_speaker<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_phrase-speaker"))
        .args(args)
        .env("PHRASE_SPEAKER_ENGINE", "true")
        .env_remove("PHRASE_SPEAKER_RATE")
        .env_remove("RUST_LOG")
        .output()
        .expect("run phrase-speaker")
}

fn write_script(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("script.txt");
    std::fs::write(&path, contents).expect("write script");
    path
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_script_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");

    let output = phrase_speaker([missing.to_str().unwrap(), "1"]);
    assert_eq!(Some(1), output.status.code());
    let stderr = stderr(&output);
    assert!(stderr.contains("Error -2"), "stderr: {stderr}");
    assert!(stderr.contains(missing.to_str().unwrap()), "stderr: {stderr}");
}

#[test]
fn index_out_of_range_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_script(dir.path(), "Hello.\n\nWorld.");

    let output = phrase_speaker([script.to_str().unwrap(), "5"]);
    assert_eq!(Some(1), output.status.code());
    let stderr = stderr(&output);
    assert!(stderr.contains("Error -3"), "stderr: {stderr}");
    assert!(stderr.contains("phrase 5 is out of range"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn default_mode_requires_an_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_script(dir.path(), "Hello.");

    let output = phrase_speaker([script.to_str().unwrap()]);
    assert_eq!(Some(1), output.status.code());
    assert!(stderr(&output).contains("Error -1"));
}

#[test]
fn malformed_command_line_is_invalid_arguments() {
    let output = phrase_speaker(Vec::<&str>::new());
    assert_eq!(Some(1), output.status.code());
    assert!(stderr(&output).contains("Error -1"));

    let output = phrase_speaker(["script.txt", "two"]);
    assert_eq!(Some(1), output.status.code());
    assert!(stderr(&output).contains("Error -1"));
}

#[test]
fn empty_script_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_script(dir.path(), "\n\n  \n\n");

    let output = phrase_speaker([script.to_str().unwrap(), "1"]);
    assert_eq!(Some(1), output.status.code());
    assert!(stderr(&output).contains("Error -4"));
}

#[test]
fn help_succeeds() {
    let output = phrase_speaker(["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--interactive"));
}

#[cfg(unix)]
mod unix {
    use super::{phrase_speaker, stderr, write_script};

    #[test]
    fn default_mode_speaks_the_chosen_phrase() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(dir.path(), "Hello.\n\nWorld.");

        let output = phrase_speaker([script.to_str().unwrap(), "2", "--engine", "echo"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!("Playing 2/2\n-r 175 -i -- World.\n", stdout);
    }

    #[test]
    fn voice_and_rate_reach_the_engine() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(dir.path(), "Hello.\n\nWorld.");

        let output = phrase_speaker([
            script.to_str().unwrap(),
            "1",
            "-v",
            "Fiona",
            "--rate",
            "220",
            "--engine",
            "echo",
        ]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.ends_with("-v Fiona -r 220 -i -- Hello.\n"), "stdout: {stdout}");
    }

    #[test]
    fn failing_engine_is_a_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(dir.path(), "Hello.");

        let output = phrase_speaker([script.to_str().unwrap(), "1", "--engine", "false"]);
        assert!(output.status.success());
        let stderr = stderr(&output);
        assert!(stderr.contains("exited with failure status"), "stderr: {stderr}");
    }

    #[test]
    fn missing_engine_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(dir.path(), "Hello.");

        let output = phrase_speaker([
            script.to_str().unwrap(),
            "1",
            "--engine",
            "/nonexistent/phrase-speaker-engine",
        ]);
        assert_eq!(Some(1), output.status.code());
        assert!(stderr(&output).contains("Error -6"));
    }
}
