use anyhow::Result;
use bounded_count::{
    BoundedConsumer, CountEngine, CountingSequence, MemorySink, Pull, RunSettings,
    SequenceProducer, StopReason, TomlConfig, WriterSink,
};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn expected_output(values: u64, with_marker: bool) -> String {
    let mut out: String = (1..=values).map(|n| format!("{}\n", n)).collect();
    if with_marker {
        out.push_str("done!\n");
    }
    out
}

struct BinaryOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

fn run_binary_with_log(args: &[&str], rust_log: &str) -> Result<BinaryOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_bounded-count"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()?;
    Ok(BinaryOutput {
        success: output.status.success(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}

fn run_binary(args: &[&str]) -> Result<(bool, String)> {
    let output = run_binary_with_log(args, "off")?;
    Ok((output.success, output.stdout))
}

#[tokio::test]
async fn test_default_run_writes_eighteen_values_then_marker() -> Result<()> {
    let engine = CountEngine::new(RunSettings::default());
    let mut sink = WriterSink::new(Vec::new());

    let report = engine.run(&mut sink).await?;
    let written = String::from_utf8(sink.into_inner())?;

    assert_eq!(written, expected_output(18, true));
    assert_eq!(report.lines_emitted(), 19);
    assert_eq!(report.stop_reason, StopReason::Exhausted);
    Ok(())
}

#[tokio::test]
async fn test_nineteenth_pull_is_exhausted() {
    let mut sequence = CountingSequence::default();
    let mut pulls = Vec::new();
    for _ in 0..19 {
        pulls.push(sequence.pull().await);
    }

    let values: Vec<u64> = pulls.iter().filter_map(|p| p.into_option()).collect();
    assert_eq!(values, (1..=18).collect::<Vec<_>>());
    assert_eq!(pulls[18], Pull::Exhausted);
}

#[tokio::test]
async fn test_consumer_scenarios() -> Result<()> {
    let cases: [(usize, Vec<String>); 3] = [
        (20, expected_output(18, true).lines().map(String::from).collect()),
        (5, expected_output(5, false).lines().map(String::from).collect()),
        (0, Vec::new()),
    ];

    for (cap, expected) in cases {
        let mut sink = MemorySink::new();
        BoundedConsumer::new(cap)
            .drain(&mut CountingSequence::default(), &mut sink)
            .await?;
        assert_eq!(sink.into_lines(), expected, "cap {}", cap);
    }
    Ok(())
}

#[tokio::test]
async fn test_settings_from_toml_drive_the_engine() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[sequence]\nlimit = 3\n\n[consumer]\ncap = 10\n")?;

    let config = TomlConfig::from_file(file.path())?;
    let engine = CountEngine::new(RunSettings::default().overlay(&config));

    let mut sink = MemorySink::new();
    engine.run(&mut sink).await?;
    assert_eq!(sink.lines(), ["1", "2", "3", "done!"]);
    Ok(())
}

/// Producer over a fixed list, to check the consumer only relies on the pull contract.
struct Words(std::vec::IntoIter<&'static str>);

impl SequenceProducer for Words {
    type Item = &'static str;

    async fn pull(&mut self) -> Pull<&'static str> {
        self.0.next().into()
    }
}

#[tokio::test]
async fn test_consumer_accepts_any_producer() -> Result<()> {
    let mut words = Words(vec!["alpha", "beta"].into_iter());
    let mut sink = MemorySink::new();

    let report = BoundedConsumer::default().drain(&mut words, &mut sink).await?;

    assert_eq!(sink.lines(), ["alpha", "beta", "done!"]);
    assert_eq!(report.pulls, 3);
    Ok(())
}

#[test]
fn test_binary_default_output() -> Result<()> {
    let (ok, stdout) = run_binary(&[])?;
    assert!(ok);
    assert_eq!(stdout, expected_output(18, true));
    Ok(())
}

#[test]
fn test_binary_cap_flags() -> Result<()> {
    let (ok, stdout) = run_binary(&["--cap", "5"])?;
    assert!(ok);
    assert_eq!(stdout, expected_output(5, false));

    let (ok, stdout) = run_binary(&["--cap", "0"])?;
    assert!(ok);
    assert!(stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_rejects_bad_config() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[logging]\nlevel = \"shouting\"\n")?;
    let path = file.path().to_str().unwrap_or_default().to_string();

    let (ok, stdout) = run_binary(&["--config", &path])?;
    assert!(!ok);
    assert!(stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_logs_stay_off_stdout() -> Result<()> {
    let output = run_binary_with_log(&["-v", "--log-json"], "trace")?;

    assert!(output.success);
    assert_eq!(output.stdout, expected_output(18, true));
    assert!(!output.stderr.is_empty());
    assert!(output.stderr.lines().all(|line| line.starts_with('{')));
    Ok(())
}
