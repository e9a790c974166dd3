// SPDX-License-Identifier: MIT

use crate::strip::StripPayload;
use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Delivery boundary for accepted strips.
///
/// One call per strip, at most one strip per flight for the life of the
/// process. A sink's failure is the caller's to absorb; the tracker never
/// retries a delivery.
pub trait StripSink {
    fn deliver(&mut self, payload: &StripPayload) -> Result<()>;
}

/// Prints strips straight to stdout. The default when no renderer is wired up.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StripSink for StdoutSink {
    fn deliver(&mut self, payload: &StripPayload) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(payload.text().as_bytes())?;
        Ok(())
    }
}

/// Writes each strip to its own file in a spool directory, for renderers
/// that watch a folder. Filenames carry the callsign and a UTC timestamp so
/// repeated sessions never collide.
#[derive(Debug)]
pub struct SpoolSink {
    dir: PathBuf,
}

impl SpoolSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl StripSink for SpoolSink {
    fn deliver(&mut self, payload: &StripPayload) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create spool dir {}", self.dir.display()))?;

        let name = format!(
            "{}-{}.txt",
            payload.callsign(),
            Utc::now().format("%Y%m%d-%H%M%S%3f")
        );
        let path = self.dir.join(name);
        fs::write(&path, payload.text())
            .with_context(|| format!("failed to write strip {}", path.display()))?;

        debug!("Spooled strip — path={}", path.display());
        Ok(())
    }
}

/// Hands a strip to an external printer process.
///
/// The payload goes into a temp file first (command lines have length limits
/// and the renderer may outlive us reading it), then the configured command
/// is spawned detached as `<command> --file <path>`. We never wait for it;
/// the handoff is fire-and-forget.
#[derive(Debug)]
pub struct ProcessSink {
    command: String,
}

impl ProcessSink {
    pub fn new<S: Into<String>>(command: S) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl StripSink for ProcessSink {
    fn deliver(&mut self, payload: &StripPayload) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("prestrip-")
            .suffix(".txt")
            .tempfile()
            .context("failed to create strip temp file")?;
        file.write_all(payload.text().as_bytes())
            .context("failed to write strip temp file")?;

        // Keep the file on disk; the printer reads it after we return.
        let (_, path) = file
            .keep()
            .context("failed to persist strip temp file")?;

        let child = match Command::new(&self.command)
            .arg("--file")
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                // No printer will ever read the handoff file now.
                let _ = fs::remove_file(&path);
                return Err(e)
                    .with_context(|| format!("failed to launch printer '{}'", self.command));
            }
        };

        debug!(
            "Launched printer — command={} pid={} file={}",
            self.command,
            child.id(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FlightPlanSnapshot;
    use crate::strip::format_strip;
    use tempfile::tempdir;

    fn payload(callsign: &str) -> StripPayload {
        format_strip(&FlightPlanSnapshot {
            callsign: callsign.into(),
            origin: "EGLL".into(),
            destination: "KJFK".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_spool_sink_writes_one_file_per_strip() {
        let dir = tempdir().unwrap();
        let spool = dir.path().join("strips");
        let mut sink = SpoolSink::new(&spool);

        sink.deliver(&payload("BAW123")).unwrap();
        sink.deliver(&payload("UAL45")).unwrap();

        let mut names: Vec<String> = fs::read_dir(&spool)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names.len(), 2);
        assert!(names.iter().any(|n| n.starts_with("BAW123-")));
        assert!(names.iter().any(|n| n.starts_with("UAL45-")));

        for entry in fs::read_dir(&spool).unwrap() {
            let content = fs::read_to_string(entry.unwrap().path()).unwrap();
            assert!(content.starts_with("================ FLIGHT STRIP ================\n"));
            assert!(content.ends_with("==============================================\n"));
        }
    }

    #[test]
    fn test_process_sink_temp_file_lifecycle() {
        // Redirect the temp dir so the handoff files land somewhere we can
        // inspect. Single test owns this variable; keep it that way.
        let dir = tempdir().unwrap();
        std::env::set_var("TMPDIR", dir.path());

        let handoff_files = || -> Vec<std::path::PathBuf> {
            fs::read_dir(dir.path())
                .unwrap()
                .map(|e| e.unwrap().path())
                .filter(|p| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().starts_with("prestrip-"))
                        .unwrap_or(false)
                })
                .collect()
        };

        // Successful launch: the payload is persisted and stays on disk for
        // the printer to read after we return.
        let expected = payload("BAW123");
        let mut sink = ProcessSink::new("true");
        sink.deliver(&expected).unwrap();

        let files = handoff_files();
        assert_eq!(files.len(), 1);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), expected.text());

        // Failed launch: the error surfaces and the orphaned handoff file is
        // removed, leaving only the one from the successful delivery.
        let mut broken = ProcessSink::new("/nonexistent/strip-printer-binary");
        let err = broken.deliver(&payload("UAL45")).unwrap_err();
        assert!(err.to_string().contains("failed to launch printer"));
        assert_eq!(handoff_files().len(), 1);

        // Restore global state: `dir` is deleted on drop, so a stale TMPDIR
        // would break any later tempdir() call in this process.
        std::env::remove_var("TMPDIR");
    }
}
