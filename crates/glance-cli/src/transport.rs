use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use glance_core::oracle::{OracleError, OracleRequest, OracleTransport};
use tracing::debug;

/// Runs an external program per request.
///
/// The encoded image is written to the program's stdin; the prompt, target
/// language, MIME type and expected response shape are passed as
/// `GLANCE_PROMPT`, `GLANCE_TARGET_LANGUAGE`, `GLANCE_MIME_TYPE` and
/// `GLANCE_RESPONSE_SHAPE`. Whatever it prints on stdout is the raw response.
pub struct CommandTransport {
    program: String,
    args: Vec<String>,
}

impl CommandTransport {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }
}

impl OracleTransport for CommandTransport {
    fn name(&self) -> &str {
        &self.program
    }

    fn complete(&self, request: &OracleRequest<'_>) -> Result<String, OracleError> {
        let transport_err = |e: std::io::Error| {
            OracleError::Transport(format!("{}: {e}", self.program))
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("GLANCE_PROMPT", &request.prompt)
            .env("GLANCE_TARGET_LANGUAGE", request.target_language)
            .env("GLANCE_MIME_TYPE", request.image.mime_type)
            .env("GLANCE_RESPONSE_SHAPE", request.shape.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(transport_err)?;

        // Stdin is fed on its own thread while stdout is drained.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OracleError::Transport("stdin unavailable".to_string()))?;
        let bytes = request.image.bytes.clone();
        let writer = thread::spawn(move || stdin.write_all(&bytes));

        let output = child.wait_with_output().map_err(transport_err)?;
        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(error = %e, "Oracle command closed stdin early"),
            Err(_) => return Err(OracleError::Transport("stdin writer panicked".to_string())),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OracleError::Transport(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        debug!(
            program = %self.program,
            bytes = output.stdout.len(),
            "Oracle command answered"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Replays a saved response for every request.
pub struct FileTransport {
    path: PathBuf,
    name: String,
}

impl FileTransport {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
        }
    }
}

impl OracleTransport for FileTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn complete(&self, _request: &OracleRequest<'_>) -> Result<String, OracleError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| OracleError::Transport(format!("{}: {e}", self.path.display())))
    }
}
