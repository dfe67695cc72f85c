//! Subprocess-backed responder gateway.
//!
//! Implements [`Responder`] by spawning an external executable per call.
//! Wire contract, stable for existing external responders: stdin receives
//! the conversation as a JSON array of `{role, content}` objects, stdout
//! after exit is the response text. There is no timeout -- the process's
//! exit is the only completion signal -- and no retry or streaming.

use std::process::Stdio;

use colloquy_core::responder::Responder;
use colloquy_types::chat::Message;
use colloquy_types::error::GatewayError;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Responder that delegates generation to an external process.
///
/// Spawns `program args...` once per query. The command is fixed at
/// construction time; per-call state is only the conversation payload.
pub struct SubprocessResponder {
    program: String,
    args: Vec<String>,
}

impl SubprocessResponder {
    /// Create a responder invoking `program` with the given arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The configured command line, for startup logging.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Responder for SubprocessResponder {
    fn name(&self) -> &str {
        "subprocess"
    }

    async fn generate(&self, conversation: &[Message]) -> Result<String, GatewayError> {
        let payload = serde_json::to_vec(conversation)
            .map_err(|e| GatewayError::Encode(e.to_string()))?;

        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| GatewayError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            program = %self.program,
            payload_bytes = payload.len(),
            "waiting for responder process"
        );

        // Feed stdin concurrently with output collection. A sequential
        // write-then-wait deadlocks once both the payload and the child's
        // stdout exceed the pipe buffer: the parent blocks in write_all
        // while the child blocks writing output nobody is draining.
        // Dropping the handle after the write closes the pipe and signals EOF.
        let stdin = child.stdin.take();
        let feed = async {
            match stdin {
                Some(mut stdin) => stdin.write_all(&payload).await,
                None => Ok(()),
            }
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| GatewayError::Io(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GatewayError::ExitStatus {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        fed.map_err(|e| GatewayError::Io(e.to_string()))?;

        // Captured stdout is the response, in full, with no trimming.
        String::from_utf8(output.stdout).map_err(|_| GatewayError::InvalidUtf8)
    }
}
