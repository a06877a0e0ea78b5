// Terminal justification prompt: one line per answer, `:cancel` or end of
// input backs out of the punch.

use crate::modules::attendance_flow::ports::justification_prompt::{
    JustificationPrompt, JustificationReply, JustificationRequest,
};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stderr, Stdin,
};
use tokio::sync::Mutex;

pub const CANCEL_COMMAND: &str = ":cancel";

pub struct LinePrompt<R, W> {
    io: Mutex<(R, W)>,
}

impl LinePrompt<BufReader<Stdin>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl<R, W> LinePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

fn render(request: &JustificationRequest) -> String {
    let mut message = String::new();
    if request.rejected.is_some() {
        message.push_str("A reason is required to continue.\n");
    }
    message.push_str(&format!(
        "You are {:.0} m from the office, the limit is {:.0} m.\n",
        request.verdict.distance_meters, request.radius_meters
    ));
    message.push_str(&format!(
        "Why are you recording a {} from here? ({CANCEL_COMMAND} to abort)\n> ",
        request.action
    ));
    message
}

#[async_trait]
impl<R, W> JustificationPrompt for LinePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn request(&self, request: &JustificationRequest) -> JustificationReply {
        let mut io = self.io.lock().await;
        let (reader, writer) = &mut *io;

        let message = render(request);
        if let Err(error) = writer.write_all(message.as_bytes()).await {
            tracing::warn!(%error, "could not write the justification prompt");
            return JustificationReply::Cancelled;
        }
        if let Err(error) = writer.flush().await {
            tracing::warn!(%error, "could not flush the justification prompt");
            return JustificationReply::Cancelled;
        }

        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) => JustificationReply::Cancelled,
            Ok(_) if line.trim() == CANCEL_COMMAND => JustificationReply::Cancelled,
            Ok(_) => JustificationReply::Provided(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(error) => {
                tracing::warn!(%error, "could not read the justification");
                JustificationReply::Cancelled
            }
        }
    }
}
