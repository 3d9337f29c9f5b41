// SSE subscriber - persistent server-push streams with reconnect backoff
use std::time::Duration;

use bytes::BytesMut;
use futures::StreamExt;
use tokio::sync::mpsc;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(60);
const CHANNEL_CAPACITY: usize = 100;
const MAX_LINE_BYTES: usize = 64 * 1024;

/// A held subscription to one push stream. Dropping it ends the underlying
/// connection task at its next delivery attempt.
pub struct Subscription {
    rx: mpsc::Receiver<String>,
}

impl Subscription {
    pub(crate) fn new(rx: mpsc::Receiver<String>) -> Self {
        Self { rx }
    }

    /// The next event payload, or `None` once the feed has shut down.
    pub async fn next_event(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

#[derive(Debug, Clone)]
pub struct SseSubscriber {
    base_url: String,
    client: reqwest::Client,
}

impl SseSubscriber {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Opens a push subscription to `/{path}`.
    ///
    /// The connection is re-established with exponential backoff (1s
    /// doubling to a 60s cap, reset after a successful connect) after any
    /// drop or connect failure, for as long as the subscription is held.
    pub fn subscribe(&self, path: &str) -> Subscription {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let client = self.client.clone();

        tokio::spawn(async move {
            let mut backoff = INITIAL_BACKOFF;
            loop {
                match Self::run_connection(&client, &url, &tx, &mut backoff).await {
                    Ok(()) => tracing::debug!("push stream {url} ended, reconnecting"),
                    Err(e) => {
                        tracing::warn!("push stream {url} failed: {e}, retrying in {backoff:?}");
                    }
                }

                if tx.is_closed() {
                    return;
                }
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(MAX_BACKOFF);
            }
        });

        Subscription::new(rx)
    }

    async fn run_connection(
        client: &reqwest::Client,
        url: &str,
        tx: &mpsc::Sender<String>,
        backoff: &mut Duration,
    ) -> anyhow::Result<()> {
        let response = client
            .get(url)
            .header("Accept", "text/event-stream")
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("status {}", response.status());
        }

        // Connected; the next failure starts the backoff ladder from the bottom.
        *backoff = INITIAL_BACKOFF;

        let mut body = response.bytes_stream();
        let mut parser = FrameParser::default();

        while let Some(chunk) = body.next().await {
            for event in parser.push(&chunk?) {
                if tx.send(event).await.is_err() {
                    // Subscription dropped; nothing left to deliver to.
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}

/// Incremental SSE frame parser.
///
/// Events are one or more `data:` lines terminated by a blank line;
/// multiple `data:` lines in one event are joined with newlines. Comment
/// lines and non-`data` fields (`event:`, `id:`, `retry:`) are ignored.
/// Chunk boundaries may fall anywhere, including inside a line.
///
/// A partial line is buffered only up to `MAX_LINE_BYTES`; past that the
/// line and any event it belonged to are discarded, so a backend that
/// stops sending newlines cannot grow the buffer without bound.
#[derive(Debug, Default)]
pub struct FrameParser {
    buffer: BytesMut,
    data_lines: Vec<String>,
    skip_current_line: bool,
}

impl FrameParser {
    /// Feeds one chunk, returning every event it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();

        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw = self.buffer.split_to(newline + 1);
            if self.skip_current_line {
                // Tail of a line that was discarded for exceeding the cap.
                self.skip_current_line = false;
                continue;
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            if line.is_empty() {
                if !self.data_lines.is_empty() {
                    events.push(self.data_lines.join("\n"));
                    self.data_lines.clear();
                }
            } else if let Some(data) = line.strip_prefix("data:") {
                self.data_lines.push(data.strip_prefix(' ').unwrap_or(data).to_string());
            }
        }

        if self.buffer.len() > MAX_LINE_BYTES {
            tracing::warn!(
                "dropping oversized push stream line ({} buffered bytes)",
                self.buffer.len()
            );
            self.buffer.clear();
            self.data_lines.clear();
            self.skip_current_line = true;
        }

        events
    }
}
