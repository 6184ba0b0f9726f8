use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::warn;

/// How long the "Copied!" confirmation stays up after a successful copy.
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(1500);

const WHATSAPP_SHARE_PREFIX: &str = "https://wa.me/?text=Track%20your%20mental%20health:%20";
const FACEBOOK_SHARE_PREFIX: &str = "https://www.facebook.com/sharer/sharer.php?u=";

/// Characters left as-is by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Outbound share targets for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub facebook: String,
}

pub fn share_links(page_url: &str) -> ShareLinks {
    let encoded = utf8_percent_encode(page_url, URI_COMPONENT).to_string();
    ShareLinks {
        whatsapp: format!("{WHATSAPP_SHARE_PREFIX}{encoded}"),
        facebook: format!("{FACEBOOK_SHARE_PREFIX}{encoded}"),
    }
}

/// Write-only access to a system clipboard.
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Clipboard of the machine the process runs on.
///
/// X11 and Wayland drop the copied text together with the `arboard::Clipboard`
/// that set it, so a single owner thread keeps one instance alive for the
/// life of the process and serves every write.
pub struct SystemClipboard {
    requests: mpsc::Sender<WriteRequest>,
}

struct WriteRequest {
    text: String,
    reply: mpsc::Sender<Result<(), ClipboardError>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let (requests, receiver) = mpsc::channel();
        thread::spawn(move || own_clipboard(receiver));
        Self { requests }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn own_clipboard(requests: mpsc::Receiver<WriteRequest>) {
    let mut owner: Option<arboard::Clipboard> = None;

    for WriteRequest { text, reply } in requests {
        let result = match owner.as_mut() {
            Some(clipboard) => clipboard.set_text(text),
            None => match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    let result = clipboard.set_text(text);
                    owner = Some(clipboard);
                    result
                }
                Err(err) => Err(err),
            },
        };

        let _ = reply.send(result.map_err(|err| ClipboardError::Unavailable(err.to_string())));
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let stopped = || ClipboardError::Unavailable("clipboard owner thread stopped".to_string());
        let (reply, response) = mpsc::channel();

        self.requests
            .send(WriteRequest {
                text: text.to_string(),
                reply,
            })
            .map_err(|_| stopped())?;
        response.recv().map_err(|_| stopped())?
    }
}

/// Copy-link and share-link actions bound to one page URL.
pub struct ShareAdapter<C> {
    clipboard: Arc<C>,
    page_url: String,
    copied: Arc<AtomicBool>,
}

impl<C> ShareAdapter<C>
where
    C: Clipboard,
{
    pub fn new(clipboard: Arc<C>, page_url: impl Into<String>) -> Self {
        Self {
            clipboard,
            page_url: page_url.into(),
            copied: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn links(&self) -> ShareLinks {
        share_links(&self.page_url)
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::Acquire)
    }

    /// Copies the page URL and raises the copied flag for
    /// [`COPIED_RESET_DELAY`]. Earlier reset timers are not cancelled, so a
    /// quick second copy can be cleared by the first copy's timer.
    ///
    /// The clipboard write runs on the blocking pool. On clipboard failure
    /// the flag stays down and `false` is returned.
    pub async fn copy_link(&self) -> bool {
        let clipboard = Arc::clone(&self.clipboard);
        let page_url = self.page_url.clone();
        let written = tokio::task::spawn_blocking(move || clipboard.write_text(&page_url))
            .await
            .unwrap_or_else(|err| Err(ClipboardError::Unavailable(err.to_string())));

        if let Err(err) = written {
            warn!(error = %err, "failed to copy page link");
            return false;
        }

        self.copied.store(true, Ordering::Release);
        let copied = Arc::clone(&self.copied);
        tokio::spawn(async move {
            tokio::time::sleep(COPIED_RESET_DELAY).await;
            copied.store(false, Ordering::Release);
        });

        true
    }
}
