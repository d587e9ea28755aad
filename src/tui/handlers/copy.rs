//! Clipboard writes as single-shot background tasks, polled by the event loop.

use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::core::clipboard::{Clipboard, CopyError};

use super::super::app::{App, CopyKey};

/// A clipboard write in flight. Its completion updates the app's copy status slot.
pub struct PendingCopy {
    pub key: CopyKey,
    pub result_rx: mpsc::Receiver<Result<(), CopyError>>,
}

/// Spawn the clipboard write on the runtime's blocking pool.
pub(crate) fn spawn_copy(
    rt: &Runtime,
    clipboard: Arc<dyn Clipboard>,
    text: String,
    key: CopyKey,
) -> PendingCopy {
    let (tx, rx) = mpsc::channel();
    log::debug!("copy requested for {} ({} bytes)", key, text.len());
    rt.spawn_blocking(move || {
        let _ = tx.send(clipboard.write_text(&text));
    });
    PendingCopy {
        key,
        result_rx: rx,
    }
}

/// Apply every finished copy (in completion-poll order) and drop it from the list.
pub(crate) fn poll_copies(pending: &mut Vec<PendingCopy>, app: &mut App, now: Instant) {
    pending.retain(|pc| match pc.result_rx.try_recv() {
        Ok(result) => {
            app.apply_copy_result(pc.key, result, now);
            false
        }
        Err(TryRecvError::Empty) => true,
        Err(TryRecvError::Disconnected) => {
            log::warn!("copy task for {} ended without a result", pc.key);
            false
        }
    });
}
