//! Background work using std::thread and mpsc channels
//!
//! Directory listings and wallpaper requests run on detached threads so the
//! UI never blocks. Each thread sends exactly one [`Message`] back; the event
//! loop drains them with [`Worker::try_recv`].

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::handler::Message;
use crate::integrate::{Compositor, WallpaperSetter};
use crate::listing::load_entries;

/// Runs listings and wallpaper requests off the UI thread
pub struct Worker<C> {
    /// Cloned into every job
    tx: Sender<Message>,
    /// Completed jobs
    rx: Receiver<Message>,
    /// Shared by all wallpaper jobs
    setter: Arc<WallpaperSetter<C>>,
}

impl<C> Worker<C>
where
    C: Compositor + Send + Sync + 'static,
{
    pub fn new(setter: WallpaperSetter<C>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            setter: Arc::new(setter),
        }
    }

    /// List `path` in the background
    pub fn load_entries(&self, path: PathBuf, generation: u64) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let entries = load_entries(&path);
            tracing::debug!(path = %path.display(), count = entries.len(), "listing loaded");
            // The loop may already be gone
            let _ = tx.send(Message::EntriesLoaded {
                generation,
                path,
                entries,
            });
        });
    }

    /// Set `path` as wallpaper in the background
    pub fn set_wallpaper(&self, path: PathBuf) {
        let tx = self.tx.clone();
        let setter = Arc::clone(&self.setter);
        thread::spawn(move || {
            let outcome = setter.set(&path);
            let _ = tx.send(Message::WallpaperSet(outcome));
        });
    }

    /// Take a finished job's message, if any
    pub fn try_recv(&self) -> Option<Message> {
        match self.rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for a finished job's message
    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Message> {
        self.rx.recv_timeout(timeout).ok()
    }
}
