//! Handle einer laufenden Überwachung auf einem Hintergrund-Thread.

use crate::core::TrackingError;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Besitzt den Überwachungs-Thread. Abbruch per [`WatchHandle::cancel`] oder Drop.
#[derive(Debug)]
pub struct WatchHandle {
    name: String,
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Startet einen Thread, der `tick` alle `interval` aufruft, bis `tick`
    /// `false` liefert oder das Handle abgebrochen wird.
    pub fn spawn<F>(name: &str, interval: Duration, mut tick: F) -> Result<Self, TrackingError>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let thread = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !tick() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .map_err(|e| {
                TrackingError::Unavailable(format!("Thread '{}' nicht gestartet: {}", name, e))
            })?;

        log::debug!("Überwachung '{}' gestartet", name);
        Ok(Self {
            name: name.to_string(),
            stop: Some(stop_tx),
            thread: Some(thread),
        })
    }

    /// Name der Überwachung.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gibt `true` zurück, wenn der Thread bereits beendet ist.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Beendet die Überwachung und wartet auf den Thread.
    pub fn cancel(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.try_send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Überwachung '{}' ist abgestürzt", self.name);
            } else {
                log::debug!("Überwachung '{}' beendet", self.name);
            }
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_watch_ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let handle = WatchHandle::spawn("test-watch", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .expect("Thread-Start erwartet");

        thread::sleep(Duration::from_millis(60));
        handle.cancel();
        let after_cancel = count.load(Ordering::SeqCst);
        assert!(after_cancel > 0);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn test_watch_stops_when_tick_returns_false() {
        let handle = WatchHandle::spawn("test-once", Duration::from_millis(1), || false)
            .expect("Thread-Start erwartet");
        thread::sleep(Duration::from_millis(50));
        assert!(handle.is_finished());
    }
}
