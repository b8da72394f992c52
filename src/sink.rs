//! Output destinations.
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A destination for formatted log lines.
///
/// Writes take `&self`: a sink shared between threads is responsible for its
/// own locking, the logger adds none.
pub trait Sink: Send + Sync {
    /// Writes one complete line, newline included.
    fn write(&self, line: &[u8]) -> io::Result<()>;

    /// Whether this sink is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// The channel on which this sink reports errors outside of `write`.
    fn error_channel(&self) -> Option<&ErrorChannel> {
        None
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        (**self).write(line)
    }
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
    fn error_channel(&self) -> Option<&ErrorChannel> {
        (**self).error_channel()
    }
}

/// The standard output of the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;
impl Sink for Stdout {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(line)?;
        out.flush()
    }
    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }
}

/// The standard error of the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;
impl Sink for Stderr {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        err.write_all(line)?;
        err.flush()
    }
    fn is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }
}

type Observer = Arc<dyn Fn(&io::Error) + Send + Sync>;

/// Identifies an observer registered on an `ErrorChannel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct Registration {
    id: ObserverId,
    once: bool,
    observer: Observer,
}

#[derive(Default)]
struct Observers {
    registrations: Vec<Registration>,
    // Writes in progress through a logger which absorbs the errors they raise.
    absorbing: usize,
}

/// Where a sink reports write errors, possibly long after the write returned.
///
/// Emitting an error nobody observes is an unhandled sink error: `emit`
/// panics in that case, unless a logger is writing to the sink at that moment.
#[derive(Default)]
pub struct ErrorChannel {
    observers: Mutex<Observers>,
    next_id: AtomicU64,
}
impl ErrorChannel {
    /// Makes a new channel without observers.
    pub fn new() -> Self {
        ErrorChannel::default()
    }

    /// Registers an observer for every future error.
    pub fn on<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        self.register(false, Arc::new(observer))
    }

    /// Registers an observer that is removed after the first error it sees.
    pub fn once<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        self.register(true, Arc::new(observer))
    }

    /// Removes an observer. Returns `false` if it was already gone.
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut observers = self.lock();
        let before = observers.registrations.len();
        observers.registrations.retain(|r| r.id != id);
        observers.registrations.len() != before
    }

    /// The number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.lock().registrations.len()
    }

    /// Reports `error` to every observer.
    ///
    /// Without observers, the error is dropped while at least one
    /// `AbsorbGuard` is alive.
    ///
    /// # Panics
    ///
    /// Panics if the channel has no observer and no live `AbsorbGuard`.
    pub fn emit(&self, error: io::Error) {
        let targets: Vec<Observer> = {
            let mut observers = self.lock();
            let targets: Vec<Observer> = observers
                .registrations
                .iter()
                .map(|r| Arc::clone(&r.observer))
                .collect();
            if targets.is_empty() && observers.absorbing > 0 {
                return;
            }
            observers.registrations.retain(|r| !r.once);
            targets
        };
        if targets.is_empty() {
            panic!("unhandled sink error: {}", error);
        }
        for observer in targets {
            observer(&error);
        }
    }

    /// Absorbs errors nobody observes until the returned guard is dropped.
    ///
    /// Guards nest and may be held by several threads at once; the channel
    /// absorbs until the last of them is dropped.
    pub fn absorb(&self) -> AbsorbGuard<'_> {
        self.lock().absorbing += 1;
        AbsorbGuard { channel: self }
    }

    fn register(&self, once: bool, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()
            .registrations
            .push(Registration { id, once, observer });
        id
    }

    fn lock(&self) -> MutexGuard<Observers> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
impl fmt::Debug for ErrorChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let observers = self.lock();
        f.debug_struct("ErrorChannel")
            .field("observers", &observers.registrations.len())
            .field("absorbing", &observers.absorbing)
            .finish()
    }
}

/// Keeps an `ErrorChannel` absorbing unobserved errors while alive.
#[derive(Debug)]
pub struct AbsorbGuard<'a> {
    channel: &'a ErrorChannel,
}
impl<'a> Drop for AbsorbGuard<'a> {
    fn drop(&mut self) {
        self.channel.lock().absorbing -= 1;
    }
}

/// A sink that keeps everything written to it in memory.
///
/// # Examples
///
/// ```
/// use prio_logger::{Build, Leveled, LoggerOptions};
/// use prio_logger::sink::MemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LoggerOptions::new()
///     .facility("mail")
///     .sink(sink.clone())
///     .build()
///     .unwrap();
/// logger.error(format_args!("disk {} is full", "sda"));
/// assert_eq!(sink.contents(), "<19>disk sda is full\n");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
    terminal: bool,
    failure: Mutex<Option<io::ErrorKind>>,
    errors: ErrorChannel,
}
impl MemorySink {
    /// Makes a new sink which behaves like a pipe.
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Makes a new sink which behaves like an interactive terminal.
    pub fn terminal() -> Self {
        MemorySink {
            terminal: true,
            ..MemorySink::default()
        }
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Makes subsequent writes fail with `kind`, or succeed again with `None`.
    ///
    /// A failing write reports the error on the error channel, then returns
    /// it.
    pub fn fail_writes(&self, kind: Option<io::ErrorKind>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = kind;
    }

    /// The error channel of this sink.
    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }
}
impl Sink for MemorySink {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        let failure = *self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(kind) = failure {
            self.errors.emit(io::Error::new(kind, "write failed"));
            return Err(io::Error::new(kind, "write failed"));
        }
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(line);
        Ok(())
    }
    fn is_terminal(&self) -> bool {
        self.terminal
    }
    fn error_channel(&self) -> Option<&ErrorChannel> {
        Some(&self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn once_observers_fire_a_single_time() {
        let channel = ErrorChannel::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        channel.once(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        channel.on(|_| {});

        channel.emit(io::Error::new(io::ErrorKind::Other, "first"));
        channel.emit(io::Error::new(io::ErrorKind::Other, "second"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(channel.observer_count(), 1);
    }

    #[test]
    fn remove_detaches_only_the_given_observer() {
        let channel = ErrorChannel::new();
        let a = channel.on(|_| {});
        let b = channel.on(|_| {});
        assert!(channel.remove(a));
        assert!(!channel.remove(a));
        assert_eq!(channel.observer_count(), 1);
        assert!(channel.remove(b));
        assert_eq!(channel.observer_count(), 0);
    }

    #[test]
    #[should_panic(expected = "unhandled sink error")]
    fn emitting_without_observers_panics() {
        ErrorChannel::new().emit(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
    }

    #[test]
    fn absorbs_unobserved_errors_until_the_last_guard_drops() {
        let channel = ErrorChannel::new();
        let outer = channel.absorb();
        let inner = channel.absorb();
        channel.emit(io::Error::new(io::ErrorKind::Other, "first"));
        drop(outer);
        channel.emit(io::Error::new(io::ErrorKind::Other, "second"));
        drop(inner);
        assert_eq!(channel.observer_count(), 0);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            channel.emit(io::Error::new(io::ErrorKind::Other, "third"));
        }));
        assert!(result.is_err());
    }

    #[test]
    fn memory_sink_reports_failures_on_its_channel() {
        let sink = MemorySink::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        sink.errors().on(move |e| s.lock().unwrap().push(e.kind()));

        sink.fail_writes(Some(io::ErrorKind::BrokenPipe));
        assert!(sink.write(b"lost\n").is_err());
        sink.fail_writes(None);
        assert!(sink.write(b"kept\n").is_ok());

        assert_eq!(sink.contents(), "kept\n");
        assert_eq!(*seen.lock().unwrap(), vec![io::ErrorKind::BrokenPipe]);
    }
}
