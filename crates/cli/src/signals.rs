//! Termination signal handling.
//!
//! The line editor owns the terminal in REPL mode and reports Ctrl-C itself,
//! so the watcher thread is only installed when commands come from a pipe.

use std::io;
use std::thread;

use tokio::runtime::Builder;
use tracing::debug;

/// A signal that ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl Termination {
    /// Conventional description of the signal.
    pub fn description(self) -> &'static str {
        match self {
            Termination::Interrupt => "interrupt",
            Termination::Terminate => "terminated",
        }
    }
}

/// Line printed when a termination signal ends the session.
pub fn termination_message(signal: Termination) -> String {
    format!("termination signal received: {}", signal.description())
}

/// Install SIGINT and SIGTERM handlers and call `on_signal` from a
/// background thread when the first one arrives.
///
/// Handlers are registered before this returns.
pub fn spawn_watcher<F>(on_signal: F) -> io::Result<()>
where
    F: FnOnce(Termination) + Send + 'static,
{
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let listener = {
        let _guard = runtime.enter();
        Listener::register()?
    };

    thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(move || {
            let signal = runtime.block_on(listener.recv());
            debug!(signal = signal.description(), "termination signal received");
            on_signal(signal);
        })?;
    Ok(())
}

#[cfg(unix)]
struct Listener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Listener {
    fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(mut self) -> Termination {
        tokio::select! {
            _ = self.interrupt.recv() => Termination::Interrupt,
            _ = self.terminate.recv() => Termination::Terminate,
        }
    }
}

#[cfg(not(unix))]
struct Listener;

#[cfg(not(unix))]
impl Listener {
    fn register() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(self) -> Termination {
        match tokio::signal::ctrl_c().await {
            Ok(()) => Termination::Interrupt,
            Err(e) => {
                debug!(error = %e, "Ctrl-C handler unavailable");
                std::future::pending().await
            }
        }
    }
}
