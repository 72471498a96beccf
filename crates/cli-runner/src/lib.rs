//! Entrypoint for running commands.

use std::{future::Future, io};

use tokio::runtime::{Handle, Runtime};
use tracing::trace;

/// Executes CLI commands on a fresh multi-threaded runtime.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct CliRunner;

impl CliRunner {
    /// Runs the future returned by `command` to completion, or until `ctrl-c` is received.
    ///
    /// An interrupted command fails with [`io::ErrorKind::Interrupted`]; anything it had
    /// not persisted yet is discarded.
    pub fn run_command_until_exit<F, E>(
        self,
        command: impl FnOnce(CliContext) -> F,
    ) -> Result<(), E>
    where
        F: Future<Output = Result<(), E>>,
        E: Send + Sync + From<io::Error> + 'static,
    {
        let runtime = tokio_runtime()?;
        let context = CliContext {
            handle: runtime.handle().clone(),
        };

        let result = runtime.block_on(run_until_signal(command(context), tokio::signal::ctrl_c()));
        trace!(target: "corvid::cli", "command finished, shutting down runtime");
        result
    }
}

/// Context passed to every command.
#[derive(Clone, Debug)]
pub struct CliContext {
    /// Handle of the runtime the command runs on.
    pub handle: Handle,
}

/// Creates a new default tokio multi-thread runtime with all features enabled.
pub fn tokio_runtime() -> Result<Runtime, io::Error> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build()
}

async fn run_until_signal<F, S, E>(fut: F, signal: S) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
    S: Future<Output = io::Result<()>>,
    E: Send + Sync + From<io::Error> + 'static,
{
    tokio::select! {
        res = signal => {
            res?;
            trace!(target: "corvid::cli", "received ctrl-c");
            Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted by ctrl-c").into())
        },
        res = fut => res,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn runs_command_to_completion() {
        let result: Result<(), io::Error> = CliRunner::default().run_command_until_exit(|ctx| async move {
            let value = ctx.handle.spawn(async { 21 * 2 }).await.map_err(io::Error::other)?;
            assert_eq!(value, 42);
            Ok(())
        });

        assert!(result.is_ok());
    }

    #[test]
    fn propagates_command_error() {
        let result = CliRunner::default().run_command_until_exit(|_| async {
            Err::<(), _>(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert_eq!(result.unwrap_err().to_string(), "boom");
    }

    #[tokio::test]
    async fn signal_fails_with_interrupted() {
        let result: Result<(), io::Error> =
            run_until_signal(std::future::pending(), async { Ok(()) }).await;

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Interrupted);
    }

    #[tokio::test]
    async fn finished_command_wins_over_pending_signal() {
        let result: Result<(), io::Error> =
            run_until_signal(async { Ok(()) }, std::future::pending()).await;

        assert!(result.is_ok());
    }
}
