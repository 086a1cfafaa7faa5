//! Awaiting a background computation and its continuation.

use futures::FutureExt;

use crate::error::UnitResult;
use crate::unit::UnitContext;

/// 50. Supplies a value asynchronously, attaches a continuation that prints
/// it, then blocks until both have run.
///
/// A failed background task is reported on the error stream and the
/// demonstration still completes.
pub fn lambda_with_completable_future(context: &UnitContext<'_>) -> UnitResult {
    let delay = context.config().async_delay;
    let output = context.output().clone();

    let future = async move {
        tokio::time::sleep(delay).await;
        "Async Lambda Result"
    }
    .inspect(move |result| output.headline(result));

    if let Err(error) = context.tasks().awaited(future) {
        tracing::warn!(%error, "async operation failed");
        context
            .output()
            .error_line(format_args!("Error in async operation: {error}"));
    }
    Ok(())
}
