//! Serve command handler.

use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::error::BotbookError;
use crate::server::{PageServer, parse_bind_addr};

/// Start the HTTP delivery surface and block until shutdown.
///
/// # Errors
///
/// Returns a server error if the listen address cannot be bound.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), BotbookError> {
    let addr = parse_bind_addr(&args.bind);
    let (server, bound_addr) = PageServer::bind(&addr, cancel).await?;
    tracing::info!(%bound_addr, "serving playbook page");
    server.run_until_shutdown().await;
    Ok(())
}
