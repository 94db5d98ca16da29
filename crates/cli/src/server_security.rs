use anyhow::{Context as AnyhowContext, Result};
use std::net::SocketAddr;

/// Resolve `bind` and refuse non-loopback addresses unless `public` is set.
pub(crate) async fn resolve_guarded_bind_addrs(
    bind: &str,
    public: bool,
) -> Result<Vec<SocketAddr>> {
    // Tokio's resolver lets "localhost:8000" work as a bind address.
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host(bind)
        .await
        .with_context(|| format!("Failed to resolve bind address: {bind}"))?
        .collect();
    if addrs.is_empty() {
        anyhow::bail!("Bind address resolved to zero socket addrs: {bind}")
    }

    if !public && addrs.iter().any(|addr| !addr.ip().is_loopback()) {
        anyhow::bail!(
            "Refusing to bind to non-loopback address without --public: {bind}. The API has no authentication; pass --public only on a trusted network."
        )
    }
    Ok(addrs)
}
