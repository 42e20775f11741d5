// TCP listener setup, including the "*" wildcard host that binds all
// interfaces via an IPv6 dual-stack socket where the platform supports it.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;

pub async fn create_listener(
    host: &str,
    port: u16,
) -> std::io::Result<(String, tokio::net::TcpListener)> {
    if host == "*" {
        return create_wildcard_listener(port);
    }

    let addr = format!("{}:{}", host, port);
    tracing::info!("Attempting to bind server to {}...", addr);

    let tokio_listener = tokio::net::TcpListener::bind(&addr).await?;

    Ok((addr, tokio_listener))
}

fn create_wildcard_listener(port: u16) -> std::io::Result<(String, tokio::net::TcpListener)> {
    // Try IPv6 first: with dual-stack enabled one socket covers both
    // families. Systems without IPv6 fall through to plain IPv4.
    match bind_wildcard(Domain::IPV6, format!("[::]:{}", port)) {
        Ok(bound) => Ok(bound),
        Err(e) => {
            tracing::warn!(
                "Failed to bind IPv6 listener ({}). Attempting IPv4 only.",
                e
            );
            bind_wildcard(Domain::IPV4, format!("0.0.0.0:{}", port))
        }
    }
}

fn bind_wildcard(
    domain: Domain,
    str_addr: String,
) -> std::io::Result<(String, tokio::net::TcpListener)> {
    let addr: SocketAddr = str_addr.parse().unwrap();

    tracing::info!("Attempting to bind server to {}...", str_addr);

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    if addr.is_ipv6() {
        // Might fail on some systems; an IPv6-only socket still works there
        if let Err(e) = socket.set_only_v6(false) {
            tracing::warn!(
                "Failed to set dual-stack mode for IPv6 socket: {}. Continuing anyway.",
                e
            );
        }
    }

    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;

    // Make it non-blocking for tokio
    socket.set_nonblocking(true)?;

    let std_listener: std::net::TcpListener = socket.into();
    let tokio_listener = tokio::net::TcpListener::from_std(std_listener)?;

    Ok((str_addr, tokio_listener))
}
