use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::config::SocketConfig;
use crate::event::Event;

/// An event scoped to a live socket connection.
///
/// Implementors own the connection's duplex stream pair and lend the halves
/// to the caller. A handle stays usable for as long as the event is alive;
/// callers never take ownership of the underlying socket.
pub trait SocketEvent: Event {
    /// Returns the byte-output destination associated with the event's socket.
    fn sock_out(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin);

    /// Returns the byte-input source associated with the event's socket.
    fn sock_in(&mut self) -> &mut (dyn AsyncRead + Send + Unpin);
}

/// A socket event backed by an established TCP connection.
#[derive(Debug)]
pub struct TcpSocketEvent {
    peer_addr: SocketAddr,
    local_addr: SocketAddr,
    incoming: BufReader<OwnedReadHalf>,
    outgoing: OwnedWriteHalf,
}

impl TcpSocketEvent {
    /// Attaches to `stream` with the default [`SocketConfig`].
    pub fn attach(stream: TcpStream) -> io::Result<Self> {
        Self::attach_with_config(stream, SocketConfig::default())
    }

    /// Attaches to `stream`, applying `config` before the stream is split
    /// into its two channels.
    pub fn attach_with_config(stream: TcpStream, config: SocketConfig) -> io::Result<Self> {
        stream.set_nodelay(config.nodelay)?;
        if let Some(ttl) = config.ttl {
            stream.set_ttl(ttl)?;
        }

        let peer_addr = stream.peer_addr()?;
        let local_addr = stream.local_addr()?;
        let (read, write) = stream.into_split();

        tracing::debug!(peer = %peer_addr, "attached socket event");

        Ok(Self {
            peer_addr,
            local_addr,
            incoming: BufReader::with_capacity(config.read_buffer, read),
            outgoing: write,
        })
    }

    /// Returns the address of the remote peer.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Returns the local address of the connection.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Flushes and closes the outbound channel. The peer observes EOF on its
    /// inbound channel. The inbound channel of this event remains readable
    /// until the peer closes its own outbound half.
    pub async fn shutdown(&mut self) -> io::Result<()> {
        self.outgoing.shutdown().await?;
        tracing::debug!(peer = %self.peer_addr, "socket event shut down");
        Ok(())
    }
}

impl Event for TcpSocketEvent {}

impl SocketEvent for TcpSocketEvent {
    fn sock_out(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin) {
        &mut self.outgoing
    }

    fn sock_in(&mut self) -> &mut (dyn AsyncRead + Send + Unpin) {
        &mut self.incoming
    }
}
