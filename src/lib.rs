//! Socket-scoped events.
//!
//! An [`event::Event`] marks an occurrence inside an event-driven service. A
//! [`socket::SocketEvent`] is an event tied to a live network connection: it
//! lends out the connection's outbound byte sink and inbound byte source so
//! that handler code can speak to the peer without owning the socket.
//!
//! [`socket::TcpSocketEvent`] attaches to an established TCP stream.
//! [`testutils`] provides an in-memory implementor for exercising handler
//! code without the network.

pub mod config;
pub mod event;
pub mod socket;
pub mod testutils;
