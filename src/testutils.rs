use std::fmt;
use std::io;

use tokio::io::{
    duplex, split, AsyncRead, AsyncWrite, AsyncWriteExt, DuplexStream, ReadHalf, WriteHalf,
};

use crate::event::Event;
use crate::socket::SocketEvent;

/// Capacity of the in-memory pipe between linked events.
const DEFAULT_LINK_CAPACITY: usize = 64 * 1024;

/// A socket event backed by one end of an in-memory pipe. Bytes written to
/// its output channel are read from the linked peer's input channel.
pub struct MockSocketEvent {
    /// Peers identified by a letter
    pub label: char,
    incoming: ReadHalf<DuplexStream>,
    outgoing: WriteHalf<DuplexStream>,
}

impl MockSocketEvent {
    /// Closes the outbound channel. The linked peer observes EOF.
    pub async fn shutdown(&mut self) -> io::Result<()> {
        self.outgoing.shutdown().await
    }
}

impl fmt::Debug for MockSocketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSocketEvent")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Event for MockSocketEvent {}

impl SocketEvent for MockSocketEvent {
    fn sock_out(&mut self) -> &mut (dyn AsyncWrite + Send + Unpin) {
        &mut self.outgoing
    }

    fn sock_in(&mut self) -> &mut (dyn AsyncRead + Send + Unpin) {
        &mut self.incoming
    }
}

/// Builds a pair of socket events whose channels are cross-wired.
pub fn build_linked_pair() -> (MockSocketEvent, MockSocketEvent) {
    build_linked_pair_with_capacity(DEFAULT_LINK_CAPACITY)
}

/// Builds a cross-wired pair with an explicit pipe capacity. Writers block
/// once `capacity` unread bytes are in flight toward the peer.
pub fn build_linked_pair_with_capacity(capacity: usize) -> (MockSocketEvent, MockSocketEvent) {
    let (a, b) = duplex(capacity);
    let (a_read, a_write) = split(a);
    let (b_read, b_write) = split(b);

    let a = MockSocketEvent {
        label: 'A',
        incoming: a_read,
        outgoing: a_write,
    };
    let b = MockSocketEvent {
        label: 'B',
        incoming: b_read,
        outgoing: b_write,
    };
    (a, b)
}

#[cfg(test)]
mod test {
    use super::*;

    use quickcheck::{quickcheck, TestResult};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn chunked_writes_arrive_intact_and_in_order() {
        fn prop(data: Vec<u8>, chunk: u16) -> TestResult {
            if chunk == 0 {
                return TestResult::discard();
            }
            let chunk = usize::from(chunk);

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let (mut a, mut b) = build_linked_pair_with_capacity(1024);

                let expected = data.clone();
                let send = async {
                    for piece in data.chunks(chunk) {
                        a.sock_out().write_all(piece).await.unwrap();
                    }
                    a.shutdown().await.unwrap();
                };
                let recv = async {
                    let mut buf = vec![];
                    b.sock_in().read_to_end(&mut buf).await.unwrap();
                    buf
                };

                let ((), received) = tokio::join!(send, recv);
                assert_eq!(received, expected);
            });

            TestResult::passed()
        }
        quickcheck(prop as fn(Vec<u8>, u16) -> TestResult);
    }
}
