/// Default capacity of the buffer in front of the inbound channel.
const DEFAULT_READ_BUFFER_BYTES: usize = 8192;

/// Socket options applied when a stream is attached to an event.
#[derive(Clone, Copy, Debug)]
pub struct SocketConfig {
    /// Disable Nagle's algorithm on the underlying stream.
    pub nodelay: bool,
    /// Override the IP time-to-live, if set.
    pub ttl: Option<u32>,
    /// Capacity of the buffer in front of the inbound channel.
    pub read_buffer: usize,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            nodelay: true,
            ttl: None,
            read_buffer: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}
