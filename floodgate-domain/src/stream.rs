//! Flow-controlled in-memory byte stream.
//!
//! [`ByteStream`] is the primitive beneath every reliable transport in
//! Floodgate: a bounded FIFO byte buffer between one producer and one
//! consumer. The producer may only push while capacity remains (excess is
//! truncated, never buffered), the consumer drains at its own pace, and the
//! stream can always answer how many bytes are buffered, how many have been
//! pushed/popped over its lifetime, and whether it has reached a defined end.
//!
//! The two roles are exposed as capability-restricted views over the same
//! state: [`ByteStream::writer`] hands out a [`Writer`] (push, close) and
//! [`ByteStream::reader`] a [`Reader`] (peek, pop, drain). Each view borrows
//! the stream mutably, so the one-writer / one-reader-at-a-time discipline
//! is enforced at compile time — no locks, and no operation ever blocks.
//! `push` never waits for capacity and `pop` never waits for data; any
//! "wait until readable" behavior belongs to a layer above this one.
//!
//! Popped bytes are always a prefix, in push order, of pushed bytes: no
//! reordering, no duplication, no gaps.

use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// ByteStream
// ---------------------------------------------------------------------------

/// Capacity-bounded FIFO byte buffer with close and error signalling.
///
/// Data is stored as a queue of non-empty chunks, each kept exactly as
/// pushed; `front_consumed` tracks the already-popped prefix of the front
/// chunk. [`Reader::peek`] therefore returns one contiguous run at a time —
/// possibly shorter than the full buffered length — and callers peek/pop
/// repeatedly to drain.
#[derive(Debug)]
pub struct ByteStream {
    // ---
    /// Upper bound on bytes buffered (pushed but not yet popped).
    /// Fixed at construction.
    capacity: usize,

    /// Pushed-but-not-popped data, oldest chunk first. No chunk is empty.
    chunks: VecDeque<Vec<u8>>,

    /// Bytes of the front chunk that have already been popped.
    front_consumed: usize,

    /// Current buffered total. Invariant: `pushed - popped == buffered`.
    buffered: usize,

    /// Lifetime total accepted by push. Never decreases.
    pushed: u64,

    /// Lifetime total removed by pop. Never decreases.
    popped: u64,

    /// Set once by [`Writer::close`]; never reset.
    closed: bool,

    /// Set once by [`ByteStream::set_error`]; never reset.
    errored: bool,
}

// ---

impl ByteStream {
    // ---

    /// Create an empty, open stream with the given fixed capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-capacity stream could never
    /// accept a byte, so constructing one is a caller bug.
    pub fn new(capacity: usize) -> Self {
        // ---
        assert!(capacity > 0, "ByteStream capacity must be positive");
        Self {
            capacity,
            chunks: VecDeque::new(),
            front_consumed: 0,
            buffered: 0,
            pushed: 0,
            popped: 0,
            closed: false,
            errored: false,
        }
    }

    // ---

    /// Producer view: push and close.
    pub fn writer(&mut self) -> Writer<'_> {
        Writer { stream: self }
    }

    /// Consumer view: peek, pop, drain.
    pub fn reader(&mut self) -> Reader<'_> {
        Reader { stream: self }
    }

    // ---

    /// Mark the stream permanently faulted.
    ///
    /// Set by the owning context (for example a receiver that detected a
    /// protocol violation upstream), not by the writer or reader roles.
    /// Bookkeeping stays mechanically well-defined afterwards, but callers
    /// are expected to abandon a stream once [`ByteStream::has_error`]
    /// reports true.
    pub fn set_error(&mut self) {
        self.errored = true;
    }

    /// Has the stream been marked faulted?
    pub fn has_error(&self) -> bool {
        self.errored
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Producer-side view of a [`ByteStream`].
#[derive(Debug)]
pub struct Writer<'a> {
    // ---
    stream: &'a mut ByteStream,
}

// ---

impl Writer<'_> {
    // ---

    /// Append as much of `data` as available capacity allows, in order.
    ///
    /// Excess bytes beyond [`Writer::available_capacity`] are dropped, not
    /// buffered and not an error — a producer that wants all-or-nothing
    /// semantics checks capacity first. After [`Writer::close`] every push
    /// is a no-op and counters stay untouched.
    pub fn push(&mut self, data: &[u8]) {
        // ---
        if self.stream.closed {
            return;
        }
        let take = data.len().min(self.available_capacity());
        if take == 0 {
            return;
        }
        self.stream.chunks.push_back(data[..take].to_vec());
        self.stream.buffered += take;
        self.stream.pushed += take as u64;
    }

    // ---

    /// Signal that nothing more will ever be pushed.
    ///
    /// Idempotent and terminal. Bytes already buffered remain available to
    /// the reader; only future production is forbidden.
    pub fn close(&mut self) {
        self.stream.closed = true;
    }

    // ---

    /// Has [`Writer::close`] been called?
    pub fn is_closed(&self) -> bool {
        self.stream.closed
    }

    /// How many bytes can be pushed right now. Correct even when closed.
    pub fn available_capacity(&self) -> usize {
        self.stream.capacity - self.stream.buffered
    }

    /// Lifetime total of bytes accepted by push.
    pub fn bytes_pushed(&self) -> u64 {
        self.stream.pushed
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Consumer-side view of a [`ByteStream`].
#[derive(Debug)]
pub struct Reader<'a> {
    // ---
    stream: &'a mut ByteStream,
}

// ---

impl Reader<'_> {
    // ---

    /// The maximal contiguous run at the front of the buffer.
    ///
    /// May be shorter than [`Reader::bytes_buffered`] when the buffered data
    /// spans chunk boundaries; callers peek and pop repeatedly. Empty if and
    /// only if the buffer is empty.
    pub fn peek(&self) -> &[u8] {
        // ---
        match self.stream.chunks.front() {
            Some(chunk) => &chunk[self.stream.front_consumed..],
            None => &[],
        }
    }

    // ---

    /// Remove exactly `len` bytes from the front of the buffer.
    ///
    /// Popping does not require the stream to be closed.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`Reader::bytes_buffered`] — callers query
    /// before popping; overshooting is a programming error, not a
    /// recoverable condition.
    pub fn pop(&mut self, len: usize) {
        // ---
        let s = &mut *self.stream;
        assert!(
            len <= s.buffered,
            "pop({len}) exceeds bytes_buffered ({})",
            s.buffered
        );

        let mut remaining = len;
        while remaining > 0 {
            // Non-empty while `remaining > 0`: guarded by the assert above.
            let front_len = s.chunks.front().unwrap().len() - s.front_consumed;
            if remaining < front_len {
                s.front_consumed += remaining;
                remaining = 0;
            } else {
                remaining -= front_len;
                s.front_consumed = 0;
                s.chunks.pop_front();
            }
        }

        s.buffered -= len;
        s.popped += len as u64;
    }

    // ---

    /// Peek and pop up to `max_len` bytes into one collected buffer.
    ///
    /// Pure composition of [`Reader::peek`] and [`Reader::pop`]; stops at
    /// `max_len` or when the buffer runs dry, whichever comes first.
    pub fn read(&mut self, max_len: usize) -> Vec<u8> {
        // ---
        let mut out = Vec::new();
        while self.bytes_buffered() > 0 && out.len() < max_len {
            let view = self.peek();
            // Empty peek with bytes still buffered means the chunk queue is
            // corrupt — fail loudly rather than spin.
            assert!(
                !view.is_empty(),
                "peek() returned an empty slice with {} bytes buffered",
                self.bytes_buffered()
            );
            let take = view.len().min(max_len - out.len());
            out.extend_from_slice(&view[..take]);
            self.pop(take);
        }
        out
    }

    // ---

    /// Closed and fully drained — no more bytes will ever become available.
    pub fn is_finished(&self) -> bool {
        self.stream.closed && self.stream.buffered == 0
    }

    /// Bytes currently buffered (pushed and not yet popped).
    pub fn bytes_buffered(&self) -> usize {
        self.stream.buffered
    }

    /// Lifetime total of bytes removed by pop.
    pub fn bytes_popped(&self) -> u64 {
        self.stream.popped
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
