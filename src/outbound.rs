//! Dispatch planning: where each chunk goes.
//!
//! A bot replying with a long answer has to send several messages, all to
//! the place the answer was meant for, in order. [`plan`] pairs every chunk
//! with the same [`Destination`] and numbers the parts; the transport sends
//! them one by one.
//!
//! ```text
//! plan(chunker, Reply { channel_id: 7, message_id: 42 }, long_text)
//!
//! Outbound { Reply(7, 42), part 1/3, "..." }
//! Outbound { Reply(7, 42), part 2/3, "..." }
//! Outbound { Reply(7, 42), part 3/3, "..." }
//! ```

use crate::Chunker;

/// Where an outbound message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Post into a channel.
    Channel {
        /// Target channel.
        channel_id: u64,
    },
    /// Reply to a message, shown threaded under it.
    Reply {
        /// Channel the replied-to message lives in.
        channel_id: u64,
        /// The message being replied to.
        message_id: u64,
    },
}

impl Destination {
    /// The channel the message lands in, whatever the variant.
    #[must_use]
    pub const fn channel_id(&self) -> u64 {
        match *self {
            Self::Channel { channel_id } | Self::Reply { channel_id, .. } => channel_id,
        }
    }

    /// The same channel, as a plain post rather than a reply.
    #[must_use]
    pub const fn into_channel(self) -> Self {
        Self::Channel {
            channel_id: self.channel_id(),
        }
    }
}

/// One message ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// Where to send it.
    pub destination: Destination,
    /// Message body, within the chunker's limit.
    pub text: String,
    /// One-based position in the sequence.
    pub part: usize,
    /// Total number of parts.
    pub parts: usize,
}

impl Outbound {
    /// Whether this is the last part of its sequence.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.part == self.parts
    }
}

/// Split `text` and address every chunk to `destination`, in send order.
///
/// Never empty: an empty text plans a single empty message.
///
/// ## Example
///
/// ```rust
/// use missive::{plan, Destination, LineChunker};
///
/// let chunker = LineChunker::new(5).unwrap();
/// let to = Destination::Channel { channel_id: 1 };
/// let messages = plan(&chunker, to, "hello\nworld");
///
/// assert_eq!(messages.len(), 2);
/// assert!(messages.iter().all(|m| m.destination == to));
/// assert_eq!(messages[1].text, "world");
/// assert!(messages[1].is_last());
/// ```
pub fn plan<C>(chunker: &C, destination: Destination, text: &str) -> Vec<Outbound>
where
    C: Chunker + ?Sized,
{
    let chunks = chunker.chunk(text);
    let parts = chunks.len();

    chunks
        .into_iter()
        .map(|chunk| Outbound {
            destination,
            part: chunk.index + 1,
            parts,
            text: chunk.text,
        })
        .collect()
}
