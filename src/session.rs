//! Session lifecycle shared by [`Encoder`](crate::Encoder) and [`Decoder`](crate::Decoder).

/// Where a session is in its lifecycle.
///
/// Construction initializes the dictionary, so a session starts in `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input.
    Ready,
    /// Emitting the final partial match of an input.
    ///
    /// Held only for the duration of an encoder flush; never observed
    /// between calls.
    Draining,
    /// No further operations are accepted.
    Closed,
}

impl Phase {
    pub(crate) fn ensure_open(self) -> crate::Result<()> {
        match self {
            Phase::Closed => Err(crate::Error::SessionClosed),
            Phase::Ready | Phase::Draining => Ok(()),
        }
    }
}
