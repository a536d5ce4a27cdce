/// Identifier of a [`Solid`](super::Solid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolidId(pub u64);

/// Identifier of a [`Face`](super::Face).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u64);

/// The kind of object an identifier is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A map object such as a solid.
    MapObject,
    /// A face of a solid.
    Face,
}

/// Source of unique identifiers.
///
/// Uniqueness scope (per document, per process, persisted across sessions)
/// is decided by the implementor.
pub trait IdAllocator {
    /// Returns an identifier not previously handed out for `kind`.
    fn next(&mut self, kind: IdKind) -> u64;
}

/// Per-kind counters starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last_object: u64,
    last_face: u64,
}

impl SequentialIds {
    /// Creates an allocator whose first identifiers are 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdAllocator for SequentialIds {
    fn next(&mut self, kind: IdKind) -> u64 {
        let counter = match kind {
            IdKind::MapObject => &mut self.last_object,
            IdKind::Face => &mut self.last_face,
        };
        *counter += 1;
        *counter
    }
}
