//! Participating-media markers carried by rays and interactions.
//!
//! Media physics lives elsewhere. Here a medium is only an identity that
//! rays and surfaces can point at without owning.

/// An opaque participating medium.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Medium {
    /// Name used in scene descriptions and diagnostics.
    pub name: String,
}

impl Medium {
    /// Create a named medium.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The media on either side of a surface. `None` means vacuum.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MediumInterface<'m> {
    /// Medium on the side the normal points away from.
    pub inside: Option<&'m Medium>,
    /// Medium on the side the normal points into.
    pub outside: Option<&'m Medium>,
}

impl<'m> MediumInterface<'m> {
    /// An interface with distinct media on each side.
    pub fn new(inside: Option<&'m Medium>, outside: Option<&'m Medium>) -> Self {
        Self { inside, outside }
    }

    /// The same medium on both sides.
    pub fn uniform(medium: Option<&'m Medium>) -> Self {
        Self {
            inside: medium,
            outside: medium,
        }
    }

    /// Whether the two sides differ.
    pub fn is_medium_transition(&self) -> bool {
        match (self.inside, self.outside) {
            (None, None) => false,
            (Some(a), Some(b)) => !std::ptr::eq(a, b),
            _ => true,
        }
    }
}
