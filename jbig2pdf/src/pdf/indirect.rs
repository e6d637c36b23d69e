use std::fmt::Display;

/// Points at an object of the document, e.g. `3 0 R`.
///
/// Objects are never updated in place, so the generation is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Reference {
    pub fn new(index: u32) -> Self {
        Self { index, generation: 0 }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Reference::new(3).to_string(), "3 0 R");
        assert_eq!(Reference::new(1234).to_string(), "1234 0 R");
    }
}
