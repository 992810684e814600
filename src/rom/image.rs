/// Holds the content of the rom, as read from disk. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    pub fn new(content: Vec<u8>) -> Self {
        Self { data: content }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for RomImage {
    fn from(content: Vec<u8>) -> Self {
        Self::new(content)
    }
}
