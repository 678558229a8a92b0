use crate::keys::{self, PhysicalKey};

/// Physical keys of the word currently being typed.
///
/// Owned by the event thread. Cleared on every boundary and every reset
/// signal, and while a correction is being injected.
#[derive(Debug, Default, Clone)]
pub struct WordBuffer {
    keys: Vec<PhysicalKey>,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: PhysicalKey) {
        self.keys.push(key);
    }

    pub fn backspace(&mut self) {
        let _ = self.keys.pop();
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Takes the buffered keys, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<PhysicalKey> {
        std::mem::take(&mut self.keys)
    }

    pub fn snapshot(&self) -> Vec<PhysicalKey> {
        self.keys.clone()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn text(&self) -> String {
        keys::key_text(&self.keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keys_from_text;

    fn buffer_with(text: &str) -> WordBuffer {
        let mut b = WordBuffer::new();
        for key in keys_from_text(text) {
            b.append(key);
        }
        b
    }

    #[test]
    fn backspace_drops_last_key() {
        let mut b = buffer_with("helo");
        b.backspace();
        assert_eq!(b.text(), "hel");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut b = WordBuffer::new();
        b.backspace();
        assert!(b.is_empty());
    }

    #[test]
    fn take_empties_the_buffer() {
        let mut b = buffer_with("abc");
        let keys = b.take();
        assert_eq!(keys.len(), 3);
        assert!(b.is_empty());
        assert_eq!(b.snapshot(), Vec::new());
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = buffer_with("word");
        b.clear();
        assert_eq!(b.len(), 0);
        assert_eq!(b.text(), "");
    }
}
