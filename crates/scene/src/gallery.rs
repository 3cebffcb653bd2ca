/// Image carousel position for a project's screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Gallery;

    #[test]
    fn next_and_prev_wrap() {
        let mut g = Gallery::new(5);
        assert_eq!(g.prev(), 4);
        assert_eq!(g.next(), 0);
        assert_eq!(g.next(), 1);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut g = Gallery::new(3);
        assert!(g.jump(2));
        assert!(!g.jump(3));
        assert_eq!(g.index(), 2);
    }

    #[test]
    fn empty_gallery_stays_put() {
        let mut g = Gallery::new(0);
        assert!(g.is_empty());
        assert_eq!(g.next(), 0);
        assert_eq!(g.prev(), 0);
    }
}
