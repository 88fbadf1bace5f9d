use image::RgbaImage;

/// An ordered, eagerly loaded sequence of sprite frames.
///
/// Fixed after construction; opening a different folder replaces the
/// whole sequence rather than mutating it.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<RgbaImage>,
}

impl FrameSequence {
    pub fn new(frames: Vec<RgbaImage>) -> Self {
        FrameSequence { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.frames.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_get() {
        let seq = FrameSequence::new(vec![RgbaImage::new(2, 2), RgbaImage::new(4, 4)]);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());
        assert_eq!(seq.get(1).unwrap().dimensions(), (4, 4));
        assert!(seq.get(2).is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let seq = FrameSequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }
}
