/// Focusable elements of the name form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    FirstName,
    LastName,
    Submit,
}

impl FocusArea {
    pub fn next(self) -> FocusArea {
        match self {
            FocusArea::FirstName => FocusArea::LastName,
            FocusArea::LastName => FocusArea::Submit,
            FocusArea::Submit => FocusArea::FirstName,
        }
    }

    pub fn prev(self) -> FocusArea {
        match self {
            FocusArea::FirstName => FocusArea::Submit,
            FocusArea::LastName => FocusArea::FirstName,
            FocusArea::Submit => FocusArea::LastName,
        }
    }

    /// Text input that receives typed characters and pastes
    pub fn is_field(self) -> bool {
        !matches!(self, FocusArea::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_wraps_forward() {
        let mut focus = FocusArea::default();
        focus = focus.next();
        assert_eq!(focus, FocusArea::LastName);
        focus = focus.next();
        assert_eq!(focus, FocusArea::Submit);
        assert_eq!(focus.next(), FocusArea::FirstName);
    }

    #[test]
    fn test_ring_wraps_backward() {
        assert_eq!(FocusArea::FirstName.prev(), FocusArea::Submit);
        assert_eq!(FocusArea::Submit.prev(), FocusArea::LastName);
    }

    #[test]
    fn test_only_inputs_are_fields() {
        assert!(FocusArea::FirstName.is_field());
        assert!(FocusArea::LastName.is_field());
        assert!(!FocusArea::Submit.is_field());
    }
}
