/// Keeps keyboard focus cycling inside a fixed list of widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTrap<T> {
    order: Vec<T>,
}

impl<T: Copy + Eq> FocusTrap<T> {
    pub fn new(order: Vec<T>) -> Self {
        Self { order }
    }

    pub fn contains(&self, id: T) -> bool {
        self.order.contains(&id)
    }

    pub fn first(&self) -> Option<T> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<T> {
        self.order.last().copied()
    }

    /// Where Tab (or Shift+Tab when `backwards`) should land from `current`.
    /// Wraps last to first and first to last; focus outside the trap is
    /// pulled back to the nearest end.
    pub fn next(&self, current: Option<T>, backwards: bool) -> Option<T> {
        let position = current.and_then(|id| self.order.iter().position(|&o| o == id));
        let len = self.order.len();
        match (position, backwards) {
            (_, _) if len == 0 => None,
            (None, false) => self.first(),
            (None, true) => self.last(),
            (Some(i), false) => self.order.get((i + 1) % len).copied(),
            (Some(i), true) => self.order.get((i + len - 1) % len).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some('a'), false, Some('b'))]
    #[case(Some('c'), false, Some('a'))]
    #[case(Some('a'), true, Some('c'))]
    #[case(Some('b'), true, Some('a'))]
    #[case(None, false, Some('a'))]
    #[case(None, true, Some('c'))]
    #[case(Some('z'), false, Some('a'))]
    fn test_tab_cycles_with_wraparound(
        #[case] current: Option<char>,
        #[case] backwards: bool,
        #[case] expected: Option<char>,
    ) {
        let trap = FocusTrap::new(vec!['a', 'b', 'c']);
        assert_eq!(trap.next(current, backwards), expected);
    }

    #[test]
    fn test_single_and_empty() {
        let single = FocusTrap::new(vec![1]);
        assert_eq!(single.next(Some(1), false), Some(1));
        assert_eq!(single.next(Some(1), true), Some(1));

        let empty: FocusTrap<u8> = FocusTrap::default();
        assert_eq!(empty.next(None, false), None);
        assert!(!empty.contains(0));
    }
}
