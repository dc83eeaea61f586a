/// Press-and-drag scrolling for the sheet canvas.
///
/// Tracks the last pointer position while the primary button is held. Each
/// move yields the distance to scroll so the content follows the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    anchor: Option<f64>,
}

impl DragScroll {
    /// Starts a drag at `y`. Presses of any button other than the primary
    /// one are ignored.
    pub fn press(&mut self, y: f64, primary: bool) {
        if primary {
            self.anchor = Some(y);
        }
    }

    /// Scroll delta for a move to `y`, or `None` when not dragging or the
    /// pointer did not move vertically.
    pub fn drag_to(&mut self, y: f64) -> Option<f64> {
        let anchor = self.anchor?;
        self.anchor = Some(y);
        let delta = anchor - y;
        (delta != 0.0).then_some(delta)
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_without_press_do_nothing() {
        let mut drag = DragScroll::default();
        assert_eq!(drag.drag_to(40.0), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn dragging_down_scrolls_up() {
        let mut drag = DragScroll::default();
        drag.press(100.0, true);
        assert_eq!(drag.drag_to(130.0), Some(-30.0));
        assert_eq!(drag.drag_to(120.0), Some(10.0));
        assert_eq!(drag.drag_to(120.0), None);

        drag.release();
        assert_eq!(drag.drag_to(0.0), None);
    }

    #[test]
    fn secondary_button_does_not_start_a_drag() {
        let mut drag = DragScroll::default();
        drag.press(100.0, false);
        assert!(!drag.is_dragging());
        assert_eq!(drag.drag_to(160.0), None);

        drag.press(100.0, true);
        assert!(drag.is_dragging());
        drag.press(50.0, false);
        assert_eq!(drag.drag_to(90.0), Some(10.0));
    }
}
