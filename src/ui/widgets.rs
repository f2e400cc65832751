//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the selected item visible.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.selected_index);
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Adjust a scroll offset so rows `top..top + height` are inside the viewport.
///
/// Items taller than the viewport are aligned to their top.
pub fn scroll_to_show(offset: usize, top: usize, height: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return 0;
    }
    if top < offset || height >= viewport {
        top
    } else if top + height > offset + viewport {
        top + height - viewport
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_item_keeps_offset() {
        assert_eq!(scroll_to_show(5, 8, 3, 10), 5);
    }

    #[test]
    fn test_item_below_scrolls_down() {
        assert_eq!(scroll_to_show(0, 12, 3, 10), 5);
    }

    #[test]
    fn test_item_above_scrolls_up() {
        assert_eq!(scroll_to_show(10, 4, 3, 10), 4);
    }

    #[test]
    fn test_tall_item_aligned_to_top() {
        assert_eq!(scroll_to_show(0, 20, 15, 10), 20);
        assert_eq!(scroll_to_show(3, 0, 1, 0), 0);
    }
}
