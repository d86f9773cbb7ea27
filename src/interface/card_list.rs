use crate::video::Video;

use std::ops::Range;

/// Rows one card occupies: bordered thumbnail, two title rows, meta row and
/// a separating blank row.
pub const CARD_HEIGHT: u16 = 9;

/// Cursor and scroll state over an ordered list of videos. The videos are
/// never reordered, filtered or deduplicated.
pub struct CardList {
    videos: Vec<Video>,
    current: usize,
}

impl CardList {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Video> {
        self.videos.get(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn move_up(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.current + 1 < self.videos.len() {
            self.current += 1;
        }
    }

    pub fn move_top(&mut self) {
        self.current = 0;
    }

    pub fn move_bottom(&mut self) {
        self.current = self.videos.len().saturating_sub(1);
    }

    /// Window of card indices to draw in an area `rows` high, keeping the
    /// cursor visible and anchoring at both ends of the list.
    pub fn visible_range(&self, rows: usize) -> Range<usize> {
        let len = self.videos.len();
        let visible = std::cmp::max(rows / CARD_HEIGHT as usize, 1);

        if len <= visible {
            0..len
        } else if self.current < visible / 2 {
            0..visible
        } else if self.current >= len - (visible - visible / 2) {
            (len - visible)..len
        } else {
            let start = self.current - visible / 2;
            start..(start + visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(count: usize) -> CardList {
        let videos = (0..count)
            .map(|i| Video::new("thumbnail", &format!("Video {i}"), "Channel", 100))
            .collect();
        CardList::new(videos)
    }

    #[test]
    fn iteration_preserves_input_order_including_duplicates() {
        let videos = vec![
            Video::new("thumbnail", "First", "A", 1),
            Video::new("thumbnail", "Second", "B", 2),
            Video::new("thumbnail", "First", "A", 1),
        ];
        let list = CardList::new(videos.clone());

        for (index, video) in videos.iter().enumerate() {
            assert_eq!(list.get(index), Some(video));
        }
        assert_eq!(list.get(0), list.get(2));
    }

    #[test]
    fn empty_list_has_an_empty_range() {
        let list = list_of(0);
        assert_eq!(list.visible_range(30), 0..0);
    }

    #[test]
    fn movement_on_an_empty_list_does_not_panic() {
        let mut list = list_of(0);
        list.move_up();
        list.move_down();
        list.move_top();
        list.move_bottom();
        assert_eq!(list.current_index(), 0);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut list = list_of(3);
        list.move_up();
        assert_eq!(list.current_index(), 0);

        list.move_bottom();
        list.move_down();
        assert_eq!(list.current_index(), 2);
    }

    #[test]
    fn short_lists_are_fully_visible() {
        let list = list_of(2);
        assert_eq!(list.visible_range(27), 0..2);
    }

    #[test]
    fn window_follows_the_cursor() {
        let mut list = list_of(6);
        // 27 rows fit three cards.
        assert_eq!(list.visible_range(27), 0..3);

        list.move_down();
        list.move_down();
        list.move_down();
        assert_eq!(list.current_index(), 3);
        let range = list.visible_range(27);
        assert!(range.contains(&3));

        list.move_bottom();
        assert_eq!(list.visible_range(27), 3..6);
    }

    #[test]
    fn tiny_areas_still_show_the_cursor() {
        let mut list = list_of(6);
        list.move_bottom();
        let range = list.visible_range(4);
        assert!(range.contains(&5));
        assert!(range.end <= 6);
    }
}
