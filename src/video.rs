#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Video {
    pub thumbnail: String,
    pub title: String,
    pub channel: String,
    pub view_count: u64,
}

impl Video {
    pub fn new(thumbnail: &str, title: &str, channel: &str, view_count: u64) -> Self {
        Self {
            thumbnail: thumbnail.to_owned(),
            title: title.to_owned(),
            channel: channel.to_owned(),
            view_count,
        }
    }

    /// Counts of a million or more are abbreviated with truncating division;
    /// everything below is printed verbatim. There is deliberately no "K"
    /// threshold.
    pub fn format_views(&self) -> String {
        if self.view_count >= 1_000_000 {
            format!("{}M views", self.view_count / 1_000_000)
        } else {
            format!("{} views", self.view_count)
        }
    }

    pub fn meta_label(&self) -> String {
        format!("{} • {}", self.channel, self.format_views())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_with_views(view_count: u64) -> Video {
        Video::new("thumbnail", "A title", "A channel", view_count)
    }

    #[test]
    fn views_in_the_millions_are_truncated() {
        assert_eq!(video_with_views(19_210_251).format_views(), "19M views");
        assert_eq!(video_with_views(24_000_000).format_views(), "24M views");
        assert_eq!(video_with_views(1_000_000).format_views(), "1M views");
    }

    #[test]
    fn views_below_a_million_are_verbatim() {
        assert_eq!(video_with_views(0).format_views(), "0 views");
        assert_eq!(video_with_views(999).format_views(), "999 views");
        assert_eq!(video_with_views(999_999).format_views(), "999999 views");
    }

    #[test]
    fn thousands_are_never_abbreviated() {
        assert_eq!(video_with_views(1_500).format_views(), "1500 views");
    }

    #[test]
    fn videos_are_debug_printable_for_assertions() {
        let video = Video::new("thumbnail", "A title", "Nasheeed", 19_210_251);
        let printed = format!("{video:?}");
        assert!(printed.contains("Nasheeed"));
        assert!(printed.contains("19210251"));
    }

    #[test]
    fn meta_label_joins_channel_and_views() {
        let video = Video::new("thumbnail", "A title", "Nasheeed", 19_210_251);
        assert_eq!(video.meta_label(), "Nasheeed • 19M views");
    }
}
