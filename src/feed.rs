use crate::{error::FeedError, video::Video};

use async_trait::async_trait;

/// An ordered feed. Order given is order displayed and duplicates are kept
/// as-is.
pub struct Feed {
    pub videos: Vec<Video>,
}

#[async_trait]
pub trait FeedSource {
    async fn load() -> Result<Self, FeedError>
    where
        Self: Sized;

    fn feed(&self) -> Feed;
}

/// The built-in source: a fixed list of six records.
pub struct SampleSource;

#[async_trait]
impl FeedSource for SampleSource {
    async fn load() -> Result<Self, FeedError> {
        Ok(Self)
    }

    fn feed(&self) -> Feed {
        Feed {
            videos: sample_videos(),
        }
    }
}

fn sample_videos() -> Vec<Video> {
    vec![
        Video::new(
            "thumbnail",
            "The Beauty of Existence - Heart Touching",
            "Nasheeed",
            19_210_251,
        ),
        Video::new(
            "minecraft",
            "Minecraft | Movie Trailer | Mine craft movie",
            "DIY Toys",
            24_000_000,
        ),
        Video::new(
            "thumbnail",
            "DIY Toys | Satisfying And Relaxing | DIY TikTok Compilation",
            "DIY Toys",
            24_000_000,
        ),
        Video::new(
            "thumbnail",
            "The Beauty of Existence - Heart Touching",
            "Nasheeed",
            19_210_251,
        ),
        Video::new(
            "thumbnail",
            "DIY Toys | Satisfying And Relaxing | DIY TikTok Compilation",
            "DIY Toys",
            24_000_000,
        ),
        Video::new(
            "oil",
            "Saudi Arabia - The Making of a Financial Empire | A Documentary",
            "Finaus",
            24_000_000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_has_six_videos() {
        assert_eq!(sample_videos().len(), 6);
    }

    #[test]
    fn sample_feed_keeps_duplicates() {
        let videos = sample_videos();
        assert_eq!(videos[0], videos[3]);
        assert_eq!(videos[2], videos[4]);
        assert_ne!(videos[0], videos[1]);
    }

    #[test]
    fn sample_feed_order_is_source_order() {
        let videos = sample_videos();
        let channels: Vec<&str> = videos.iter().map(|video| video.channel.as_str()).collect();
        assert_eq!(
            channels,
            vec!["Nasheeed", "DIY Toys", "DIY Toys", "Nasheeed", "DIY Toys", "Finaus"]
        );
    }

    #[test]
    fn sample_channels_are_non_empty() {
        assert!(sample_videos().iter().all(|video| !video.channel.is_empty()));
    }
}
