use std::path::PathBuf;

use clap::Parser;

/// Command line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tweet-lens", version, about = "Explore sentiment-scored tweets on a 2D projection")]
pub struct Config {
    /// CSV file with Month, Sentiment, Subjectivity, Dimension 1, Dimension 2 and RawTweet columns
    #[arg(env = "TWEET_LENS_DATA", default_value = "ProcessedTweets.csv")]
    pub data: PathBuf,

    /// Rows per page in the selected-tweets table
    #[arg(long, env = "TWEET_LENS_PAGE_SIZE", default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: u16,

    /// Marker radius of scatter points, in pixels
    #[arg(long, default_value_t = 3.0)]
    pub point_radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["tweet-lens"]).unwrap();
        assert_eq!(config.data, PathBuf::from("ProcessedTweets.csv"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.point_radius, 3.0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Config::try_parse_from(["tweet-lens", "--page-size", "0"]).is_err());
    }

    #[test]
    fn explicit_path() {
        let config = Config::try_parse_from(["tweet-lens", "tweets.csv", "--page-size", "25"]).unwrap();
        assert_eq!(config.data, PathBuf::from("tweets.csv"));
        assert_eq!(config.page_size, 25);
    }
}
