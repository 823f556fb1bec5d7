use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Write a synthetic ProcessedTweets.csv for trying out the explorer.
#[derive(Debug, Parser)]
struct Args {
    /// Output path
    #[arg(default_value = "ProcessedTweets.csv")]
    output: PathBuf,

    /// Tweets per month
    #[arg(long, default_value_t = 400)]
    per_month: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One output row; field names match the explorer's expected header.
#[derive(Debug, Serialize)]
struct TweetRecord<'a> {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Sentiment")]
    sentiment: f64,
    #[serde(rename = "Subjectivity")]
    subjectivity: f64,
    #[serde(rename = "Dimension 1")]
    dim1: f64,
    #[serde(rename = "Dimension 2")]
    dim2: f64,
    #[serde(rename = "RawTweet")]
    raw_tweet: &'a str,
}

/// A topic cluster: centre in the projection plane, typical tone, phrases.
struct Topic {
    center: (f64, f64),
    tone: f64,
    subjects: &'static [&'static str],
}

static TOPICS: [Topic; 4] = [
    Topic {
        center: (-6.0, 4.0),
        tone: 0.45,
        subjects: &["the new phone", "this update", "the battery life", "the camera"],
    },
    Topic {
        center: (5.0, 5.0),
        tone: -0.35,
        subjects: &["the commute", "the traffic", "the delayed train", "rush hour"],
    },
    Topic {
        center: (-3.0, -5.0),
        tone: 0.1,
        subjects: &["the match", "the final score", "the referee", "our team"],
    },
    Topic {
        center: (6.0, -4.0),
        tone: 0.25,
        subjects: &["the weekend", "the concert", "brunch", "the weather"],
    },
];

static POSITIVE: [&str; 4] = ["loving", "really enjoying", "so happy about", "impressed by"];
static NEUTRAL: [&str; 4] = ["thinking about", "reading about", "just saw", "talking about"];
static NEGATIVE: [&str; 4] = ["tired of", "annoyed by", "not a fan of", "disappointed with"];

fn compose(rng: &mut StdRng, topic: &Topic, sentiment: f64, subjectivity: f64) -> String {
    let verbs: &[&str] = if sentiment > 0.15 {
        &POSITIVE
    } else if sentiment < -0.15 {
        &NEGATIVE
    } else {
        &NEUTRAL
    };
    let verb = verbs.choose(rng).copied().unwrap_or_default();
    let subject = topic.subjects.choose(rng).copied().unwrap_or_default();
    let mut text = format!("{verb} {subject}");
    if subjectivity > 0.6 {
        text.push_str(", honestly");
    }
    text.push_str(if sentiment > 0.5 { "!" } else { "." });
    text
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    // Months are written as integers, as in the processed export.
    let mut total = 0usize;
    for month in 1..=6u32 {
        for _ in 0..args.per_month {
            let topic = &TOPICS[rng.gen_range(0..TOPICS.len())];
            let tone = Normal::new(topic.tone, 0.35).context("sentiment distribution")?;
            let spread_x = Normal::new(topic.center.0, 1.6).context("projection distribution")?;
            let spread_y = Normal::new(topic.center.1, 1.6).context("projection distribution")?;

            let sentiment = tone.sample(&mut rng).clamp(-1.0, 1.0);
            let subjectivity: f64 = rng.gen();
            let text = compose(&mut rng, topic, sentiment, subjectivity);

            writer.serialize(TweetRecord {
                month,
                sentiment,
                subjectivity,
                dim1: spread_x.sample(&mut rng),
                dim2: spread_y.sample(&mut rng),
                raw_tweet: &text,
            })?;
            total += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {total} tweets over 6 months to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_picks_matching_verbs() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = compose(&mut rng, &TOPICS[0], 0.9, 0.1);
        assert!(POSITIVE.iter().any(|v| text.starts_with(v)));
        assert!(text.ends_with('!'));

        let text = compose(&mut rng, &TOPICS[1], -0.6, 0.9);
        assert!(NEGATIVE.iter().any(|v| text.starts_with(v)));
        assert!(text.ends_with(", honestly."));
    }

    #[test]
    fn same_seed_same_text() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for topic in &TOPICS {
            assert_eq!(compose(&mut a, topic, 0.0, 0.5), compose(&mut b, topic, 0.0, 0.5));
        }
    }
}
