//! Offline guide info generator.
//!
//! Stands in for a remote AI guide service: it waits a moment to feel like
//! a network call, then returns static content. No API key or network I/O
//! is involved, and callers may swap in any implementation returning the
//! same shape.

use std::time::Duration;

use log::info;

use crate::models::{GuideInfo, HighlightColor, HighlightTag};

/// Artificial latency applied before answering.
const SIMULATED_DELAY: Duration = Duration::from_millis(500);

/// Produces a guide payload for the given location and title.
pub async fn generate_guide_info(location: &str, title: &str) -> GuideInfo {
    tokio::time::sleep(SIMULATED_DELAY).await;

    info!("Generating guide info for: {title} at {location}");

    GuideInfo {
        story: "This location is famous for its historical significance dating back to the \
                Edo period. It was originally a villa for a shogun and offers a serene \
                atmosphere amidst the city bustle."
            .to_string(),
        highlights: vec![
            HighlightTag {
                id: "m1".to_string(),
                text: "Matcha Soft Serve".to_string(),
                color: HighlightColor::Green,
            },
            HighlightTag {
                id: "m2".to_string(),
                text: "Yudofu (Tofu Hot Pot)".to_string(),
                color: HighlightColor::Orange,
            },
            HighlightTag {
                id: "m3".to_string(),
                text: "Dango".to_string(),
                color: HighlightColor::Red,
            },
        ],
        tip: "Arrive early to avoid crowds. The best photo spot is across the main pond \
              where you can capture the reflection."
            .to_string(),
    }
}
