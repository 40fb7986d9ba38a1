//! Driver rating summaries (overall score and per-star breakdown).

use serde::Serialize;

use crate::error::RatingError;

pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    /// Review count per star, index 0 = one star.
    counts: [u32; MAX_STARS as usize],
}

impl RatingSummary {
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Result<Self, RatingError> {
        let mut summary = Self::default();
        for rating in ratings {
            summary.record(rating)?;
        }
        Ok(summary)
    }

    pub fn record(&mut self, rating: u8) -> Result<(), RatingError> {
        if !(1..=MAX_STARS).contains(&rating) {
            return Err(RatingError::OutOfRange(rating));
        }
        self.counts[usize::from(rating - 1)] += 1;
        Ok(())
    }

    pub fn total_reviews(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Reviews with exactly `star` stars; 0 for values outside 1..=5.
    pub fn count(&self, star: u8) -> u32 {
        match star {
            1..=MAX_STARS => self.counts[usize::from(star - 1)],
            _ => 0,
        }
    }

    /// Mean rating, 0.0 with no reviews.
    pub fn average(&self) -> f64 {
        let total = self.total_reviews();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = (1..=MAX_STARS)
            .map(|star| u64::from(star) * u64::from(self.count(star)))
            .sum();
        weighted as f64 / f64::from(total)
    }

    /// Share of reviews with `star` stars, in percent.
    pub fn percentage(&self, star: u8) -> f64 {
        let total = self.total_reviews();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(star)) * 100.0 / f64::from(total)
    }

    /// Whole stars to draw filled.
    pub fn filled_stars(&self) -> u8 {
        self.average().floor() as u8
    }

    /// `(star, count)` pairs from five stars down to one.
    pub fn breakdown(&self) -> Vec<(u8, u32)> {
        (1..=MAX_STARS).rev().map(|star| (star, self.count(star))).collect()
    }
}
