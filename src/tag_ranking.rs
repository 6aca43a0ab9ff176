//! Frequency ranking of tags on top of a [`MinPq`]
//!
//! Each distinct tag is an element of the queue. The first occurrence adds it
//! with priority `0`, and every further occurrence lowers its priority by one.
//! The most frequent tag therefore has the smallest priority, so repeatedly
//! removing the minimum yields tags from most to least frequent.
//!
//! # Example
//!
//! ```rust
//! use minpq::optimized_heap::OptimizedHeapMinPq;
//! use minpq::tag_ranking::top_tags;
//!
//! let tags = ["wcag111", "wcag412", "wcag111", "wcag143", "wcag111", "wcag412"];
//! let top = top_tags::<OptimizedHeapMinPq<String>, _>(tags, 2).unwrap();
//!
//! assert_eq!(top[0].tag, "wcag111");
//! assert_eq!(top[0].count, 3);
//! assert_eq!(top[1].tag, "wcag412");
//! assert_eq!(top[1].count, 2);
//! ```

use crate::traits::{MinPq, PqError};
use tracing::debug;

/// A tag and the number of times it was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Counts tag occurrences in a min-priority queue
#[derive(Debug)]
pub struct TagRanking<Q> {
    queue: Q,
    recorded: usize,
}

fn count_from_priority(priority: f64) -> usize {
    (1.0 - priority) as usize
}

impl<Q: MinPq<String>> TagRanking<Q> {
    /// Creates an empty ranking
    pub fn new() -> Self {
        Self {
            queue: Q::new(),
            recorded: 0,
        }
    }

    /// Records one occurrence of `tag`
    pub fn record(&mut self, tag: &str) -> Result<(), PqError> {
        let tag = tag.to_owned();
        if self.queue.contains(&tag) {
            let priority = self.queue.get_priority(&tag)?;
            self.queue.change_priority(&tag, priority - 1.0)?;
        } else {
            self.queue.add(tag, 0.0)?;
        }
        self.recorded += 1;
        Ok(())
    }

    /// Records every tag produced by the iterator
    pub fn record_all<I, S>(&mut self, tags: I) -> Result<(), PqError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.record(tag.as_ref())?;
        }
        Ok(())
    }

    /// Number of times `tag` was recorded, zero if never
    pub fn count(&self, tag: &str) -> usize {
        self.queue
            .get_priority(&tag.to_owned())
            .map(count_from_priority)
            .unwrap_or(0)
    }

    /// Number of distinct tags recorded
    pub fn distinct(&self) -> usize {
        self.queue.len()
    }

    /// Total number of occurrences recorded
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Consumes the ranking, returning up to `k` tags, most frequent first
    ///
    /// Tags with equal counts are returned in an unspecified order. Asking
    /// for more tags than were recorded returns all of them.
    ///
    /// # Errors
    /// Propagates any error from the underlying queue.
    pub fn into_top(mut self, k: usize) -> Result<Vec<TagCount>, PqError> {
        let mut top = Vec::with_capacity(k.min(self.queue.len()));
        while top.len() < k && !self.queue.is_empty() {
            let (tag, priority) = self.queue.remove_min_node()?.into_parts();
            top.push(TagCount {
                tag,
                count: count_from_priority(priority),
            });
        }
        debug!(
            recorded = self.recorded,
            returned = top.len(),
            "ranked most frequent tags"
        );
        Ok(top)
    }
}

impl<Q: MinPq<String>> Default for TagRanking<Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranks `tags` by frequency and returns the `k` most frequent
pub fn top_tags<Q, I>(tags: I, k: usize) -> Result<Vec<TagCount>, PqError>
where
    Q: MinPq<String>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut ranking = TagRanking::<Q>::new();
    ranking.record_all(tags)?;
    ranking.into_top(k)
}
