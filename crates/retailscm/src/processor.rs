// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-entity processors.
//!
//! A processor is the service behind an entity's form: its name prefixes
//! action URLs and it may offer its own candidate lists, consulted before
//! the generic strategies of [`ViewRender`].

use crate::{
    CandidateItem, CandidateProvider, Entity, FieldDescriptor, RenderConfig, RenderContext,
    Resolved, ViewRender,
    model::{GoodsShelfStockCount, StockCountIssueTrack}
};

/// Form field whose candidates the [`StockCountIssueTrackProcessor`] owns.
const STOCK_COUNT_FIELD: &str = "stockCount";

/// Processor of [`StockCountIssueTrack`] forms.
///
/// An issue can only be filed against a count that is still open, so the
/// `stockCount` field lists open counts instead of the top-N default listing.
#[derive(Debug, Clone, Default)]
pub struct StockCountIssueTrackProcessor {
    open_counts: Vec<GoodsShelfStockCount>
}

impl StockCountIssueTrackProcessor {
    /// Processor offering the unfinished counts among `counts`.
    pub fn new(counts: impl IntoIterator<Item = GoodsShelfStockCount>) -> Self {
        Self {
            open_counts: counts
                .into_iter()
                .filter(|count| !count.is_finished())
                .collect()
        }
    }

    /// Counts offered as candidates.
    #[must_use]
    pub fn open_counts(&self) -> &[GoodsShelfStockCount] {
        &self.open_counts
    }

    /// Renderer of issue track forms backed by this processor.
    #[must_use]
    pub fn into_renderer(self, config: RenderConfig) -> ViewRender<StockCountIssueTrack> {
        ViewRender::new(config).with_candidate_provider(self)
    }
}

impl CandidateProvider<StockCountIssueTrack> for StockCountIssueTrackProcessor {
    fn candidates_for(
        &self,
        _ctx: &RenderContext,
        track: &StockCountIssueTrack,
        field: &FieldDescriptor<StockCountIssueTrack>
    ) -> Resolved<Vec<CandidateItem>> {
        if field.name != STOCK_COUNT_FIELD {
            return Resolved::Absent;
        }

        tracing::debug!(
            track = track.id().unwrap_or_default(),
            open = self.open_counts.len(),
            "offering open stock counts"
        );
        Resolved::Value(
            self.open_counts
                .iter()
                .filter_map(CandidateItem::from_entity)
                .collect()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockCountStatus;

    fn count(id: &str, status: &str) -> GoodsShelfStockCount {
        GoodsShelfStockCount {
            id: Some(id.to_owned()),
            title: Some(format!("Count {id}")),
            status: StockCountStatus::of(status),
            version: 1,
            ..GoodsShelfStockCount::default()
        }
    }

    #[test]
    fn finished_counts_are_dropped() {
        let processor = StockCountIssueTrackProcessor::new([
            count("GSSC000001", StockCountStatus::PENDING),
            count("GSSC000002", StockCountStatus::FINISHED),
            count("GSSC000003", StockCountStatus::COUNTING)
        ]);
        let ids: Vec<_> = processor
            .open_counts()
            .iter()
            .filter_map(|count| count.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["GSSC000001", "GSSC000003"]);
    }

    #[test]
    fn other_fields_are_left_alone() {
        let processor = StockCountIssueTrackProcessor::new([count("GSSC000001", "PENDING")]);
        let field = StockCountIssueTrack::schema().field("title").unwrap();
        let resolved = processor.candidates_for(
            &RenderContext::new(),
            &StockCountIssueTrack::default(),
            field
        );
        assert!(resolved.is_absent());
    }

    #[test]
    fn stock_count_candidates_use_titles() {
        let processor = StockCountIssueTrackProcessor::new([count("GSSC000001", "PENDING")]);
        let field = StockCountIssueTrack::schema().field("stockCount").unwrap();
        let items = processor
            .candidates_for(&RenderContext::new(), &StockCountIssueTrack::default(), field)
            .value()
            .unwrap();
        assert_eq!(items, vec![CandidateItem::new("GSSC000001", Some("Count GSSC000001".into()))]);
    }
}
