//! Status chart data derived from a [`StatusSummary`].

use crate::model::{StatusCategory, StatusSummary};

/// One wedge of the status pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub category: StatusCategory,
    pub label: &'static str,
    pub value: usize,
    /// CSS hex colour.
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChart {
    pub slices: [ChartSlice; 4],
    pub total_orders: usize,
}

pub fn category_color(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Delivered => "#22c55e",
        StatusCategory::Pending => "#3b82f6",
        StatusCategory::Cancelled => "#eab308",
        StatusCategory::Undeliverable => "#94a3b8",
    }
}

impl StatusChart {
    pub fn from_summary(summary: &StatusSummary) -> Self {
        Self {
            slices: summary.entries().map(|(category, value)| ChartSlice {
                category,
                label: category.label(),
                value,
                color: category_color(category),
            }),
            total_orders: summary.total(),
        }
    }

    /// Fraction of all tracked orders in `category`; zero for an empty board.
    pub fn share(&self, category: StatusCategory) -> f64 {
        if self.total_orders == 0 {
            return 0.0;
        }
        let value = self
            .slices
            .iter()
            .find(|slice| slice.category == category)
            .map_or(0, |slice| slice.value);
        value as f64 / self.total_orders as f64
    }
}
