//! Status distribution over every tracked order.

use std::fmt::Display;

/// The four mutually exclusive status categories, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Delivered,
    Pending,
    Cancelled,
    Undeliverable,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::Delivered,
        StatusCategory::Pending,
        StatusCategory::Cancelled,
        StatusCategory::Undeliverable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Delivered => "Delivered",
            StatusCategory::Pending => "Pending",
            StatusCategory::Cancelled => "Cancelled",
            StatusCategory::Undeliverable => "Undeliverable",
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts per [`StatusCategory`]. The counts always sum to the number of
/// deliverable plus undeliverable orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub delivered: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub undeliverable: usize,
}

impl StatusSummary {
    pub fn count(&self, category: StatusCategory) -> usize {
        match category {
            StatusCategory::Delivered => self.delivered,
            StatusCategory::Pending => self.pending,
            StatusCategory::Cancelled => self.cancelled,
            StatusCategory::Undeliverable => self.undeliverable,
        }
    }

    /// Category/count pairs in fixed chart order.
    pub fn entries(&self) -> [(StatusCategory, usize); 4] {
        StatusCategory::ALL.map(|category| (category, self.count(category)))
    }

    pub fn total(&self) -> usize {
        self.delivered + self.pending + self.cancelled + self.undeliverable
    }
}
