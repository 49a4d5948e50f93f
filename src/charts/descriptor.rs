//! The static chart table.

use serde::Serialize;

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

/// Which statistics panel a descriptor feeds; selects the extraction mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Members,
    Finance,
    Events,
    Documents,
}

impl ChartId {
    /// DOM id of the target element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Members => "membersChart",
            Self::Finance => "financeChart",
            Self::Events => "eventsChart",
            Self::Documents => "documentsChart",
        }
    }
}

/// Chart.js chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDescriptor {
    pub id: ChartId,
    pub endpoint: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
}

pub const DASHBOARD_CHARTS: [ChartDescriptor; 4] = [
    ChartDescriptor {
        id: ChartId::Members,
        endpoint: "/api/stats/members",
        kind: ChartKind::Pie,
        title: "Statistiques des Membres",
    },
    ChartDescriptor {
        id: ChartId::Finance,
        endpoint: "/api/stats/finance",
        kind: ChartKind::Bar,
        title: "Statistiques Financières",
    },
    ChartDescriptor {
        id: ChartId::Events,
        endpoint: "/api/stats/events",
        kind: ChartKind::Bar,
        title: "Statistiques des Événements",
    },
    ChartDescriptor {
        id: ChartId::Documents,
        endpoint: "/api/stats/documents",
        kind: ChartKind::Bar,
        title: "Statistiques des Documents",
    },
];
