//! Filter configuration and the pure entity predicates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{AssetClass, AssetFlow, AssetSignal, InstantRange, RegionPreset, RiskLevel};

/// Visibility configuration for the filtered view.
///
/// `region` only drives camera framing in the rendering layer; the entity
/// predicates never consult it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub asset_classes: HashSet<AssetClass>,
    pub region: RegionPreset,
    pub risk_min: RiskLevel,
    pub date_window: InstantRange,
    pub show_flows: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            asset_classes: AssetClass::ALL.into_iter().collect(),
            region: RegionPreset::Global,
            risk_min: RiskLevel::Low,
            date_window: InstantRange::unbounded(),
            show_flows: true,
        }
    }
}

impl FilterConfig {
    pub fn with_asset_classes(mut self, classes: impl IntoIterator<Item = AssetClass>) -> Self {
        self.asset_classes = classes.into_iter().collect();
        self
    }

    pub fn with_region(mut self, region: RegionPreset) -> Self {
        self.region = region;
        self
    }

    pub fn with_risk_min(mut self, risk_min: RiskLevel) -> Self {
        self.risk_min = risk_min;
        self
    }

    pub fn with_date_window(mut self, date_window: InstantRange) -> Self {
        self.date_window = date_window;
        self
    }

    pub fn with_show_flows(mut self, show_flows: bool) -> Self {
        self.show_flows = show_flows;
        self
    }

    /// True iff the signal's class is selected, its risk meets the
    /// inclusive minimum, and its timestamp falls inside the window.
    pub fn matches_signal(&self, signal: &AssetSignal) -> bool {
        self.asset_classes.contains(&signal.asset_class)
            && signal.risk >= self.risk_min
            && self.date_window.contains(signal.ts)
    }

    /// True iff flows are shown at all, the flow's class is selected, and
    /// its timestamp falls inside the window.
    pub fn matches_flow(&self, flow: &AssetFlow) -> bool {
        self.show_flows
            && self.asset_classes.contains(&flow.class_tag)
            && self.date_window.contains(flow.ts)
    }
}
