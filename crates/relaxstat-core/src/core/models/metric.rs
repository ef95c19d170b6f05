use phf::{Map, phf_map};
use std::fmt;

/// A numeric quantity tracked for every relaxed model.
///
/// The first five metrics are scraped from the relax log; [`Metric::Custom`] is the
/// derived binding energy computed from the score and the two unbound-state scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Score,
    DdgBind,
    InteractionEnergy,
    UnboundRna,
    UnboundProtein,
    Custom,
}

#[rustfmt::skip]
static COLUMN_LOOKUP: Map<&'static str, Metric> = phf_map! {
    "Score"        => Metric::Score,
    "ddG_bind"     => Metric::DdgBind,
    "IntE"         => Metric::InteractionEnergy,
    "Unbound_RNA"  => Metric::UnboundRna,
    "Unbound_Prot" => Metric::UnboundProtein,
    "ΔG_custom"    => Metric::Custom,
};

impl Metric {
    /// Metrics recorded in a relax log, in the order their markers are tested.
    pub const LOGGED: [Metric; 5] = [
        Metric::Score,
        Metric::DdgBind,
        Metric::InteractionEnergy,
        Metric::UnboundRna,
        Metric::UnboundProtein,
    ];

    /// Column order of the detail block of a summary table.
    pub const TABLE_ORDER: [Metric; 6] = [
        Metric::Score,
        Metric::DdgBind,
        Metric::InteractionEnergy,
        Metric::UnboundRna,
        Metric::UnboundProtein,
        Metric::Custom,
    ];

    /// Row order of the statistics block of a summary table.
    pub const STATISTICS_ORDER: [Metric; 6] = [
        Metric::Score,
        Metric::DdgBind,
        Metric::InteractionEnergy,
        Metric::UnboundProtein,
        Metric::UnboundRna,
        Metric::Custom,
    ];

    /// Header used for this metric in the detail block of a summary table.
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Score => "Score",
            Metric::DdgBind => "ddG_bind",
            Metric::InteractionEnergy => "IntE",
            Metric::UnboundRna => "Unbound_RNA",
            Metric::UnboundProtein => "Unbound_Prot",
            Metric::Custom => "ΔG_custom",
        }
    }

    /// Human-readable name used in the statistics block.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Score => "Score",
            Metric::DdgBind => "ddG_bind",
            Metric::InteractionEnergy => "Interaction energy",
            Metric::UnboundRna => "Unbound RNA",
            Metric::UnboundProtein => "Unbound protein",
            Metric::Custom => "ΔG_custom",
        }
    }

    /// Phrase identifying the log line that carries this metric, if it is logged.
    pub fn log_marker(self) -> Option<&'static str> {
        match self {
            Metric::Score => Some("Score of the complex"),
            Metric::DdgBind => Some("ddG_bind"),
            Metric::InteractionEnergy => Some("Interaction energy of complex"),
            Metric::UnboundRna => Some("Unbound RNA score"),
            Metric::UnboundProtein => Some("Unbound protein score"),
            Metric::Custom => None,
        }
    }

    /// Looks up a metric by its summary-table column header.
    pub fn from_column_name(name: &str) -> Option<Self> {
        COLUMN_LOOKUP.get(name.trim()).copied()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
