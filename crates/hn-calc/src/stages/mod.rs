//! Pipeline stages.
//!
//! Each stage reads the sanitized request plus the outputs of the stages it
//! depends on, and overwrites only its own fields of the result. Stages are
//! listed in [`Stage::ORDER`], which is a topological order of the dependency
//! graph: running any subset in that order is always valid.

pub mod compliance;
pub mod envelope;
pub mod gains;
pub mod geometry;
pub mod heat_need;
pub mod targets;
pub mod thermal_bridges;
pub mod transfer;
pub mod ventilation;

use crate::model::CalculationRequest;
use crate::result::CalculationResult;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Geometry,
    Envelope,
    ThermalBridges,
    HeatTransfer,
    Ventilation,
    SolarGains,
    InternalGains,
    TotalGains,
    HeatNeed,
    Targets,
    Compliance,
}

impl Stage {
    pub const ORDER: [Stage; 11] = [
        Stage::Geometry,
        Stage::Envelope,
        Stage::ThermalBridges,
        Stage::HeatTransfer,
        Stage::Ventilation,
        Stage::SolarGains,
        Stage::InternalGains,
        Stage::TotalGains,
        Stage::HeatNeed,
        Stage::Targets,
        Stage::Compliance,
    ];

    /// Stages whose outputs this stage reads.
    pub fn upstream(self) -> &'static [Stage] {
        match self {
            Stage::Geometry | Stage::Envelope | Stage::SolarGains | Stage::InternalGains => &[],
            Stage::ThermalBridges => &[Stage::Envelope],
            Stage::HeatTransfer => &[Stage::Envelope, Stage::ThermalBridges],
            Stage::Ventilation => &[Stage::HeatTransfer],
            Stage::TotalGains => &[Stage::SolarGains, Stage::InternalGains],
            Stage::HeatNeed => &[
                Stage::Ventilation,
                Stage::SolarGains,
                Stage::InternalGains,
                Stage::TotalGains,
            ],
            Stage::Targets => &[Stage::Envelope],
            Stage::Compliance => &[Stage::HeatTransfer, Stage::HeatNeed, Stage::Targets],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Geometry => "geometry",
            Stage::Envelope => "envelope",
            Stage::ThermalBridges => "thermal_bridges",
            Stage::HeatTransfer => "heat_transfer",
            Stage::Ventilation => "ventilation",
            Stage::SolarGains => "solar_gains",
            Stage::InternalGains => "internal_gains",
            Stage::TotalGains => "total_gains",
            Stage::HeatNeed => "heat_need",
            Stage::Targets => "targets",
            Stage::Compliance => "compliance",
        }
    }

    pub fn run(self, request: &CalculationRequest, out: &mut CalculationResult) {
        match self {
            Stage::Geometry => geometry::run(request, out),
            Stage::Envelope => envelope::run(request, out),
            Stage::ThermalBridges => thermal_bridges::run(request, out),
            Stage::HeatTransfer => transfer::run(request, out),
            Stage::Ventilation => ventilation::run(request, out),
            Stage::SolarGains => gains::run_solar(request, out),
            Stage::InternalGains => gains::run_internal(request, out),
            Stage::TotalGains => gains::run_total(request, out),
            Stage::HeatNeed => heat_need::run(request, out),
            Stage::Targets => targets::run(request, out),
            Stage::Compliance => compliance::run(request, out),
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Small bitset of stages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StageSet(u16);

impl StageSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Self::of(&Stage::ORDER)
    }

    pub fn of(stages: &[Stage]) -> Self {
        stages.iter().fold(Self::empty(), |set, s| set.with(*s))
    }

    pub fn with(mut self, stage: Stage) -> Self {
        self.insert(stage);
        self
    }

    pub fn insert(&mut self, stage: Stage) {
        self.0 |= stage.bit();
    }

    pub fn contains(self, stage: Stage) -> bool {
        self.0 & stage.bit() != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// This set plus every stage that transitively reads from it.
    pub fn with_downstream(self) -> Self {
        // ORDER is topological, so one forward pass closes the set.
        Stage::ORDER.iter().fold(self, |set, stage| {
            if stage.upstream().iter().any(|u| set.contains(*u)) {
                set.with(*stage)
            } else {
                set
            }
        })
    }

    /// Members in pipeline order.
    pub fn iter(self) -> impl Iterator<Item = Stage> {
        Stage::ORDER.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for StageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Stage::name)).finish()
    }
}
