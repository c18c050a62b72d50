//! Per-domain rules for the special maturity tier.
//!
//! Expert responses carry every job category of the special tier, so the
//! table rolls the minor ones up on this side. Cadre responses arrive already
//! rolled up by the backend and pass through untouched.

use std::borrow::Cow;

use crate::consolidate::{Additive, OTHER_CATEGORY, consolidate_into};
use crate::stats::JobCategoryStatistic;

/// Maturity tier whose categories get domain-specific treatment.
pub const SPECIAL_TIER: &str = "L2";

/// Categories listed individually in the expert certification table.
pub const EXPERT_CERT_KEEP: &[&str] = &["测试类", "软件类", "系统类", "研究类"];

/// Categories listed individually in the expert appointment table.
pub const EXPERT_APPOINTMENT_KEEP: &[&str] = &["软件类"];

/// Bucket for everything except software in the expert appointment table.
pub const NON_SOFTWARE_CATEGORY: &str = "非软件类";

/// The four flattened tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableDomain {
    ExpertCertification,
    ExpertAppointment,
    CadreCertification,
    CadreAppointment,
}

/// What to do with a tier's job categories before emitting rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierRollup {
    /// Emit every category as received.
    PassThrough,
    /// Keep `keep`, sum the rest into one `other_label` category.
    Consolidate {
        keep: &'static [&'static str],
        other_label: &'static str,
    },
}

impl TableDomain {
    /// Rollup policy for one tier of this table.
    pub fn rollup(self, maturity_level: &str) -> TierRollup {
        let special = maturity_level == SPECIAL_TIER;
        match self {
            TableDomain::ExpertCertification if special => TierRollup::Consolidate {
                keep: EXPERT_CERT_KEEP,
                other_label: OTHER_CATEGORY,
            },
            TableDomain::ExpertAppointment if special => TierRollup::Consolidate {
                keep: EXPERT_APPOINTMENT_KEEP,
                other_label: NON_SOFTWARE_CATEGORY,
            },
            TableDomain::ExpertCertification | TableDomain::ExpertAppointment => {
                TierRollup::PassThrough
            }
            TableDomain::CadreCertification | TableDomain::CadreAppointment => {
                TierRollup::PassThrough
            }
        }
    }
}

impl TierRollup {
    /// Apply the policy to one tier's categories.
    pub fn apply<M: Additive>(
        self,
        categories: &[JobCategoryStatistic<M>],
    ) -> Cow<'_, [JobCategoryStatistic<M>]> {
        match self {
            TierRollup::PassThrough => Cow::Borrowed(categories),
            TierRollup::Consolidate { keep, other_label } => {
                Cow::Owned(consolidate_into(categories, keep, other_label))
            }
        }
    }
}
