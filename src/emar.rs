//! Electronic Medication Administration Record tracking.
//!
//! For a selected client and calendar date the chart presents every
//! scheduled dose and lets a caregiver record an outcome per dose. The chart
//! lives only for the viewing session; nothing is persisted and a fresh
//! chart starts with every dose pending.

use std::collections::HashMap;
use std::fmt;

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Client, Medication};

/// Composite key for one scheduled dose: which medication, and which of its
/// parsed dose times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DoseKey {
    pub medication_id: String,
    pub dose_index: usize,
}

impl DoseKey {
    pub fn new(medication_id: impl Into<String>, dose_index: usize) -> Self {
        Self {
            medication_id: medication_id.into(),
            dose_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoseStatus {
    Pending,
    Administered,
    Skipped,
    Refused,
}

impl fmt::Display for DoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DoseStatus::Pending => "pending",
            DoseStatus::Administered => "administered",
            DoseStatus::Skipped => "skipped",
            DoseStatus::Refused => "refused",
        })
    }
}

/// Outcome a caregiver can record for a dose. Refusal always carries a
/// reason; there is no way to record one without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoseOutcome {
    Administered,
    Skipped,
    Refused(RefusalReason),
}

impl DoseOutcome {
    pub fn status(&self) -> DoseStatus {
        match self {
            DoseOutcome::Administered => DoseStatus::Administered,
            DoseOutcome::Skipped => DoseStatus::Skipped,
            DoseOutcome::Refused(_) => DoseStatus::Refused,
        }
    }
}

/// Fixed list of reasons a client may not take a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalReason {
    ClientRefusedMedication,
    ClientWasAsleep,
    ClientWasNotPresent,
    MedicationNotAvailable,
    ClientFeltUnwell,
    DoctorAdvisedToStop,
    Other,
}

impl RefusalReason {
    pub const ALL: [RefusalReason; 7] = [
        RefusalReason::ClientRefusedMedication,
        RefusalReason::ClientWasAsleep,
        RefusalReason::ClientWasNotPresent,
        RefusalReason::MedicationNotAvailable,
        RefusalReason::ClientFeltUnwell,
        RefusalReason::DoctorAdvisedToStop,
        RefusalReason::Other,
    ];
}

impl fmt::Display for RefusalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RefusalReason::ClientRefusedMedication => "Client refused medication",
            RefusalReason::ClientWasAsleep => "Client was asleep",
            RefusalReason::ClientWasNotPresent => "Client was not present",
            RefusalReason::MedicationNotAvailable => "Medication not available",
            RefusalReason::ClientFeltUnwell => "Client felt unwell",
            RefusalReason::DoctorAdvisedToStop => "Doctor advised to stop",
            RefusalReason::Other => "Other",
        })
    }
}

/// What was recorded for a dose. Absent entries are implicitly pending.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseRecord {
    pub status: DoseStatus,
    pub reason: Option<String>,
    pub recorded_at: String, // "HH:MM" local time
    pub notes: Option<String>,
}

/// A past administration record shown in the EMAR history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmarHistoryEntry {
    pub id: String,
    pub client_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub scheduled_time: String,
    pub status: DoseStatus,
    pub reason: Option<String>,
    pub carer_name: String,
    pub timestamp: String, // ISO datetime
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailySummary {
    pub administered: usize,
    pub pending: usize,
    pub missed: usize,
}

/// Split a medication's `time` field on commas and trim each token.
///
/// A field with no comma yields a one-element sequence containing the raw
/// (trimmed) string; an empty field yields a single empty token. This silent
/// fallback mirrors how the rota data is entered and is not an error.
pub fn parse_dose_times(medication: &Medication) -> Vec<String> {
    medication
        .time
        .split(',')
        .map(|t| t.trim().to_string())
        .collect()
}

fn parse_clock(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()
}

/// Whether the dose's scheduled clock time is earlier than `now`.
///
/// Date-agnostic by design: the comparison uses hours and minutes only, and
/// always against the current wall clock even when viewing another date.
/// Unparseable times are never overdue.
pub fn is_overdue(dose_time: &str, now: NaiveTime) -> bool {
    match parse_clock(dose_time) {
        Some(scheduled) => scheduled < now,
        None => false,
    }
}

/// Per-session dose outcome chart for one client and date.
#[derive(Debug, Clone, Default)]
pub struct MedicationChart {
    records: HashMap<DoseKey, DoseRecord>,
}

impl MedicationChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, key: &DoseKey) -> DoseStatus {
        self.records
            .get(key)
            .map(|r| r.status)
            .unwrap_or(DoseStatus::Pending)
    }

    pub fn record_for(&self, key: &DoseKey) -> Option<&DoseRecord> {
        self.records.get(key)
    }

    /// Record an outcome for a dose, stamped with the current local time.
    ///
    /// Last write wins: re-recording overwrites the previous outcome, reason
    /// and notes with no history kept.
    pub fn record(&mut self, key: DoseKey, outcome: DoseOutcome, notes: Option<String>) {
        self.record_at(key, outcome, notes, Local::now().time());
    }

    pub fn record_at(
        &mut self,
        key: DoseKey,
        outcome: DoseOutcome,
        notes: Option<String>,
        now: NaiveTime,
    ) {
        let reason = match &outcome {
            DoseOutcome::Administered => None,
            // Skips are a judgement call on the day, logged as such.
            DoseOutcome::Skipped => Some("Carer decision".to_string()),
            DoseOutcome::Refused(reason) => Some(reason.to_string()),
        };
        debug!(
            medication = %key.medication_id,
            dose = key.dose_index,
            status = %outcome.status(),
            "dose outcome recorded"
        );
        self.records.insert(
            key,
            DoseRecord {
                status: outcome.status(),
                reason,
                recorded_at: now.format("%H:%M").to_string(),
                notes,
            },
        );
    }

    /// Drop every recorded outcome, returning the chart to all-pending.
    /// Used when the selected client or date changes.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Tally every scheduled dose for the client into administered, pending
    /// and missed buckets. Administered doses always count as administered;
    /// anything else counts as missed once its time is overdue, else pending.
    pub fn daily_summary(&self, client: &Client, now: NaiveTime) -> DailySummary {
        let mut summary = DailySummary::default();
        for medication in &client.medications {
            for (index, time) in parse_dose_times(medication).iter().enumerate() {
                let key = DoseKey::new(medication.id.clone(), index);
                match self.status(&key) {
                    DoseStatus::Administered => summary.administered += 1,
                    _ if is_overdue(time, now) => summary.missed += 1,
                    _ => summary.pending += 1,
                }
            }
        }
        summary
    }
}
