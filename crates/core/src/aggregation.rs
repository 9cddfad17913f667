//! Grouped, score-ordered views over application records.
//!
//! Every view is built by [`group_sort_project`]: records are bucketed by one
//! field in first-seen order, each bucket is stable-sorted by score
//! descending, and each record is reduced to the two fields that are not the
//! grouping key. Pure domain logic, no store access.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::application::{ApplicationField, ApplicationRecord};

/// Groups keyed by applicant or college name, in first-seen order.
pub type Groups<T> = IndexMap<String, Vec<T>>;

/// Which view to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationMode {
    /// Every applicant with their applications.
    AllByApplicant,
    /// One applicant's applications.
    Applicant(String),
    /// Every college with its applicants.
    AllByCollege,
    /// One college's applicants.
    College(String),
}

/// An application as seen from the applicant's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollegeScore {
    pub college: String,
    pub score: f64,
}

impl CollegeScore {
    pub fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            college: record.college().to_string(),
            score: record.score(),
        }
    }
}

/// An application as seen from the college's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantScore {
    pub name: String,
    pub score: f64,
}

impl ApplicantScore {
    pub fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            name: record.name().to_string(),
            score: record.score(),
        }
    }
}

/// Output of [`aggregate`].
///
/// Serializes untagged: the map variants as a plain JSON object keyed by
/// group, the single variants as `{"name"|"college": ..., "applications": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Aggregation {
    ByApplicant(Groups<CollegeScore>),
    Applicant {
        name: String,
        applications: Vec<CollegeScore>,
    },
    ByCollege(Groups<ApplicantScore>),
    College {
        college: String,
        applications: Vec<ApplicantScore>,
    },
}

impl Aggregation {
    /// Number of groups (1 for the single-key views).
    pub fn group_count(&self) -> usize {
        match self {
            Aggregation::ByApplicant(groups) => groups.len(),
            Aggregation::ByCollege(groups) => groups.len(),
            Aggregation::Applicant { .. } | Aggregation::College { .. } => 1,
        }
    }
}

/// Bucket `records` by `key`, sort each bucket by score descending and
/// project each record with `project`.
///
/// The sort is stable, so equal scores keep their input order.
pub fn group_sort_project<'a, T>(
    records: impl IntoIterator<Item = &'a ApplicationRecord>,
    key: ApplicationField,
    project: impl Fn(&ApplicationRecord) -> T,
) -> Groups<T> {
    let mut buckets: IndexMap<&'a str, Vec<&'a ApplicationRecord>> = IndexMap::new();
    for record in records {
        buckets.entry(key.value_of(record)).or_default().push(record);
    }

    buckets
        .into_iter()
        .map(|(group, mut members)| {
            members.sort_by(|a, b| by_score_desc(a, b));
            let entries = members.into_iter().map(&project).collect();
            (group.to_string(), entries)
        })
        .collect()
}

fn by_score_desc(a: &ApplicationRecord, b: &ApplicationRecord) -> Ordering {
    b.score()
        .partial_cmp(&a.score())
        .unwrap_or(Ordering::Equal)
}

/// Build the view selected by `mode`.
///
/// Returns `None` when a single-key mode matches no records. The `All*`
/// modes never return `None`; an empty input yields an empty map.
pub fn aggregate(records: &[ApplicationRecord], mode: &AggregationMode) -> Option<Aggregation> {
    match mode {
        AggregationMode::AllByApplicant => Some(Aggregation::ByApplicant(group_sort_project(
            records,
            ApplicationField::Name,
            CollegeScore::from_record,
        ))),
        AggregationMode::Applicant(name) => {
            let matching = records.iter().filter(|r| r.name() == name);
            let mut groups = group_sort_project(matching, ApplicationField::Name, CollegeScore::from_record);
            let applications = groups.shift_remove(name.as_str())?;
            Some(Aggregation::Applicant {
                name: name.clone(),
                applications,
            })
        }
        AggregationMode::AllByCollege => Some(Aggregation::ByCollege(group_sort_project(
            records,
            ApplicationField::College,
            ApplicantScore::from_record,
        ))),
        AggregationMode::College(college) => {
            let matching = records.iter().filter(|r| r.college() == college);
            let mut groups =
                group_sort_project(matching, ApplicationField::College, ApplicantScore::from_record);
            let applications = groups.shift_remove(college.as_str())?;
            Some(Aggregation::College {
                college: college.clone(),
                applications,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
