use std::collections::BTreeMap;

use crate::record::Record;

/// Bucket label for records whose `created_at` is absent or too short to
/// carry a year.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Bucket records by the four-digit year prefix of `created_at`.
///
/// Buckets come back ordered year-descending, with the [`UNKNOWN_YEAR`]
/// bucket (if any) last. Within a bucket, records keep their input order --
/// which is `created_at` descending when the input came straight from the
/// record store.
pub fn group_by_year<'a, R: Record>(records: &'a [R]) -> Vec<(String, Vec<&'a R>)> {
    let mut years: BTreeMap<&str, Vec<&'a R>> = BTreeMap::new();
    let mut unknown: Vec<&'a R> = Vec::new();

    for record in records {
        match record.created_at().year() {
            Some(year) => years.entry(year).or_default().push(record),
            None => unknown.push(record),
        }
    }

    let mut buckets: Vec<(String, Vec<&'a R>)> = years
        .into_iter()
        .rev()
        .map(|(year, bucket)| (year.to_string(), bucket))
        .collect();
    if !unknown.is_empty() {
        buckets.push((UNKNOWN_YEAR.to_string(), unknown));
    }
    buckets
}
