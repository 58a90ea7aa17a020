//! Calendar partition expansion.
//!
//! Remote sensor data is stored one object prefix per (location, year,
//! month). Expansion turns a set of location IDs and an inclusive month
//! range into the ordered list of partitions to fetch: locations in input
//! order, months chronological within each location.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::template;

/// Path template for one remote partition, relative to the source base path.
pub const DATA_FILE_PATH_TEMPLATE: &str =
    "locationid={{ location_id }}/year={{ year }}/month={{ month }}/*";

/// A calendar month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The next calendar month; December rolls the year over.
    pub fn succ(self) -> Month {
        if self.month == 12 {
            Month { year: self.year + 1, month: 1 }
        } else {
            Month { year: self.year, month: self.month + 1 }
        }
    }
}

impl FromStr for Month {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        // rejects month 0, month 13, etc.
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok(Month { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// One (location, year, month) unit of remotely stored source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub location_id: String,
    pub year: i32,
    pub month: u32,
}

impl Partition {
    /// Render this partition's object path relative to the source base path.
    ///
    /// The month is always zero-padded to two digits, matching the remote
    /// layout (`month=03`, not `month=3`).
    pub fn relative_path(&self, path_template: &str) -> Result<String, CoreError> {
        template::render(
            path_template,
            &[
                ("location_id", self.location_id.as_str()),
                ("year", &self.year.to_string()),
                ("month", &format!("{:02}", self.month)),
            ],
        )
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}-{:02}", self.location_id, self.year, self.month)
    }
}

/// Expand locations and an inclusive month range into ordered partitions.
///
/// Locations are visited in input order; within a location, months run
/// chronologically from `start` to `end` inclusive. A start later than end
/// contributes zero partitions for every location and is not an error.
pub fn expand(location_ids: &[String], start: Month, end: Month) -> Vec<Partition> {
    let mut partitions = Vec::new();
    for location_id in location_ids {
        let mut current = start;
        while current <= end {
            partitions.push(Partition {
                location_id: location_id.clone(),
                year: current.year,
                month: current.month,
            });
            current = current.succ();
        }
    }
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    #[test]
    fn parses_valid_month() {
        assert_eq!(month("2024-01"), Month { year: 2024, month: 1 });
        assert_eq!(month("1999-12"), Month { year: 1999, month: 12 });
    }

    #[test]
    fn rejects_malformed_months() {
        for bad in ["2024", "2024-13", "2024-00", "24-01", "2024-1", "garbage", "2024-xx"] {
            assert!(bad.parse::<Month>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(month("2023-12").succ(), month("2024-01"));
        assert_eq!(month("2024-06").succ(), month("2024-07"));
    }

    #[test]
    fn expands_locations_in_order_months_chronologically() {
        let ids = vec!["A".to_string(), "B".to_string()];
        let partitions = expand(&ids, month("2024-01"), month("2024-02"));

        let rendered: Vec<String> = partitions.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["A/2024-01", "A/2024-02", "B/2024-01", "B/2024-02"]);
    }

    #[test]
    fn inclusive_count_per_location() {
        let ids = vec!["X".to_string()];
        // 2023-11 .. 2024-02 inclusive = 4 months, crossing a year boundary
        let partitions = expand(&ids, month("2023-11"), month("2024-02"));
        assert_eq!(partitions.len(), 4);
        assert_eq!(partitions[0].to_string(), "X/2023-11");
        assert_eq!(partitions[3].to_string(), "X/2024-02");
    }

    #[test]
    fn start_after_end_yields_zero_partitions() {
        let ids = vec!["A".to_string(), "B".to_string()];
        let partitions = expand(&ids, month("2024-05"), month("2024-01"));
        assert!(partitions.is_empty());
    }

    #[test]
    fn single_month_range_yields_one_per_location() {
        let ids = vec!["A".to_string()];
        let partitions = expand(&ids, month("2024-07"), month("2024-07"));
        assert_eq!(partitions.len(), 1);
    }

    #[test]
    fn relative_path_zero_pads_month() {
        let p = Partition { location_id: "225719".to_string(), year: 2024, month: 3 };
        let path = p.relative_path(DATA_FILE_PATH_TEMPLATE).unwrap();
        assert_eq!(path, "locationid=225719/year=2024/month=03/*");
    }
}
