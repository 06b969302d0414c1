//! Static timezone catalog.
//!
//! A fixed, process-lifetime table mapping IANA zone identifiers to display
//! metadata (label, region group, UTC offset label). Loaded once, never
//! mutated. The catalog backs the timezone selector in every front end and
//! the `/api/timezones` endpoints.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use shared::{RegionGroup, TimezoneOption};

/// One selectable timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimezoneEntry {
    /// IANA zone name, e.g. "Asia/Tokyo"
    pub id: &'static str,
    /// Display label shown in the selector
    pub label: &'static str,
    /// Geographic bucket for grouped listings
    pub group: RegionGroup,
    /// Offset label; DST zones show both offsets, e.g. "UTC+1/+2"
    pub utc_offset: &'static str,
}

impl TimezoneEntry {
    /// Convert to the DTO form used across the API boundary.
    pub fn to_option(&self) -> TimezoneOption {
        TimezoneOption {
            id: self.id.to_string(),
            label: self.label.to_string(),
            group: self.group,
            utc_offset: self.utc_offset.to_string(),
        }
    }
}

use RegionGroup::{Africa, Asia, Europe, NorthAmerica, Oceania, SouthAmerica};

static ENTRIES: &[TimezoneEntry] = &[
    // Asia
    TimezoneEntry { id: "Asia/Shanghai", label: "China Standard Time (Beijing)", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Tokyo", label: "Japan Standard Time (Tokyo)", group: Asia, utc_offset: "UTC+9" },
    TimezoneEntry { id: "Asia/Seoul", label: "Korea Standard Time (Seoul)", group: Asia, utc_offset: "UTC+9" },
    TimezoneEntry { id: "Asia/Hong_Kong", label: "Hong Kong Time", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Taipei", label: "Taipei Time", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Singapore", label: "Singapore Time", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Bangkok", label: "Indochina Time (Bangkok)", group: Asia, utc_offset: "UTC+7" },
    TimezoneEntry { id: "Asia/Jakarta", label: "Western Indonesia Time (Jakarta)", group: Asia, utc_offset: "UTC+7" },
    TimezoneEntry { id: "Asia/Manila", label: "Philippine Time (Manila)", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Kuala_Lumpur", label: "Malaysia Time (Kuala Lumpur)", group: Asia, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Asia/Ho_Chi_Minh", label: "Vietnam Time (Ho Chi Minh City)", group: Asia, utc_offset: "UTC+7" },
    TimezoneEntry { id: "Asia/Kolkata", label: "India Standard Time (Kolkata)", group: Asia, utc_offset: "UTC+5:30" },
    TimezoneEntry { id: "Asia/Karachi", label: "Pakistan Time (Karachi)", group: Asia, utc_offset: "UTC+5" },
    TimezoneEntry { id: "Asia/Dubai", label: "Gulf Standard Time (Dubai)", group: Asia, utc_offset: "UTC+4" },
    TimezoneEntry { id: "Asia/Tehran", label: "Iran Time (Tehran)", group: Asia, utc_offset: "UTC+3:30" },
    TimezoneEntry { id: "Asia/Riyadh", label: "Arabia Standard Time (Riyadh)", group: Asia, utc_offset: "UTC+3" },
    TimezoneEntry { id: "Asia/Jerusalem", label: "Israel Time (Jerusalem)", group: Asia, utc_offset: "UTC+2" },
    // Europe
    TimezoneEntry { id: "Europe/London", label: "Greenwich Mean Time (London)", group: Europe, utc_offset: "UTC+0/+1" },
    TimezoneEntry { id: "Europe/Paris", label: "Central European Time (Paris)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Berlin", label: "Central European Time (Berlin)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Rome", label: "Central European Time (Rome)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Madrid", label: "Central European Time (Madrid)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Amsterdam", label: "Central European Time (Amsterdam)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Brussels", label: "Central European Time (Brussels)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Vienna", label: "Central European Time (Vienna)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Zurich", label: "Central European Time (Zurich)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Stockholm", label: "Central European Time (Stockholm)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Oslo", label: "Central European Time (Oslo)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Copenhagen", label: "Central European Time (Copenhagen)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Helsinki", label: "Eastern European Time (Helsinki)", group: Europe, utc_offset: "UTC+2/+3" },
    TimezoneEntry { id: "Europe/Warsaw", label: "Central European Time (Warsaw)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Prague", label: "Central European Time (Prague)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Budapest", label: "Central European Time (Budapest)", group: Europe, utc_offset: "UTC+1/+2" },
    TimezoneEntry { id: "Europe/Athens", label: "Eastern European Time (Athens)", group: Europe, utc_offset: "UTC+2/+3" },
    TimezoneEntry { id: "Europe/Istanbul", label: "Turkey Time (Istanbul)", group: Europe, utc_offset: "UTC+3" },
    TimezoneEntry { id: "Europe/Moscow", label: "Moscow Time", group: Europe, utc_offset: "UTC+3" },
    // North America
    TimezoneEntry { id: "America/New_York", label: "US Eastern Time (New York)", group: NorthAmerica, utc_offset: "UTC-5/-4" },
    TimezoneEntry { id: "America/Chicago", label: "US Central Time (Chicago)", group: NorthAmerica, utc_offset: "UTC-6/-5" },
    TimezoneEntry { id: "America/Denver", label: "US Mountain Time (Denver)", group: NorthAmerica, utc_offset: "UTC-7/-6" },
    TimezoneEntry { id: "America/Los_Angeles", label: "US Pacific Time (Los Angeles)", group: NorthAmerica, utc_offset: "UTC-8/-7" },
    TimezoneEntry { id: "America/Anchorage", label: "Alaska Time (Anchorage)", group: NorthAmerica, utc_offset: "UTC-9/-8" },
    TimezoneEntry { id: "Pacific/Honolulu", label: "Hawaii Time (Honolulu)", group: NorthAmerica, utc_offset: "UTC-10" },
    TimezoneEntry { id: "America/Toronto", label: "Canada Eastern Time (Toronto)", group: NorthAmerica, utc_offset: "UTC-5/-4" },
    TimezoneEntry { id: "America/Vancouver", label: "Canada Pacific Time (Vancouver)", group: NorthAmerica, utc_offset: "UTC-8/-7" },
    TimezoneEntry { id: "America/Montreal", label: "Canada Eastern Time (Montreal)", group: NorthAmerica, utc_offset: "UTC-5/-4" },
    TimezoneEntry { id: "America/Mexico_City", label: "Mexico Central Time (Mexico City)", group: NorthAmerica, utc_offset: "UTC-6/-5" },
    // South America
    TimezoneEntry { id: "America/Sao_Paulo", label: "Brazil Time (Sao Paulo)", group: SouthAmerica, utc_offset: "UTC-3/-2" },
    TimezoneEntry { id: "America/Argentina/Buenos_Aires", label: "Argentina Time (Buenos Aires)", group: SouthAmerica, utc_offset: "UTC-3" },
    TimezoneEntry { id: "America/Santiago", label: "Chile Time (Santiago)", group: SouthAmerica, utc_offset: "UTC-4/-3" },
    TimezoneEntry { id: "America/Lima", label: "Peru Time (Lima)", group: SouthAmerica, utc_offset: "UTC-5" },
    TimezoneEntry { id: "America/Bogota", label: "Colombia Time (Bogota)", group: SouthAmerica, utc_offset: "UTC-5" },
    TimezoneEntry { id: "America/Caracas", label: "Venezuela Time (Caracas)", group: SouthAmerica, utc_offset: "UTC-4" },
    // Oceania
    TimezoneEntry { id: "Australia/Sydney", label: "Australian Eastern Time (Sydney)", group: Oceania, utc_offset: "UTC+10/+11" },
    TimezoneEntry { id: "Australia/Melbourne", label: "Australian Eastern Time (Melbourne)", group: Oceania, utc_offset: "UTC+10/+11" },
    TimezoneEntry { id: "Australia/Brisbane", label: "Australian Eastern Standard Time (Brisbane)", group: Oceania, utc_offset: "UTC+10" },
    TimezoneEntry { id: "Australia/Perth", label: "Australian Western Time (Perth)", group: Oceania, utc_offset: "UTC+8" },
    TimezoneEntry { id: "Australia/Adelaide", label: "Australian Central Time (Adelaide)", group: Oceania, utc_offset: "UTC+9:30/+10:30" },
    TimezoneEntry { id: "Pacific/Auckland", label: "New Zealand Time (Auckland)", group: Oceania, utc_offset: "UTC+12/+13" },
    TimezoneEntry { id: "Pacific/Fiji", label: "Fiji Time", group: Oceania, utc_offset: "UTC+12/+13" },
    // Africa
    TimezoneEntry { id: "Africa/Cairo", label: "Egypt Time (Cairo)", group: Africa, utc_offset: "UTC+2" },
    TimezoneEntry { id: "Africa/Johannesburg", label: "South Africa Time (Johannesburg)", group: Africa, utc_offset: "UTC+2" },
    TimezoneEntry { id: "Africa/Lagos", label: "West Africa Time (Lagos)", group: Africa, utc_offset: "UTC+1" },
    TimezoneEntry { id: "Africa/Nairobi", label: "East Africa Time (Nairobi)", group: Africa, utc_offset: "UTC+3" },
    TimezoneEntry { id: "Africa/Casablanca", label: "Morocco Time (Casablanca)", group: Africa, utc_offset: "UTC+0/+1" },
];

static BY_ID: Lazy<HashMap<&'static str, &'static TimezoneEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.id, entry)).collect());

/// Read-only queries over the static timezone table.
#[derive(Clone)]
pub struct TimezoneCatalog;

impl TimezoneCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Every catalog entry, in table order.
    pub fn entries(&self) -> &'static [TimezoneEntry] {
        ENTRIES
    }

    /// Find an entry by its exact IANA identifier.
    pub fn lookup(&self, id: &str) -> Option<&'static TimezoneEntry> {
        BY_ID.get(id).copied()
    }

    /// Entries bucketed by region, in the fixed region display order.
    pub fn grouped_by_region(&self) -> Vec<(RegionGroup, Vec<&'static TimezoneEntry>)> {
        RegionGroup::ALL
            .iter()
            .map(|group| {
                let members = ENTRIES.iter().filter(|entry| entry.group == *group).collect();
                (*group, members)
            })
            .collect()
    }

    /// Case-insensitive substring search over label, identifier, and offset.
    ///
    /// An empty query matches everything, which lets the selector reuse this
    /// for its unfiltered listing.
    pub fn search(&self, query: &str) -> Vec<&'static TimezoneEntry> {
        let needle = query.trim().to_lowercase();
        ENTRIES
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.label.to_lowercase().contains(&needle)
                    || entry.id.to_lowercase().contains(&needle)
                    || entry.utc_offset.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
