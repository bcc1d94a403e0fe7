//! Instagram Graph API access
//!
//! This module is responsible for every request the tool makes against the graph API.
//! A single [`GraphClient`] performs the HTTP GETs and classifies responses; the fetchers
//! built on top of it each own one endpoint:
//!
//! - [`fetch_media`]: the cursor-paginated media listing of an account
//! - [`fetch_insights`]: the per-media insight metrics
//! - [`fetch_demographics`]: the city breakdown of followers or engaged audience
//!
//! All requests are issued one at a time. Access tokens travel in the query string as the
//! API requires, so every URL is passed through [`redact`] before it reaches a log line or
//! an error message.

mod client;
mod demographics;
mod insights;
mod media;

pub use client::{DEFAULT_BASE_URL, GraphClient, redact};
pub use demographics::{CityBreakdown, DemographicMetric, fetch_demographics};
pub use insights::{INSIGHT_METRICS, InsightRecord, InsightSource, fetch_insights};
pub use media::{DEFAULT_PAGE_SIZE, MEDIA_FIELDS, MediaItem, MediaType, fetch_media};
