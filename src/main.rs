//! Export Instagram media and audience insights to spreadsheets.
//!
//! # Overview
//!
//! `reel-insights` pulls every reel of an Instagram Business or Creator account from the
//! Graph API, collects the per-reel insight metrics, and writes them to an Excel workbook
//! (with thumbnails) or a CSV file. It also exports the city breakdown of the account's
//! followers and engaged audience.
//!
//! # Quick Start
//!
//! ```bash
//! export IG_ACCESS_TOKEN=EAAG...
//! export IG_USER_ID=17841400000000000
//! reel-insights --paginate
//! ```
//!
//! # Options
//!
//! **Only the most recent page of media (25 items):**
//! ```bash
//! reel-insights
//! ```
//!
//! **CSV instead of Excel:**
//! ```bash
//! reel-insights --format csv
//! ```
//!
//! **Skip thumbnail downloads:**
//! ```bash
//! reel-insights --no-images
//! ```
//!
//! **Keep going when a single reel's insights cannot be fetched:**
//! ```bash
//! reel-insights --skip-failed-insights
//! ```
//!
//! # Configuration
//!
//! Settings are read from `reel-insights.toml` in the current directory, or from the file
//! given with `--config`. Generate the defaults with:
//!
//! ```bash
//! reel-insights --default-config reel-insights.toml
//! ```
//!
//! Exit codes:
//! - `0`: All exports were written
//! - `1`: A listing, insight, or export failure stopped the run

use reel_insights::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that talks to the real terminal.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
