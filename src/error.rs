//! Typed failures raised while fetching, aggregating, and exporting.
//!
//! Fetch, insight, and export errors are fatal to a run unless the insight policy says
//! otherwise. Image errors are always recovered by the exporter.

use camino::Utf8PathBuf;
use core::fmt::{Display, Formatter};
use reqwest::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

/// Why a single HTTP request against the graph API (or an image host) failed.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("request could not be completed")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(StatusCode),

    #[error("response body is not valid JSON for the expected shape")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL")]
    Url(#[from] url::ParseError),
}

/// A listing page or account-level request failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} must not be empty")]
    MissingArgument(&'static str),

    #[error("fetching {resource}")]
    Request {
        resource: String,
        #[source]
        source: RequestFailure,
    },
}

/// The insights request for one media item failed.
#[derive(Debug, Error)]
#[error("fetching insights for media '{media_id}'")]
pub struct InsightError {
    pub media_id: String,
    #[source]
    pub source: RequestFailure,
}

/// Writing an export file failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing '{path}'")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing CSV to '{path}'")]
    Csv {
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing workbook to '{path}'")]
    Xlsx {
        path: Utf8PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// A thumbnail could not be placed in the workbook.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("downloading thumbnail '{url}'")]
    Download {
        url: String,
        #[source]
        source: RequestFailure,
    },

    #[error("decoding thumbnail '{url}'")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("embedding thumbnail '{url}'")]
    Embed {
        url: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Displays an error followed by each of its causes, separated by `: `.
#[derive(Debug)]
pub struct Chain<'a>(pub &'a dyn StdError);

impl Display for Chain<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
