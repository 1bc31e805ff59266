// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset decoding from the host JSON payload.
//!
//! The payload shape is `{ "states": [ { "state": .., "count": .., "male_count": .. } ] }`.
//! Unknown fields are ignored.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Deserialize;

use crate::{CategoryRecord, Dataset};

/// Errors produced while decoding a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The input is not valid JSON (or ends early).
    #[error("malformed dataset JSON at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Decoder message.
        message: String,
    },
    /// The input is valid JSON but does not have the expected shape.
    #[error("unexpected dataset shape at line {line}, column {column}: {message}")]
    Shape {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Decoder message.
        message: String,
    },
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = err.to_string();
        if err.is_data() {
            Self::Shape {
                line,
                column,
                message,
            }
        } else {
            Self::Syntax {
                line,
                column,
                message,
            }
        }
    }
}

#[derive(Deserialize)]
struct StatesPayload {
    states: Vec<StateRow>,
}

#[derive(Deserialize)]
struct StateRow {
    state: String,
    count: f64,
    male_count: f64,
}

impl From<StateRow> for CategoryRecord {
    fn from(row: StateRow) -> Self {
        Self::new(row.state, row.count, row.male_count)
    }
}

impl Dataset {
    /// Decodes a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Decodes a dataset from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, DatasetError> {
        let payload: StatesPayload = serde_json::from_slice(json)?;
        let dataset: Self = payload.states.into_iter().map(CategoryRecord::from).collect();
        tracing::debug!(records = dataset.len(), "decoded dataset");
        Ok(dataset)
    }
}
