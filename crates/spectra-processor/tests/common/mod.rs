//! Recording table reader shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use spectra_common::{CellValue, Column, FilterClause, ReadError, Table, TableReader};
use test_utils::wkb_point;

/// Arguments of one `read_table` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadCall {
    pub location: String,
    pub columns: Option<Vec<String>>,
    pub filters: Option<Vec<FilterClause>>,
}

pub enum Reply {
    Table(Table),
    NotFound(String),
    Empty(String),
    Other(String),
}

/// Serves a fixed table, applying projection like a real reader would,
/// and records every call.
pub struct StubReader {
    reply: Reply,
    calls: Mutex<Vec<ReadCall>>,
}

impl StubReader {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn serving(table: Table) -> Self {
        Self::new(Reply::Table(table))
    }

    pub fn calls(&self) -> Vec<ReadCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableReader for StubReader {
    async fn read_table(
        &self,
        location: &str,
        columns: Option<&[String]>,
        filters: Option<&[FilterClause]>,
    ) -> Result<Table, ReadError> {
        self.calls.lock().unwrap().push(ReadCall {
            location: location.to_string(),
            columns: columns.map(|c| c.to_vec()),
            filters: filters.map(|f| f.to_vec()),
        });

        match &self.reply {
            Reply::Table(table) => match columns {
                None => Ok(table.clone()),
                Some(names) => {
                    let projected = names
                        .iter()
                        .map(|name| {
                            table
                                .column(name)
                                .map(|values| Column::new(name.clone(), values.to_vec()))
                                .ok_or_else(|| {
                                    ReadError::Other(format!("No match for column: {}", name))
                                })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Table::try_from_columns(projected).map_err(|e| ReadError::Other(e.to_string()))
                }
            },
            Reply::NotFound(msg) => Err(ReadError::NotFound(msg.clone())),
            Reply::Empty(msg) => Err(ReadError::Empty(msg.clone())),
            Reply::Other(msg) => Err(ReadError::Other(msg.clone())),
        }
    }
}

/// Station rows with a duplicate last row and a WKB geometry column.
pub fn spectra_table() -> Table {
    let stations = ["00N000E", "00N000E", "10N010E", "00N000E"];
    let members = [0i64, 1, 0, 0];
    let coords = [(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (0.0, 0.0)];

    Table::try_from_columns(vec![
        Column::new(
            "station_name",
            stations.iter().map(|s| CellValue::from(*s)).collect(),
        ),
        Column::new("member", members.iter().map(|m| CellValue::from(*m)).collect()),
        Column::new(
            "geometry",
            coords
                .iter()
                .map(|(x, y)| CellValue::Binary(wkb_point(*x, *y)))
                .collect(),
        ),
    ])
    .unwrap()
}

/// The same rows without geometry.
pub fn attribute_table() -> Table {
    let mut table = spectra_table();
    table.take_column("geometry");
    table
}
