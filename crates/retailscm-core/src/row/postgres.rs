// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`Row`] for PostgreSQL result rows.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{Decode, Postgres, Row as _, Type, postgres::PgRow};

use super::Row;
use crate::{error::Error, resolved::Resolved};

fn read<'r, T>(row: &'r PgRow, column: &str) -> Resolved<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>
{
    match row.try_get::<Option<T>, _>(column) {
        Ok(Some(value)) => Resolved::Value(value),
        Ok(None) | Err(sqlx::Error::ColumnNotFound(_)) => Resolved::Absent,
        Err(err) => Resolved::Failed(Error::column(column, err))
    }
}

impl Row for PgRow {
    fn get_string(&self, column: &str) -> Resolved<String> {
        read(self, column)
    }

    fn get_i32(&self, column: &str) -> Resolved<i32> {
        read(self, column)
    }

    fn get_i64(&self, column: &str) -> Resolved<i64> {
        read(self, column)
    }

    fn get_f64(&self, column: &str) -> Resolved<f64> {
        read(self, column)
    }

    fn get_bool(&self, column: &str) -> Resolved<bool> {
        read(self, column)
    }

    fn get_datetime(&self, column: &str) -> Resolved<NaiveDateTime> {
        read(self, column)
    }

    fn get_date(&self, column: &str) -> Resolved<NaiveDate> {
        read(self, column)
    }
}
