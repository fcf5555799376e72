mod exists;
pub mod store;

use std::sync::OnceLock;

use diesel::{prelude::*, MysqlConnection};
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};

pub use self::store::HospitalStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    Mysql,
}

impl Driver {
    pub fn for_descriptor(descriptor: &str) -> Option<Self> {
        match descriptor.split_once("://") {
            Some(("mysql", _)) => Some(Driver::Mysql),
            _ => None,
        }
    }
}

static DRIVER: OnceLock<Driver> = OnceLock::new();

/// Resolves the driver for `descriptor` and records it process-wide.
///
/// Only the first successful call registers; later calls return the same driver.
pub fn register_driver(descriptor: &str) -> ReportResult<Driver> {
    let driver =
        Driver::for_descriptor(descriptor).ok_or_else(|| ReportError::DriverUnavailable {
            descriptor: descriptor.to_string(),
        })?;

    Ok(*DRIVER.get_or_init(|| {
        info!(?driver, "database driver registered");
        driver
    }))
}

/// One open connection plus a verified statement handle.
///
/// The connection is released when the session is dropped.
pub struct Session {
    conn: MysqlConnection,
}

impl Session {
    pub fn open(connection_url: &str) -> ReportResult<Self> {
        info!("building a connection");
        let conn =
            MysqlConnection::establish(connection_url).map_err(ReportError::ConnectionFailed)?;
        info!("connection is successful");

        diesel::sql_query("SELECT 1")
            .execute(&conn)
            .map_err(ReportError::StatementCreationFailed)?;
        debug!("statement ready");

        Ok(Self { conn })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!("statement closed");
        info!("connection closed");
    }
}
