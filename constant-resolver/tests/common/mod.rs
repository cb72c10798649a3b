//! Shared fixture types for resolver tests.

#![allow(dead_code)]

use constant_resolver::{TypeRegistry, constants};

#[derive(Debug, Default)]
pub struct UniqueValueConstants;

constants! {
    UniqueValueConstants {
        DUMMY_CONSTANT_STRING: &'static str = "string value",
        DUMMY_CONSTANT_INTEGER: i64 = 100,
    }
}

#[derive(Debug, Default)]
pub struct NonUniqueValueConstants;

constants! {
    NonUniqueValueConstants {
        DUMMY_CONSTANT_STRING: &'static str = "string value",
        DUMMY_CONSTANT_STRING_TWO: &'static str = "string value",
        DUMMY_CONSTANT_INTEGER: i64 = 100,
        DUMMY_CONSTANT_INTEGER_TWO: i64 = 100,
    }
}

#[derive(Debug, Default)]
pub struct BaseStatus;

constants! {
    BaseStatus {
        INACTIVE: i64 = 0,
        ACTIVE: i64 = 1,
    }
}

#[derive(Debug, Default)]
pub struct ExtendedStatus;

constants! {
    ExtendedStatus: BaseStatus {
        ENABLED: i64 = 1,
        SUSPENDED: i64 = 2,
    }
}

/// A subset of libzip's archive flags and error codes.
#[derive(Debug, Default)]
pub struct ZipArchive;

constants! {
    ZipArchive {
        CREATE: i64 = 1,
        EXCL: i64 = 2,
        CHECKCONS: i64 = 4,
        OVERWRITE: i64 = 8,
        ER_OK: i64 = 0,
        ER_MULTIDISK: i64 = 1,
        ER_RENAME: i64 = 2,
        ER_CLOSE: i64 = 3,
        ER_NOENT: i64 = 9,
        ER_EXISTS: i64 = 10,
        ER_DELETED: i64 = 23,
    }
}

/// Registry with every fixture type, plus `zip::ZipArchive` as an alias.
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register::<UniqueValueConstants>()
        .register::<NonUniqueValueConstants>()
        .register::<BaseStatus>()
        .register::<ExtendedStatus>()
        .register::<ZipArchive>()
        .register_as::<ZipArchive>("zip::ZipArchive");
    registry
}
