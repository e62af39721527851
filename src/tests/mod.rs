//! Cross-module test suites: field arithmetic vectors, group law checks
//! and encoding round trips.

mod field;
