//! Unit test modules.

mod calendar_test;
mod dashboard_test;
mod zones_test;
