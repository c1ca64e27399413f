//! Error type tests.

mod aggregate_tests;
mod policy_tests;
