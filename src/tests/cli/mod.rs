//! CLI helper tests.

mod parse_tests;
