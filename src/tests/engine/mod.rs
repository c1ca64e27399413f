//! Reporter tests.
