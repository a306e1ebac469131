//! Unit tests for client type identification.
