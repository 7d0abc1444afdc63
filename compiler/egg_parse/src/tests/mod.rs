//! Parser tests.
//!
//! - `parser`: grammar rules, error kinds and spans.
//! - `roundtrip`: printing a tree and re-parsing it gives the same tree.
