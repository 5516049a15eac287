//! Core coordinate utilities shared by the globe, markers and borders.

pub mod coordinates;
