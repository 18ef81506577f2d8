//! Rendering pipeline results as platform responses.

pub mod response;
