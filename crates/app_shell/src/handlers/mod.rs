//! Workflows called by the presentation layer
//!
//! Every handler runs its guard first, so an unauthorized call never reaches
//! a service.

pub mod auth;
pub mod dashboard;
pub mod policies;
pub mod underwriters;
