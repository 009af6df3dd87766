//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drawing;
pub mod mode;
pub mod route;
pub mod tracking;
pub mod viewport;
