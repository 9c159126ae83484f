//! Movement domain: system modules for locomotion updates.

#[cfg(feature = "dev-tools")]
pub(crate) mod gizmos;
pub(crate) mod input;
pub(crate) mod movement;

#[cfg(feature = "dev-tools")]
pub(crate) use gizmos::draw_probe_hits;
pub(crate) use input::read_input;
pub(crate) use movement::step_controllers;
