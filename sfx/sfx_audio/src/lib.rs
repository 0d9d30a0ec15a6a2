#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate sfx_diagnostics;

pub mod audio_system;
pub mod registry;
pub mod sfx;
pub mod sound;
pub mod sound_manager;

pub use audio_system::{Audio_System, Audio_System_Config, Sound_Handle};
pub use registry::{Registry_Error, Sound_Registry, Sound_Registry_Builder};
pub use sfx::{Sfx, Unknown_Sound_Name};
pub use sound_manager::Sound_Manager;
