#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[allow(unused_imports)]
#[macro_use]
extern crate sfx_common;

#[allow(unused_imports)]
#[macro_use]
extern crate sfx_diagnostics;

pub mod sound;
