#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[cfg(debug_assertions)]
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod prelude;

pub mod stringid;

pub use prelude::*;
