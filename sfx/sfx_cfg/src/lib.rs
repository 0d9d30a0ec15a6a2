#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate sfx_diagnostics;

mod config;
mod parsing;
mod value;

use sfx_core::env::Env_Info;
use std::path::PathBuf;

pub use config::Config;
pub use parsing::{Cfg_Entry, Cfg_Section};
pub use value::Cfg_Value;

pub fn cfg_path(env: &Env_Info, dir: &str, file: &str) -> PathBuf {
    let mut s = PathBuf::from(env.cfg_root.as_ref());
    s.push(dir);
    s.push(file);
    s.set_extension("cfg");
    s
}
