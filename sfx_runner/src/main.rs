#![allow(clippy::new_without_default)]
#![warn(clippy::all)]
#![allow(non_camel_case_types)]

#[macro_use]
extern crate sfx_diagnostics;

mod cmdline;

use sfx_audio::Sound_Manager;
use sfx_cfg::Config;
use sfx_core::env::Env_Info;
use std::error::Error;
use std::thread;
use std::time::Duration;

const UPDATE_INTERVAL: Duration = Duration::from_millis(20);

fn main() {
    sfx_diagnostics::log::add_default_logger();

    let args: Vec<String> = std::env::args().collect();
    let cmdline_args = cmdline::parse_cmdline_args(args.iter());

    if let Err(err) = run(cmdline_args) {
        lerr!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: cmdline::Cmdline_Args) -> Result<(), Box<dyn Error>> {
    sfx_diagnostics::prelude::set_verbose(args.verbose);

    let env = Env_Info::gather()?;
    // --cfg may be either a single file or a directory of cfg files
    let cfg = match args.cfg_file {
        Some(path) => Config::new_from_dir(&path)?,
        None => Config::new_from_dir(&env.cfg_root)?,
    };
    let mut sound_mgr = Sound_Manager::from_config(&env, &cfg)?;

    if args.list {
        for name in sound_mgr.registry().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.sounds.is_empty() {
        cmdline::print_usage();
        return Ok(());
    }

    play_all(&mut sound_mgr, &args.sounds);

    // Sounds play in the background: stay alive until they're all done.
    sound_mgr.update();
    while sound_mgr.n_sounds_playing() > 0 {
        thread::sleep(UPDATE_INTERVAL);
        sound_mgr.update();
    }

    Ok(())
}

// Debug builds already get the warning from Sound_Manager::play, release builds don't.
fn play_all(sound_mgr: &mut Sound_Manager, names: &[String]) {
    for name in names {
        if !cfg!(debug_assertions) && !sound_mgr.registry().contains(name) {
            lwarn!("Unknown sound: {}", name);
        }
        sound_mgr.play(name);
    }
}
