use std::boxed::Box;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct Env_Info {
    pub full_exe_path: Box<Path>,
    pub working_dir: Box<Path>,
    pub assets_root: Box<Path>,
    pub cfg_root: Box<Path>,
}

impl Env_Info {
    pub fn gather() -> io::Result<Env_Info> {
        let full_exe_path = fs::canonicalize(env::current_exe()?)?;
        let working_dir = full_exe_path.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Weird exe path: {:?}", full_exe_path),
            )
        })?;
        let working_dir = find_working_dir(working_dir);
        Ok(Self::new_with_working_dir(
            full_exe_path.into_boxed_path(),
            working_dir,
        ))
    }

    pub fn new_with_working_dir(full_exe_path: Box<Path>, working_dir: PathBuf) -> Env_Info {
        let assets_root = {
            let mut assets_root_buf = working_dir.clone();
            assets_root_buf.push("assets");
            assets_root_buf.into_boxed_path()
        };
        let cfg_root = {
            let mut cfgs_root_buf = working_dir.clone();
            cfgs_root_buf.push("cfg");
            cfgs_root_buf.into_boxed_path()
        };
        Env_Info {
            full_exe_path,
            working_dir: working_dir.into_boxed_path(),
            assets_root,
            cfg_root,
        }
    }
}

// If we're in a dev environment (running from target/), use the repository root
// as working dir so assets and cfg don't need to be copied around.
fn find_working_dir(exe_dir: &Path) -> PathBuf {
    let mut working_dir = PathBuf::from(exe_dir);
    let cur_dir = working_dir.as_path().file_name().and_then(OsStr::to_str);
    let parent_dir = working_dir
        .as_path()
        .parent()
        .and_then(Path::file_name)
        .and_then(OsStr::to_str);
    if matches!(cur_dir, Some("debug" | "release" | "profile"))
        && matches!(parent_dir, Some("target"))
    {
        working_dir.pop();
        working_dir.pop();
    } else if matches!(cur_dir, Some("deps" | "examples"))
        && matches!(parent_dir, Some("debug" | "release" | "profile"))
    {
        working_dir.pop();
        working_dir.pop();
        working_dir.pop();
    }
    working_dir
}

#[inline]
pub fn asset_path(env: &Env_Info, dir: &str, file: &str) -> Box<Path> {
    let mut s = PathBuf::from(env.assets_root.as_ref());
    s.push(dir);
    s.push(file);
    s.into_boxed_path()
}
