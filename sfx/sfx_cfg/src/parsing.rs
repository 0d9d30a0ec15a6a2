use super::value::Cfg_Value;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

const HEADER_SEPARATOR: char = '/';
const COMMENT_START: char = '#';

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg_Entry {
    pub key: String,
    pub value: Cfg_Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg_Section {
    pub header: String,
    pub entries: Vec<Cfg_Entry>,
}

pub(super) fn parse_config_dir(dir_path: &Path) -> Result<Vec<Cfg_Section>, std::io::Error> {
    if !dir_path.is_dir() {
        lverbose!(
            "Path {:?} given to parse_config_dir is a single file.",
            dir_path
        );
        return parse_config_file(dir_path);
    }

    let mut sections = vec![];
    let mut n_parsed = 0;
    for entry in fs::read_dir(dir_path)? {
        match entry {
            Ok(ref e) if e.path().extension() == Some(OsStr::new("cfg")) => {
                n_parsed += 1;
                sections.append(&mut parse_config_file(&e.path())?)
            }
            Ok(_) => (),
            Err(err) => lwarn!("Failed to read entry of {:?}: {}", dir_path, err),
        }
    }
    lverbose!("Parsed {} cfg files.", n_parsed);
    Ok(sections)
}

pub(super) fn parse_config_file(path: &Path) -> Result<Vec<Cfg_Section>, std::io::Error> {
    let file = File::open(path)?;
    let lines = BufReader::new(file).lines().filter_map(Result::ok);
    Ok(parse_lines(lines, path))
}

pub(super) fn parse_lines(lines: impl Iterator<Item = String>, path: &Path) -> Vec<Cfg_Section> {
    let mut sections = vec![];
    let mut cur_section = Cfg_Section {
        header: String::from(""),
        entries: vec![],
    };

    let lines = lines.map(|mut line| {
        if let Some(comment_start) = line.find(COMMENT_START) {
            line.truncate(comment_start);
        }
        line
    });

    for (lineno, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix(HEADER_SEPARATOR) {
            if !cur_section.header.is_empty() {
                sections.push(cur_section);
                cur_section = Cfg_Section {
                    header: String::from(""),
                    entries: vec![],
                };
            }
            cur_section.header = String::from(header.trim());
        } else if cur_section.header.is_empty() {
            lwarn!(
                "Line {} in file {:?} is outside any section: `{}`",
                lineno + 1,
                path,
                line
            );
        } else {
            let mut tokens = line.splitn(2, char::is_whitespace);
            let key = tokens.next().unwrap_or("");
            let val = tokens.next().unwrap_or("");
            cur_section.entries.push(Cfg_Entry {
                key: String::from(key),
                value: parse_value(val.trim_start()),
            });
        }
    }
    if !cur_section.header.is_empty() {
        sections.push(cur_section);
    }

    sections
}

fn parse_value(raw: &str) -> Cfg_Value {
    if raw.is_empty() {
        Cfg_Value::Nil
    }
    // @Speed: this is easy but inefficient! An actual lexer would be faster, but for now this is ok.
    else if let Ok(v) = raw.parse::<i32>() {
        Cfg_Value::Int(v)
    } else if let Ok(v) = raw.parse::<f32>() {
        Cfg_Value::Float(v)
    } else if let Ok(v) = raw.parse::<bool>() {
        Cfg_Value::Bool(v)
    } else {
        Cfg_Value::String(String::from(raw))
    }
}
