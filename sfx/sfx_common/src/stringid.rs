use std::convert::From;

#[cfg(debug_assertions)]
use {std::collections::hash_map::Entry, std::collections::HashMap, std::sync::RwLock};

/// A hashed string, cheap to copy and compare.
/// In debug builds the original string is remembered so ids can be printed back.
#[derive(PartialEq, Hash, Copy, Clone, PartialOrd, Eq, Ord)]
pub struct String_Id(u32);

#[cfg(debug_assertions)]
lazy_static! {
    static ref STRING_ID_MAP: RwLock<HashMap<String_Id, String>> = RwLock::new(HashMap::new());
}

impl String_Id {
    pub const fn from_u32(x: u32) -> String_Id {
        String_Id(x)
    }

    pub const fn val(self) -> u32 {
        self.0
    }
}

impl<'a, T> From<T> for String_Id
where
    &'a str: From<T>,
    T: 'a,
{
    fn from(s: T) -> String_Id {
        let s: &str = s.into();
        sid_from_str(s)
    }
}

#[cfg(debug_assertions)]
pub fn sid_from_str(s: &str) -> String_Id {
    let this = String_Id(fnv1a(s.as_bytes()));
    if let Ok(mut map) = STRING_ID_MAP.write() {
        match map.entry(this) {
            Entry::Occupied(o) => {
                let old = o.get().as_str();
                assert_eq!(
                    old, s,
                    "Two strings map to the same SID: {} and {}!",
                    old, s
                );
            }
            Entry::Vacant(v) => {
                v.insert(String::from(s));
            }
        }
    }
    this
}

#[cfg(not(debug_assertions))]
pub const fn sid_from_str(s: &str) -> String_Id {
    String_Id(fnv1a(s.as_bytes()))
}

#[macro_export]
macro_rules! sid {
    ($str: expr) => {
        $crate::stringid::sid_from_str($str)
    };
}

impl std::fmt::Display for String_Id {
    #[cfg(not(debug_assertions))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }

    #[cfg(debug_assertions)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let map = STRING_ID_MAP.read().map_err(|_| std::fmt::Error)?;
        // this may fail if we created the String_Id from an integer directly
        match map.get(self) {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::fmt::Debug for String_Id {
    #[cfg(not(debug_assertions))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "String_Id({})", self.0)
    }

    #[cfg(debug_assertions)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let map = STRING_ID_MAP.read().map_err(|_| std::fmt::Error)?;
        write!(
            f,
            "String_Id({}, \"{}\")",
            self.0,
            map.get(self).map_or("??", |s| s.as_str())
        )
    }
}

pub const FNV1A_PRIME32: u32 = 16_777_619;
pub const FNV1A_START32: u32 = 2_166_136_261;

const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut result = FNV1A_START32;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        result ^= b as u32;
        result = result.wrapping_mul(FNV1A_PRIME32);
        i += 1;
    }
    result
}
