use sfx_common::stringid::String_Id;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

pub trait Resource_Loader<R> {
    type Args: ?Sized;

    fn load(&self, data: &Self::Args) -> Result<R, String>;
}

/// Loads every resource once: loading the same path again returns the same handle.
pub struct Cache<Res, Loader>
where
    Loader: Resource_Loader<Res, Args = Path>,
{
    loader: Loader,
    cache: HashMap<String_Id, Res>,
}

pub type Res_Handle = String_Id;

impl<Res, Loader> Cache<Res, Loader>
where
    Loader: Resource_Loader<Res, Args = Path>,
{
    pub fn new_with_loader(loader: Loader) -> Self {
        Cache {
            cache: HashMap::new(),
            loader,
        }
    }

    pub fn load(&mut self, fname: &Path) -> Result<Res_Handle, String> {
        let path_str = fname.to_string_lossy();
        let id = String_Id::from(&*path_str);
        match self.cache.entry(id) {
            Entry::Occupied(_) => Ok(id),
            Entry::Vacant(v) => {
                let res = self.loader.load(fname)?;
                v.insert(res);
                lok!("Loaded resource {}", fname.display());
                Ok(id)
            }
        }
    }

    pub fn get(&self, handle: Res_Handle) -> Option<&Res> {
        self.cache.get(&handle)
    }

    pub fn must_get(&self, handle: Res_Handle) -> &Res {
        self.cache
            .get(&handle)
            .unwrap_or_else(|| fatal!("Resource {} was never loaded!", handle))
    }

    pub fn n_loaded(&self) -> usize {
        self.cache.len()
    }
}

#[macro_export]
macro_rules! define_file_loader {
    ($loaded_res: ident, $loader_name: ident, $cache_name: ident, $load_fn: path) => {
        pub(super) struct $loader_name;

        impl loaders::Resource_Loader<$loaded_res> for $loader_name {
            type Args = std::path::Path;

            fn load(&self, fname: &std::path::Path) -> Result<$loaded_res, String> {
                $load_fn(fname).map_err(|err| {
                    format!(
                        concat!("Failed to load ", stringify!($loaded_res), " from {}: {}"),
                        fname.display(),
                        err
                    )
                })
            }
        }

        pub(super) type $cache_name = loaders::Cache<$loaded_res, $loader_name>;

        impl $cache_name {
            pub fn new() -> Self {
                Self::new_with_loader($loader_name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting_Loader {
        n_calls: Cell<u32>,
    }

    impl Resource_Loader<String> for Counting_Loader {
        type Args = Path;

        fn load(&self, fname: &Path) -> Result<String, String> {
            self.n_calls.set(self.n_calls.get() + 1);
            if fname.extension().is_some() {
                Ok(fname.display().to_string())
            } else {
                Err(String::from("no extension"))
            }
        }
    }

    #[test]
    fn loads_each_path_once() {
        let mut cache = Cache::new_with_loader(Counting_Loader {
            n_calls: Cell::new(0),
        });
        let a = cache.load(Path::new("sounds/a.wav")).unwrap();
        let a2 = cache.load(Path::new("sounds/a.wav")).unwrap();
        let b = cache.load(Path::new("sounds/b.wav")).unwrap();

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(cache.n_loaded(), 2);
        assert_eq!(cache.loader.n_calls.get(), 2);
        assert_eq!(cache.must_get(a), "sounds/a.wav");
    }

    #[test]
    fn load_errors_are_propagated() {
        let mut cache = Cache::new_with_loader(Counting_Loader {
            n_calls: Cell::new(0),
        });
        assert!(cache.load(Path::new("sounds/noext")).is_err());
        assert_eq!(cache.n_loaded(), 0);
    }
}
