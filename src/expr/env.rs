//! Environment sources for `env.` operands

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Case-sensitive key/value lookup used to resolve `env.NAME` operands.
///
/// `None` means the variable is absent. The evaluator treats absent and
/// empty the same, but sources keep them distinct.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Keys that cannot name a variable would make the platform call panic
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
