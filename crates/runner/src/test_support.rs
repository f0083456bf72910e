//! Shared fixtures for runner tests.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use github::{GitHub, GitHubConfig};
use toolkit::{Core, EnvSource, ExecutionContext};

/// A cloneable in-memory writer standing in for stdout.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn env(pairs: &[(&str, &str)]) -> Arc<dyn EnvSource> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(map)
}

pub(crate) fn facade(pairs: &[(&str, &str)]) -> (Arc<Core>, SharedBuffer) {
    let out = SharedBuffer::default();
    (Arc::new(Core::with_writer(env(pairs), out.clone())), out)
}

/// Client, context, and facade built from `pairs`; must run inside a tokio
/// runtime.
pub(crate) fn capabilities(
    pairs: &[(&str, &str)],
) -> (Arc<GitHub>, Arc<ExecutionContext>, Arc<Core>, SharedBuffer) {
    let (core, out) = facade(pairs);
    let context = ExecutionContext::from_source(core.env().as_ref()).unwrap();
    let github = GitHub::new(GitHubConfig::default()).unwrap();
    (Arc::new(github), Arc::new(context), core, out)
}
