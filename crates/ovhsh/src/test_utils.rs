use std::cell::RefCell;
use std::env;
use std::io::{self, Cursor, Write};
use std::rc::Rc;
use std::sync::{Mutex, OnceLock};

use crate::modules::domain::ZoneStore;
use crate::modules::{build_graph, BaseModule, DomainModule, Module};
use crate::shell::{Console, Options, Session, ShellContext};

pub fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct EnvVarGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let original = env::var(key).ok();
        env::set_var(key, value);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.original {
            env::set_var(self.key, value);
        } else {
            env::remove_var(self.key);
        }
    }
}

/// Writer whose contents stay readable after it is boxed into a `Console`.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console reading `input` and capturing stdout / stderr.
pub fn captured_console(input: &str) -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let console = Console::new(
        Box::new(out.clone()),
        Box::new(err.clone()),
        Box::new(Cursor::new(input.as_bytes().to_vec())),
    );
    (console, out, err)
}

/// Session over the built-in modules with a captured console.
pub fn test_session(
    input: &str,
    options: Options,
    store: ZoneStore,
) -> (Session, SharedBuffer, SharedBuffer) {
    let (console, out, err) = captured_console(input);
    let modules: Vec<Box<dyn Module>> =
        vec![Box::new(BaseModule), Box::new(DomainModule::new(store))];
    let graph = build_graph(&modules);
    let ctx = ShellContext::new(options, console, 100);
    (Session::new(graph, ctx), out, err)
}
