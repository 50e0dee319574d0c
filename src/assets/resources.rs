use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{ShapeViewError, ShapeViewResult};

/// Opaque reference to externally stored vector data.
///
/// `0` means "unset", matching a missing resource attribute.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ResourceHandle(pub u32);

impl ResourceHandle {
    /// The unset handle.
    pub const NONE: Self = Self(0);

    /// Return `true` when the handle refers to a resource.
    pub fn is_set(self) -> bool {
        self.0 > 0
    }
}

/// Store of raw vector resources, looked up by handle.
///
/// Implementations return the encoded bytes (SVG) exactly as stored; parsing is done by the
/// mask generator.
pub trait VectorResources {
    /// Open the raw bytes for `handle`.
    fn open(&self, handle: ResourceHandle) -> ShapeViewResult<Arc<Vec<u8>>>;
}

/// A store with no resources. Every lookup fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResources;

impl VectorResources for NoResources {
    fn open(&self, handle: ResourceHandle) -> ShapeViewResult<Arc<Vec<u8>>> {
        Err(ShapeViewError::resource(format!(
            "no vector resources registered (requested {})",
            handle.0
        )))
    }
}

/// In-memory resource map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryResources {
    by_handle: HashMap<ResourceHandle, Arc<Vec<u8>>>,
}

impl InMemoryResources {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` under `handle`, replacing any previous entry.
    pub fn insert(
        &mut self,
        handle: ResourceHandle,
        bytes: impl Into<Vec<u8>>,
    ) -> ShapeViewResult<()> {
        if !handle.is_set() {
            return Err(ShapeViewError::validation(
                "resource handle 0 is reserved for 'unset'",
            ));
        }
        self.by_handle.insert(handle, Arc::new(bytes.into()));
        Ok(())
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.by_handle.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_handle.is_empty()
    }
}

impl VectorResources for InMemoryResources {
    fn open(&self, handle: ResourceHandle) -> ShapeViewResult<Arc<Vec<u8>>> {
        self.by_handle
            .get(&handle)
            .cloned()
            .ok_or_else(|| ShapeViewError::resource(format!("unknown resource {}", handle.0)))
    }
}

/// Resources backed by files under a root directory.
///
/// Files are read on every `open`; the view only asks when it rebuilds its mask.
#[derive(Clone, Debug)]
pub struct FileResources {
    root: PathBuf,
    by_handle: HashMap<ResourceHandle, PathBuf>,
}

impl FileResources {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            by_handle: HashMap::new(),
        }
    }

    /// Map `handle` to a path under the root. Absolute paths and `..` are rejected.
    pub fn register(&mut self, handle: ResourceHandle, rel: &str) -> ShapeViewResult<()> {
        if !handle.is_set() {
            return Err(ShapeViewError::validation(
                "resource handle 0 is reserved for 'unset'",
            ));
        }
        let path = rooted_path(rel)?;
        self.by_handle.insert(handle, path);
        Ok(())
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl VectorResources for FileResources {
    fn open(&self, handle: ResourceHandle) -> ShapeViewResult<Arc<Vec<u8>>> {
        let rel = self
            .by_handle
            .get(&handle)
            .ok_or_else(|| ShapeViewError::resource(format!("unknown resource {}", handle.0)))?;
        let p = self.root.join(rel);
        let bytes = std::fs::read(&p).map_err(|e| {
            ShapeViewError::resource(format!("failed to read resource '{}': {e}", p.display()))
        })?;
        Ok(Arc::new(bytes))
    }
}

/// Check that `rel` stays under the resource root and return it as a path.
fn rooted_path(rel: &str) -> ShapeViewResult<PathBuf> {
    let mut out = PathBuf::new();
    for part in Path::new(rel).components() {
        match part {
            Component::Normal(seg) => out.push(seg),
            Component::CurDir => {}
            _ => {
                return Err(ShapeViewError::validation(format!(
                    "resource path '{rel}' must stay under the resource root"
                )));
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(ShapeViewError::validation(format!(
            "resource path '{rel}' names no file"
        )));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resources.rs"]
mod tests;
