//! Files shipped with the admin package that the build configuration points at.
//!
//! None of these are created here; they are referenced by path only.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::env::BuildEnv;

/// Install location of the admin package's build output, relative to the project
pub const DEFAULT_ADMIN_ROOT: &str = "node_modules/@panel/core/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAssets {
    root: PathBuf,
}

impl AdminAssets {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().clean(),
        }
    }

    /// `PANEL_ADMIN_ROOT` when set, otherwise the package under `node_modules`.
    pub fn locate(env: &BuildEnv) -> Self {
        let root = env
            .admin_root
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_ADMIN_ROOT));
        Self::new(env.cwd.join(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Admin UI bootstrap module
    pub fn entry(&self) -> PathBuf {
        self.root.join("admin")
    }

    pub fn index_html(&self) -> PathBuf {
        self.root.join("admin").join("index.html")
    }

    pub fn scss_overrides(&self) -> PathBuf {
        self.root.join("admin").join("scss").join("overrides.scss")
    }

    /// Placeholder module standing in for server-only imports
    pub fn empty_module(&self) -> PathBuf {
        self.root.join("mocks").join("emptyModule.js")
    }

    pub fn babel_config(&self) -> PathBuf {
        self.root.join("babel.config.js")
    }

    /// Dependencies installed next to the admin package's build output
    pub fn node_modules(&self) -> PathBuf {
        self.root.join("..").join("node_modules").clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_defaults_to_installed_package() {
        let assets = AdminAssets::locate(&BuildEnv::new("/proj"));
        assert_eq!(assets.root(), Path::new("/proj/node_modules/@panel/core/dist"));
        assert_eq!(
            assets.node_modules(),
            PathBuf::from("/proj/node_modules/@panel/core/node_modules")
        );
    }

    #[test]
    fn locate_honors_admin_root() {
        let env = BuildEnv::new("/proj").with_admin_root("../admin/dist");
        let assets = AdminAssets::locate(&env);
        assert_eq!(assets.root(), Path::new("/admin/dist"));

        let env = BuildEnv::new("/proj").with_admin_root("/opt/admin");
        assert_eq!(AdminAssets::locate(&env).root(), Path::new("/opt/admin"));
    }

    #[test]
    fn fixed_files_live_under_root() {
        let assets = AdminAssets::new("/pkg/dist");
        assert_eq!(assets.entry(), PathBuf::from("/pkg/dist/admin"));
        assert_eq!(assets.index_html(), PathBuf::from("/pkg/dist/admin/index.html"));
        assert_eq!(
            assets.scss_overrides(),
            PathBuf::from("/pkg/dist/admin/scss/overrides.scss")
        );
        assert_eq!(
            assets.empty_module(),
            PathBuf::from("/pkg/dist/mocks/emptyModule.js")
        );
    }
}
