//! Where the file-backed configuration layers live.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Checked-in project configuration, relative to the project directory.
pub const PROJECT_CONFIG_FILE: &str = "regionsim.toml";

/// Per-checkout overrides, meant to stay out of version control.
pub const LOCAL_CONFIG_FILE: &str = "regionsim.local.toml";

/// A file-backed layer. Variants are declared lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// `~/.config/regionsim/config.toml` (platform dependent)
    User,
    /// `regionsim.toml`
    Project,
    /// `regionsim.local.toml`
    Local,
}

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::Local => "local",
        }
    }
}

/// One candidate configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub layer: Layer,
    pub path: PathBuf,
}

/// Configuration file locations for one project directory.
#[derive(Debug, Clone)]
pub struct Paths {
    user_config_dir: Option<PathBuf>,
    project_dir: PathBuf,
}

impl Paths {
    /// Resolves the user directory through XDG discovery.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_config_dir: ProjectDirs::from("dev", "regionsim", "regionsim")
                .map(|dirs| dirs.config_dir().to_path_buf()),
            project_dir: project_dir.into(),
        }
    }

    /// Drops the user layer, leaving only the project directory.
    pub fn without_user_dir(mut self) -> Self {
        self.user_config_dir = None;
        self
    }

    /// `None` when the platform has no discoverable home directory.
    pub fn user_config_file(&self) -> Option<PathBuf> {
        self.user_config_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
    }

    pub fn project_config_file(&self) -> PathBuf {
        self.project_dir.join(PROJECT_CONFIG_FILE)
    }

    pub fn local_config_file(&self) -> PathBuf {
        self.project_dir.join(LOCAL_CONFIG_FILE)
    }

    /// Every candidate file in merge order, whether or not it exists.
    pub fn files(&self) -> Vec<ConfigFile> {
        let user = self.user_config_file().map(|path| ConfigFile {
            layer: Layer::User,
            path,
        });

        user.into_iter()
            .chain([
                ConfigFile {
                    layer: Layer::Project,
                    path: self.project_config_file(),
                },
                ConfigFile {
                    layer: Layer::Local,
                    path: self.local_config_file(),
                },
            ])
            .collect()
    }

    /// The files that are present on disk, in merge order.
    pub fn existing_files(&self) -> impl Iterator<Item = ConfigFile> {
        self.files().into_iter().filter(|file| file.path.is_file())
    }
}
