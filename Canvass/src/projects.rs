//! Project manifest types for canvass.toml files
//!
//! Each project is one TOML manifest in the projects directory under the
//! platform data dir. The project name is the user-facing identity; the
//! file name is a sanitized slug of it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether a project shares campaign memory with the rest of the
/// workspace or keeps its own. Fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryScope {
    #[default]
    #[serde(rename = "default")]
    Shared,
    ProjectOnly,
}

impl MemoryScope {
    pub fn label(self) -> &'static str {
        match self {
            Self::Shared => "Default",
            Self::ProjectOnly => "Project-only",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Shared => "Project can access memories from outside chats, and vice versa.",
            Self::ProjectOnly => {
                "Project can only access its own memories. Its memories are hidden from outside chats."
            }
        }
    }
}

/// The full project manifest (one canvass.toml per project)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project: Project,
}

/// Project metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub memory: MemoryScope,
    /// RFC 3339 creation stamp; listing keeps creation order.
    #[serde(default)]
    pub created_at: String,
}

/// The projects directory: manifest files, list/create/rename/delete.
#[derive(Debug, Clone)]
pub struct ProjectLibrary {
    root: PathBuf,
}

impl ProjectLibrary {
    /// Open a library rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the default library under the platform data directory.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::Project("no platform data directory".to_string()))?;
        Self::open(base.join("canvass").join("projects"))
    }

    /// Seed the starter projects when the library is empty.
    pub fn ensure_defaults(&self) -> Result<()> {
        if self.list()?.is_empty() {
            self.create("Voter Outreach", MemoryScope::Shared)?;
            self.create("Fall Campaign", MemoryScope::Shared)?;
        }
        Ok(())
    }

    /// All projects, oldest first.
    pub fn list(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "toml") {
                continue;
            }
            match self.read_manifest(&path) {
                Ok(manifest) => projects.push(manifest.project),
                Err(e) => tracing::warn!("skipping unreadable manifest {}: {e}", path.display()),
            }
        }
        projects.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(projects)
    }

    pub fn create(&self, name: &str, memory: MemoryScope) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Project("project name is empty".to_string()));
        }
        let path = self.manifest_path(name);
        if path.exists() {
            return Err(Error::Project(format!("a project named '{name}' already exists")));
        }
        let project = Project {
            name: name.to_string(),
            memory,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.write_manifest(&path, &project)?;
        tracing::info!("created project '{name}'");
        Ok(project)
    }

    /// Rename a project, keeping its scope and creation stamp.
    pub fn rename(&self, name: &str, new_name: &str) -> Result<Project> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Error::Project("project name is empty".to_string()));
        }
        let old_path = self.manifest_path(name);
        let manifest = self.read_manifest(&old_path)?;
        let new_path = self.manifest_path(new_name);
        if new_path != old_path && new_path.exists() {
            return Err(Error::Project(format!(
                "a project named '{new_name}' already exists"
            )));
        }
        let project = Project {
            name: new_name.to_string(),
            ..manifest.project
        };
        self.write_manifest(&new_path, &project)?;
        if new_path != old_path {
            fs::remove_file(&old_path)?;
        }
        Ok(project)
    }

    /// Remove a project's manifest; unknown names are a no-op.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.manifest_path(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("deleted project '{name}'");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn manifest_path(&self, name: &str) -> PathBuf {
        let slug: String = name
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{slug}.toml"))
    }

    fn read_manifest(&self, path: &Path) -> Result<ProjectManifest> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn write_manifest(&self, path: &Path, project: &Project) -> Result<()> {
        let manifest = ProjectManifest {
            project: project.clone(),
        };
        fs::write(path, toml::to_string_pretty(&manifest)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_manifest_roundtrip() {
        let manifest = ProjectManifest {
            project: Project {
                name: "Voter Outreach".to_string(),
                memory: MemoryScope::ProjectOnly,
                created_at: "2026-08-01T09:00:00+00:00".to_string(),
            },
        };

        let toml_str = toml::to_string_pretty(&manifest).unwrap();
        assert!(toml_str.contains("project-only"));
        let parsed: ProjectManifest = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.project, manifest.project);
    }

    #[test]
    fn test_shared_scope_serializes_as_default() {
        let manifest = ProjectManifest {
            project: Project {
                name: "Fall Campaign".to_string(),
                memory: MemoryScope::Shared,
                created_at: String::new(),
            },
        };

        let toml_str = toml::to_string_pretty(&manifest).unwrap();
        assert!(toml_str.contains("memory = \"default\""));
    }

    #[test]
    fn test_defaults_seed_once() {
        let dir = tempdir().unwrap();
        let library = ProjectLibrary::open(dir.path()).unwrap();

        library.ensure_defaults().unwrap();
        let names: Vec<String> = library
            .list()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Voter Outreach", "Fall Campaign"]);

        // Already populated, nothing new.
        library.delete("Fall Campaign").unwrap();
        library.ensure_defaults().unwrap();
        assert_eq!(library.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rename_delete() {
        let dir = tempdir().unwrap();
        let library = ProjectLibrary::open(dir.path()).unwrap();

        let created = library.create("GOTV Week", MemoryScope::Shared).unwrap();
        assert_eq!(created.memory, MemoryScope::Shared);
        assert!(library.create("GOTV Week", MemoryScope::Shared).is_err());

        let renamed = library
            .rename("GOTV Week", "Get Out The Vote")
            .unwrap();
        assert_eq!(renamed.created_at, created.created_at);
        let listed = library.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Get Out The Vote");

        library.delete("Get Out The Vote").unwrap();
        library.delete("Get Out The Vote").unwrap(); // no-op
        assert!(library.list().unwrap().is_empty());
    }

    #[test]
    fn test_rename_to_taken_name_fails() {
        let dir = tempdir().unwrap();
        let library = ProjectLibrary::open(dir.path()).unwrap();
        library.create("Canvassing", MemoryScope::Shared).unwrap();
        library.create("Phone Bank", MemoryScope::Shared).unwrap();

        assert!(library.rename("Phone Bank", "Canvassing").is_err());
        assert_eq!(library.list().unwrap().len(), 2);
    }
}
