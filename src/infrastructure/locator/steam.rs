//! Steam library discovery
//!
//! Looks for the game under every library folder of every known Steam root.
//! Roots come from the platform defaults and, on Windows, the
//! `HKCU\Software\Valve\Steam` registry key (read with `reg query`).

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::vdf::{parse_library_folders, LibraryFolder};
use crate::domain::ports::InstallationLocator;
use crate::infrastructure::fs::mapprep_home_dir;

/// Install directory name under `steamapps/common`
pub const GAME_DIR_NAME: &str = "Counter-Strike Global Offensive";

const GAME_APP_ID: &str = "730";

/// Finds the game in Steam libraries
#[derive(Debug, Clone)]
pub struct SteamLocator {
    roots: Vec<PathBuf>,
}

impl SteamLocator {
    /// Search the platform's usual Steam roots
    pub fn new() -> Self {
        Self {
            roots: default_steam_roots(),
        }
    }

    /// Search only the given Steam roots
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Every library folder of `root`, the root itself included
    fn libraries(root: &Path) -> Vec<LibraryFolder> {
        let vdf = root.join("steamapps").join("libraryfolders.vdf");
        let mut libraries = std::fs::read_to_string(vdf)
            .ok()
            .and_then(|content| parse_library_folders(&content).ok())
            .unwrap_or_default();

        if !libraries.iter().any(|l| l.path == root) {
            libraries.push(LibraryFolder {
                path: root.to_path_buf(),
                apps: Vec::new(),
            });
        }

        // Libraries that list the game come first
        libraries.sort_by_key(|l| !l.has_app(GAME_APP_ID));
        libraries
    }
}

impl Default for SteamLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallationLocator for SteamLocator {
    fn name(&self) -> &'static str {
        "steam"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.roots
            .iter()
            .filter(|root| root.is_dir())
            .flat_map(|root| Self::libraries(root))
            .map(|library| {
                library
                    .path
                    .join("steamapps")
                    .join("common")
                    .join(GAME_DIR_NAME)
            })
            .find(|candidate| candidate.is_dir())
    }
}

fn default_steam_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if cfg!(windows) {
        if let Some(path) = registry_steam_path() {
            roots.push(path);
        }
        roots.push(PathBuf::from(r"C:\Program Files (x86)\Steam"));
        roots.push(PathBuf::from(r"C:\Program Files\Steam"));
    } else if let Some(home) = mapprep_home_dir() {
        if cfg!(target_os = "macos") {
            roots.push(home.join("Library/Application Support/Steam"));
        } else {
            roots.push(home.join(".steam/steam"));
            roots.push(home.join(".local/share/Steam"));
            roots.push(home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"));
        }
    }

    roots.dedup();
    roots
}

/// `SteamPath` from the current user's Steam registry key
fn registry_steam_path() -> Option<PathBuf> {
    let output = Command::new("reg")
        .args(["query", r"HKCU\Software\Valve\Steam", "/v", "SteamPath"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_reg_value(&String::from_utf8_lossy(&output.stdout), "SteamPath").map(PathBuf::from)
}

/// Value of `name` in `reg query` output:
/// `    SteamPath    REG_SZ    c:/program files (x86)/steam`
fn parse_reg_value(output: &str, name: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix(name)?;
        let rest = rest.trim_start().strip_prefix("REG_")?;
        let (_, value) = rest.split_once(char::is_whitespace)?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn game_dir(library: &Path) -> PathBuf {
        library.join("steamapps").join("common").join(GAME_DIR_NAME)
    }

    #[test]
    fn finds_game_in_root_library() {
        let root = tempdir().unwrap();
        std::fs::create_dir_all(game_dir(root.path())).unwrap();

        let locator = SteamLocator::with_roots(vec![root.path().to_path_buf()]);

        assert_eq!(locator.locate(), Some(game_dir(root.path())));
    }

    #[test]
    fn finds_game_in_secondary_library() {
        let root = tempdir().unwrap();
        let library = tempdir().unwrap();
        std::fs::create_dir_all(game_dir(library.path())).unwrap();
        std::fs::create_dir_all(root.path().join("steamapps")).unwrap();
        let vdf = format!(
            "\"libraryfolders\"\n{{\n\t\"0\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t}}\n\t\"1\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t\t\"apps\"\n\t\t{{\n\t\t\t\"730\"\t\t\"1\"\n\t\t}}\n\t}}\n}}\n",
            root.path().display().to_string().replace('\\', "\\\\"),
            library.path().display().to_string().replace('\\', "\\\\"),
        );
        std::fs::write(root.path().join("steamapps").join("libraryfolders.vdf"), vdf).unwrap();

        let locator = SteamLocator::with_roots(vec![root.path().to_path_buf()]);

        assert_eq!(locator.locate(), Some(game_dir(library.path())));
    }

    #[test]
    fn missing_roots_find_nothing() {
        let root = tempdir().unwrap();
        let locator = SteamLocator::with_roots(vec![root.path().join("no-steam")]);

        assert_eq!(locator.locate(), None);
    }

    #[test]
    fn parses_reg_query_output() {
        let output = "\r\nHKEY_CURRENT_USER\\Software\\Valve\\Steam\r\n    SteamPath    REG_SZ    c:/program files (x86)/steam\r\n\r\n";

        assert_eq!(
            parse_reg_value(output, "SteamPath").as_deref(),
            Some("c:/program files (x86)/steam")
        );
        assert_eq!(parse_reg_value(output, "SteamExe"), None);
    }
}
