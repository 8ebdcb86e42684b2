use std::path::{Path, PathBuf};

use game_settings::ScenarioPathResolver;

/// Looks for scenario directories below a list of local data roots.
///
/// A remote path like `C:\games\data\scenarios\storm` is tried as
/// `<root>/scenarios/storm` and then as `<root>/storm` for every root in order.
#[derive(Debug, Default, Clone)]
pub struct FsScenarioPathResolver {
    search_roots: Vec<PathBuf>,
}

impl FsScenarioPathResolver {
    pub fn new(search_roots: Vec<PathBuf>) -> Self {
        Self { search_roots }
    }

    fn candidates(path: &str) -> Vec<PathBuf> {
        // separators of both kinds, the document may come from any platform
        let components: Vec<&str> = path
            .split(['/', '\\'])
            .filter(|c| !c.is_empty())
            .collect();

        let mut res = Vec::new();
        if let Some(pos) = components.iter().rposition(|&c| c == "scenarios") {
            res.push(components[pos..].iter().collect::<PathBuf>());
        }
        if let Some(last) = components.last() {
            res.push(PathBuf::from(last));
        }
        res
    }
}

impl ScenarioPathResolver for FsScenarioPathResolver {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn find_valid_local(&self, path: &str) -> String {
        let candidates = Self::candidates(path);
        self.search_roots
            .iter()
            .flat_map(|root| candidates.iter().map(move |c| root.join(c)))
            .find(|local| local.exists())
            .map(|local| local.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string())
    }
}
