/// Locates scenario directories on the loading machine.
///
/// A record authored elsewhere may reference a scenario directory
/// under a different data path than the local one.
pub trait ScenarioPathResolver {
    fn exists(&self, path: &str) -> bool;

    /// Returns a local path for `path`, or `path` itself if nothing better is known.
    fn find_valid_local(&self, path: &str) -> String;
}

/// Accepts every path as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScenarioPathResolver;

impl ScenarioPathResolver for NoopScenarioPathResolver {
    fn exists(&self, _path: &str) -> bool {
        true
    }

    fn find_valid_local(&self, path: &str) -> String {
        path.to_string()
    }
}
