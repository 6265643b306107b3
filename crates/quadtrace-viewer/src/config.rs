/// Environment variable overriding [`ViewerConfig::resource_root`].
pub const RESOURCE_ROOT_ENV: &str = "QUADTRACE_RESOURCES";

/// Viewer settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,

    /// Prefix for every resource path; concatenated as-is, so keep the
    /// trailing separator.
    pub resource_root: String,

    /// Loader key of the raytracing program.
    pub shader_key: String,
    pub vertex_path: String,
    pub fragment_path: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "quadtrace".to_string(),
            width: 1200.0,
            height: 1200.0,
            resource_root: "Resources/".to_string(),
            shader_key: "Everything".to_string(),
            vertex_path: "everything_vs.wgsl".to_string(),
            fragment_path: "raytracer_fs.wgsl".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the resource root taken from the environment when set.
    pub fn from_env() -> Self {
        Self::default().with_resource_root(std::env::var(RESOURCE_ROOT_ENV).ok())
    }

    fn with_resource_root(mut self, root: Option<String>) -> Self {
        if let Some(root) = root.filter(|r| !r.is_empty()) {
            self.resource_root = root;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bundled_resources() {
        let c = ViewerConfig::default();
        assert_eq!(c.resource_root, "Resources/");
        assert_eq!(c.shader_key, "Everything");
        assert_eq!((c.width, c.height), (1200.0, 1200.0));
    }

    #[test]
    fn resource_root_override() {
        let c = ViewerConfig::default().with_resource_root(Some("/opt/qt/".into()));
        assert_eq!(c.resource_root, "/opt/qt/");
    }

    #[test]
    fn empty_override_is_ignored() {
        let c = ViewerConfig::default().with_resource_root(Some(String::new()));
        assert_eq!(c.resource_root, "Resources/");
        let c = ViewerConfig::default().with_resource_root(None);
        assert_eq!(c.resource_root, "Resources/");
    }
}
