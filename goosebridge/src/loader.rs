//! YAML access file loader
//!
//! Reads and parses access files. Nothing fancy.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::AccessFile;

/// Load an access file from disk.
pub fn load_access_file(path: &Path) -> Result<AccessFile, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_access_file(&contents)?;
    tracing::debug!(
        path = %path.display(),
        controllers = file.controllers.len(),
        actors = file.actors.len(),
        "loaded access file"
    );
    Ok(file)
}

/// Parse an access file from a YAML string.
pub fn parse_access_file(yaml: &str) -> Result<AccessFile, LoadError> {
    Ok(serde_yaml::from_str(yaml)?)
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate controller `{0}`")]
    DuplicateController(String),

    #[error("Unknown controller `{0}`")]
    UnknownController(String),

    #[error("Duplicate actor {0}")]
    DuplicateActor(u64),

    #[error("Unknown actor {0}")]
    UnknownActor(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{EffectName, EntityDef};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal() {
        let file = parse_access_file("controllers: []\n").unwrap();
        assert_eq!(file.fallback, EffectName::Deny);
        assert!(file.controllers.is_empty());
        assert!(file.actors.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let yaml = r#"
fallback: allow
controllers:
  - name: fleet-7
    admin:
      - { user: 1, built_in: true }
    use:
      - { permission: loot_tracker }
      - { corp: ALT, effect: deny }
actors:
  - user: 1
    corps: [GOOSE]
    permissions: [loot_tracker]
"#;
        let file = parse_access_file(yaml).unwrap();
        assert_eq!(file.fallback, EffectName::Allow);
        assert_eq!(file.controllers.len(), 1);

        let fleet = &file.controllers[0];
        assert_eq!(fleet.name, "fleet-7");
        assert_eq!(fleet.fallback, None);
        assert_eq!(
            fleet.admin,
            vec![EntityDef {
                user: Some(1),
                corp: None,
                permission: None,
                effect: EffectName::Allow,
                built_in: true,
            }]
        );
        assert_eq!(fleet.use_.len(), 2);
        assert_eq!(fleet.use_[1].effect, EffectName::Deny);
        assert!(fleet.view.is_empty());

        assert_eq!(file.actors[0].corps, vec!["GOOSE"]);
    }

    #[test]
    fn test_explicit_order_is_rejected() {
        let yaml = r#"
controllers:
  - name: fleet-7
    view:
      - { user: 1, order: 99 }
"#;
        let err = parse_access_file(yaml).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("order"));
    }

    #[test]
    fn test_bad_effect_is_rejected() {
        let yaml = "fallback: maybe\n";
        assert!(matches!(parse_access_file(yaml), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_access_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
