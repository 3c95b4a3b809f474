//! What the Transit Safety API project must provide to run.
//!
//! The audited service is not introspected; the requirements are a fixed
//! manifest kept in one place. Distribution and import names diverge for
//! several packages (`python-dotenv` installs `dotenv`, `exa_py` installs
//! `exa`), so the mapping is an explicit table rather than something
//! derived from the distribution name.

/// A file the target project must contain.
#[derive(Debug)]
pub struct RequiredFile {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Human-readable role, shown when the file is missing.
    pub role: &'static str,
}

/// A Python distribution the target environment must provide.
#[derive(Debug)]
pub struct RequiredPackage {
    /// Name as listed in requirements.txt.
    pub dist_name: &'static str,
    /// Module name actually imported to verify installation.
    pub import_name: &'static str,
}

/// Files the service needs on disk.
pub const REQUIRED_FILES: &[RequiredFile] = &[
    RequiredFile {
        path: "main.py",
        role: "application entry point",
    },
    RequiredFile {
        path: "database.py",
        role: "persistence layer",
    },
    RequiredFile {
        path: "subway_stations.py",
        role: "station data",
    },
    RequiredFile {
        path: "ml_integration.py",
        role: "ML integration",
    },
    RequiredFile {
        path: "run.py",
        role: "launcher script",
    },
    RequiredFile {
        path: "requirements.txt",
        role: "dependency manifest",
    },
    RequiredFile {
        path: ".env",
        role: "configuration file",
    },
];

/// Distributions the service imports at startup.
pub const REQUIRED_PACKAGES: &[RequiredPackage] = &[
    RequiredPackage {
        dist_name: "fastapi",
        import_name: "fastapi",
    },
    RequiredPackage {
        dist_name: "uvicorn",
        import_name: "uvicorn",
    },
    RequiredPackage {
        dist_name: "pydantic",
        import_name: "pydantic",
    },
    RequiredPackage {
        dist_name: "python-dotenv",
        import_name: "dotenv",
    },
    RequiredPackage {
        dist_name: "exa_py",
        import_name: "exa",
    },
    RequiredPackage {
        dist_name: "cerebras_cloud_sdk",
        import_name: "cerebras_cloud_sdk",
    },
    RequiredPackage {
        dist_name: "geopy",
        import_name: "geopy",
    },
    RequiredPackage {
        dist_name: "sqlalchemy",
        import_name: "sqlalchemy",
    },
];

/// Credential keys the service reads from its environment.
pub const REQUIRED_KEYS: &[&str] = &["EXA_API_KEY", "CEREBRAS_API_KEY"];

/// Import that must succeed before the service can serve at all.
pub const ENTRYPOINT_IMPORT: &str = "from main import app";

/// Import checked for the persistence layer; failure is reported but tolerated.
pub const PERSISTENCE_IMPORT: &str = "from database import create_tables";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_covers_all_service_files() {
        let paths: Vec<&str> = REQUIRED_FILES.iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            [
                "main.py",
                "database.py",
                "subway_stations.py",
                "ml_integration.py",
                "run.py",
                "requirements.txt",
                ".env"
            ]
        );
    }

    #[test]
    fn every_file_has_a_role() {
        for file in REQUIRED_FILES {
            assert!(!file.role.is_empty(), "{} has no role", file.path);
        }
    }

    #[test]
    fn divergent_import_names_are_mapped() {
        let import_of = |dist: &str| {
            REQUIRED_PACKAGES
                .iter()
                .find(|p| p.dist_name == dist)
                .map(|p| p.import_name)
        };

        assert_eq!(import_of("python-dotenv"), Some("dotenv"));
        assert_eq!(import_of("exa_py"), Some("exa"));
        assert_eq!(import_of("fastapi"), Some("fastapi"));
        assert_eq!(import_of("cerebras_cloud_sdk"), Some("cerebras_cloud_sdk"));
    }

    #[test]
    fn package_names_are_unique() {
        let mut dists: Vec<&str> = REQUIRED_PACKAGES.iter().map(|p| p.dist_name).collect();
        dists.sort();
        dists.dedup();
        assert_eq!(dists.len(), REQUIRED_PACKAGES.len());
    }

    #[test]
    fn required_keys_match_service_credentials() {
        assert_eq!(REQUIRED_KEYS, ["EXA_API_KEY", "CEREBRAS_API_KEY"]);
    }

    #[test]
    fn import_statements_target_project_modules() {
        assert!(ENTRYPOINT_IMPORT.contains("main"));
        assert!(PERSISTENCE_IMPORT.contains("database"));
    }
}
