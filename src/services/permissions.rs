//! Permission queries for the permission check.
//!
//! These only ask the kernel (`faccessat(2)` against the effective uid);
//! nothing is opened or created, so the audited directory and config file
//! are left untouched. A missing path or any query error reads as `false`.

use crate::domain::models::PermissionStatus;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
}

#[cfg(unix)]
fn has_access(path: &Path, access: Access) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    let mode = match access {
        Access::Read => libc::R_OK,
        Access::Write => libc::W_OK,
    };
    let result =
        unsafe { libc::faccessat(libc::AT_FDCWD, c_path.as_ptr(), mode, libc::AT_EACCESS) };
    result == 0
}

#[cfg(not(unix))]
fn has_access(path: &Path, access: Access) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => match access {
            Access::Read => true,
            Access::Write => !meta.permissions().readonly(),
        },
        Err(_) => false,
    }
}

pub fn dir_readable(dir: &Path) -> bool {
    dir.is_dir() && has_access(dir, Access::Read)
}

pub fn file_writable(file: &Path) -> bool {
    file.is_file() && has_access(file, Access::Write)
}

pub fn dir_writable(dir: &Path) -> bool {
    dir.is_dir() && has_access(dir, Access::Write)
}

pub fn query(database_dir: &Path, config_file: &Path) -> PermissionStatus {
    let status = PermissionStatus {
        database_dir_readable: dir_readable(database_dir),
        config_file_writable: file_writable(config_file),
        database_dir_writable: dir_writable(database_dir),
    };
    tracing::debug!(
        ?status,
        database_dir = %database_dir.display(),
        config_file = %config_file.display(),
        "queried permissions"
    );
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_dir_and_config_are_consistent() {
        let tmp = TempDir::new().expect("temp dir");
        let config = tmp.path().join("config.toml");
        fs::write(&config, "database_dir = \"db\"\n").expect("write config");

        let status = query(tmp.path(), &config);
        assert!(status.consistent());
        assert_eq!(
            fs::read_to_string(&config).expect("read config"),
            "database_dir = \"db\"\n"
        );
    }

    #[test]
    fn querying_leaves_directory_untouched() {
        let tmp = TempDir::new().expect("temp dir");
        let config = tmp.path().join("config.toml");
        fs::write(&config, "").expect("write config");
        let dir_mtime = || {
            fs::metadata(tmp.path())
                .and_then(|m| m.modified())
                .expect("dir mtime")
        };
        let before = dir_mtime();
        let entries_before = fs::read_dir(tmp.path()).expect("list dir").count();

        let status = query(tmp.path(), &config);

        assert!(status.consistent());
        assert_eq!(dir_mtime(), before);
        assert_eq!(
            fs::read_dir(tmp.path()).expect("list dir").count(),
            entries_before
        );
    }

    #[test]
    fn missing_config_file_is_not_writable() {
        let tmp = TempDir::new().expect("temp dir");
        let status = query(tmp.path(), &tmp.path().join("absent.toml"));
        assert!(status.database_dir_readable);
        assert!(status.database_dir_writable);
        assert!(!status.config_file_writable);
        assert!(!status.consistent());
    }

    #[test]
    fn missing_database_dir_fails_both_dir_queries() {
        let tmp = TempDir::new().expect("temp dir");
        let config = tmp.path().join("config.toml");
        fs::write(&config, "").expect("write config");

        let status = query(&tmp.path().join("nope"), &config);
        assert!(!status.database_dir_readable);
        assert!(!status.database_dir_writable);
        assert!(status.config_file_writable);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_database_dir_is_inconsistent() {
        use std::os::unix::fs::PermissionsExt;

        // root bypasses mode bits
        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        let tmp = TempDir::new().expect("temp dir");
        let db_dir = tmp.path().join("db");
        fs::create_dir(&db_dir).expect("create db dir");
        let config = tmp.path().join("config.toml");
        fs::write(&config, "").expect("write config");
        fs::set_permissions(&db_dir, fs::Permissions::from_mode(0o555)).expect("chmod 555");

        let status = query(&db_dir, &config);
        fs::set_permissions(&db_dir, fs::Permissions::from_mode(0o755)).expect("restore mode");

        assert!(status.database_dir_readable);
        assert!(status.config_file_writable);
        assert!(!status.database_dir_writable);
        assert!(!status.consistent());
    }

    #[test]
    fn any_false_condition_is_inconsistent() {
        let status = PermissionStatus {
            database_dir_readable: true,
            config_file_writable: true,
            database_dir_writable: false,
        };
        assert!(!status.consistent());
    }
}
