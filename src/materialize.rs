use derive_builder::Builder;
use owo_colors::OwoColorize;
use std::{
    collections::BTreeMap,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    catalog::CatalogEntry,
    config::DEFAULT_COMPOSE,
    error::{Error, Result},
    instance::Instance,
};

/// Starts a generated stack.
pub trait Launcher {
    /// # Errors
    ///
    /// Returns [`Error::Start`] if the stack could not be started.
    fn start(&self, root: &Path) -> Result<()>;

    /// Command shown to the user for starting the stack by hand.
    fn manual_command(&self) -> String;
}

/// Runs `<compose> up -d` inside the stack root.
pub struct Compose {
    program: String,
    args: Vec<String>,
}

impl Compose {
    /// An empty `command` means `docker-compose`.
    #[must_use]
    pub fn new(command: &[String]) -> Self {
        match command.split_first() {
            Some((program, args)) => Compose {
                program: program.clone(),
                args: args.to_vec(),
            },
            None => Compose {
                program: DEFAULT_COMPOSE.to_owned(),
                args: Vec::new(),
            },
        }
    }
}

impl Launcher for Compose {
    fn start(&self, root: &Path) -> Result<()> {
        let start_error = |reason: String| Error::Start {
            program: self.program.clone(),
            reason,
        };

        crate::trace!("Running {} in {}", self.manual_command(), root.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .args(["up", "-d"])
            .current_dir(root)
            .status()
            .map_err(|e| start_error(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(start_error(status.to_string()))
        }
    }

    fn manual_command(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(String::as_str)
            .chain(["up", "-d"])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything needed to write one stack to disk.
#[derive(Debug, Builder)]
#[builder(pattern = "owned")]
pub struct GenerationRequest {
    entry: &'static CatalogEntry,
    instance: Instance,
    #[builder(setter(into))]
    root: PathBuf,
    #[builder(default)]
    auto_start: bool,
    /// How the root is printed in the summary.
    #[builder(setter(into, strip_option), default)]
    display_root: Option<String>,
}

impl GenerationRequest {
    #[must_use]
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::create_empty()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs_extra::dir::create_all(path, false).map_err(|source| Error::CreateDir {
        path: path.to_owned(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| Error::WriteFile {
        path: path.to_owned(),
        source,
    };

    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(write_error)?
        .write_all(contents.as_bytes())
        .map_err(write_error)
}

/// Writes the request's files under its root and starts the stack if asked.
///
/// Returns the written paths, relative to the root, in write order. A failed
/// start is reported as a warning and does not fail the call.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] or [`Error::WriteFile`] for the first path
/// that could not be created. Files written before it are left in place.
pub fn materialize(request: &GenerationRequest, launcher: &impl Launcher) -> Result<Vec<String>> {
    crate::info!("Generating files for {} stack...", request.entry.name);

    create_dir(&request.root)?;

    for dir in request.entry.dirs {
        create_dir(&request.root.join(dir))?;
    }

    let mut written = Vec::with_capacity(request.instance.files.len());
    for (relative, contents) in &request.instance.files {
        let path = request.root.join(relative);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }

        write_file(&path, contents)?;
        crate::trace!("Wrote {}", path.display());
        written.push(relative.clone());
    }

    let mut started = false;
    if request.auto_start {
        println!("\nStarting Docker services...");
        match launcher.start(&request.root) {
            Ok(()) => started = true,
            Err(e) => {
                crate::warn!(e);
                println!("You can start it manually with: {}", launcher.manual_command());
            }
        }
    }

    print!(
        "{}",
        Summary {
            entry: request.entry,
            root: request
                .display_root
                .clone()
                .unwrap_or_else(|| request.root.display().to_string()),
            files: &written,
            started,
            manual_command: launcher.manual_command(),
            ports: &request.instance.display_ports,
        }
    );

    Ok(written)
}

struct Summary<'a> {
    entry: &'a CatalogEntry,
    root: String,
    files: &'a [String],
    started: bool,
    manual_command: String,
    ports: &'a BTreeMap<String, String>,
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            "=== Stack Created Successfully ==="
                .if_supports_color(owo_colors::Stream::Stdout, |s| s
                    .style(owo_colors::Style::new().bold().green()))
        )?;
        writeln!(f, "Name: {}", self.entry.name)?;
        if !self.entry.description.is_empty() {
            writeln!(f, "Description: {}", self.entry.description)?;
        }
        writeln!(f, "Directory: {}", self.root)?;

        writeln!(f, "\nGenerated files:")?;
        for file in self.files {
            writeln!(f, "  - {file}")?;
        }

        if self.started {
            writeln!(f, "\nStack is starting...")?;
        } else {
            writeln!(f, "\nTo start the stack:")?;
            writeln!(f, "  cd {}", self.root)?;
            writeln!(f, "  {}", self.manual_command)?;
        }

        if !self.ports.is_empty() {
            writeln!(f, "\nAccess URLs:")?;
            for (service, port) in self.ports {
                writeln!(f, "  {service}: http://localhost:{port}")?;
            }
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry, values::Values};
    use std::cell::Cell;

    struct Recorder {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Recorder {
        fn new(fail: bool) -> Self {
            Recorder {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl Launcher for Recorder {
        fn start(&self, _root: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(Error::Start {
                    program: "docker-compose".to_owned(),
                    reason: "not installed".to_owned(),
                })
            } else {
                Ok(())
            }
        }

        fn manual_command(&self) -> String {
            "docker-compose up -d".to_owned()
        }
    }

    fn request(root: &Path, auto_start: bool) -> GenerationRequest {
        let entry = registry::resolve("observability").unwrap();
        GenerationRequest::builder()
            .entry(entry)
            .instance(Instance::from_entry(entry))
            .root(root.join(entry.root_dir))
            .auto_start(auto_start)
            .build()
            .unwrap()
    }

    #[test]
    fn writes_dirs_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), false);
        let launcher = Recorder::new(false);

        let written = materialize(&req, &launcher).unwrap();

        assert_eq!(written.len(), 5);
        for file in &written {
            assert!(req.root().join(file).is_file(), "{file} missing");
        }
        assert!(req.root().join("prometheus/data").is_dir());
        assert!(req.root().join("grafana/provisioning/datasources").is_dir());
        assert_eq!(launcher.calls.get(), 0);
    }

    #[test]
    fn existing_tree_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), false);
        std::fs::create_dir_all(req.root()).unwrap();
        std::fs::write(req.root().join("README.md"), "stale and much longer than needed ".repeat(500))
            .unwrap();

        materialize(&req, &Recorder::new(false)).unwrap();
        materialize(&req, &Recorder::new(false)).unwrap();

        let readme = std::fs::read_to_string(req.root().join("README.md")).unwrap();
        assert!(readme.starts_with("# Observability Stack"));
        assert!(!readme.contains("stale"));
    }

    #[test]
    fn failed_start_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = Recorder::new(true);

        let with_start = materialize(&request(dir.path(), true), &launcher).unwrap();
        let without = materialize(&request(dir.path(), false), &launcher).unwrap();

        assert_eq!(launcher.calls.get(), 1);
        assert_eq!(with_start, without);
    }

    #[test]
    fn write_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let entry = registry::resolve("mariadb").unwrap();
        let root = dir.path().join(entry.root_dir);
        // A directory where a file should go.
        std::fs::create_dir_all(root.join("README.md")).unwrap();

        let instance = Instance::from_entry(entry)
            .substitute_variables(&Values::from([("MYSQL_DATABASE", "db")]));
        let req = GenerationRequest::builder()
            .entry(entry)
            .instance(instance)
            .root(root.clone())
            .build()
            .unwrap();

        let err = materialize(&req, &Recorder::new(false)).unwrap_err();

        assert!(matches!(&err, Error::WriteFile { path, .. } if path == &root.join("README.md")));
        // Written before the failure, kept after it.
        assert!(root.join("docker-compose.yml").is_file());
    }

    #[test]
    fn summary_lists_urls() {
        let entry = registry::resolve("mariadb").unwrap();
        let ports = BTreeMap::from([("phpmyadmin".to_owned(), "8080".to_owned())]);
        let files = ["README.md".to_owned()];

        let text = Summary {
            entry,
            root: "~/mariadb-stack".to_owned(),
            files: &files,
            started: false,
            manual_command: "docker-compose up -d".to_owned(),
            ports: &ports,
        }
        .to_string();

        assert!(text.contains("Name: MariaDB"));
        assert!(text.contains("  - README.md"));
        assert!(text.contains("  cd ~/mariadb-stack"));
        assert!(text.contains("phpmyadmin: http://localhost:8080"));
    }

    #[test]
    fn compose_command_line() {
        let compose = Compose::new(&["docker".to_owned(), "compose".to_owned()]);

        assert_eq!(compose.manual_command(), "docker compose up -d");
    }

    #[test]
    fn empty_compose_command_falls_back_to_docker_compose() {
        let compose = Compose::new(&[]);

        assert_eq!(compose.manual_command(), "docker-compose up -d");
        assert_eq!(compose.manual_command(), Recorder::new(false).manual_command());
    }

    #[test]
    fn incomplete_request_is_an_error() {
        let err: Error = GenerationRequest::builder()
            .auto_start(true)
            .build()
            .unwrap_err()
            .into();

        assert!(matches!(err, Error::IncompleteRequest(_)));
    }

    #[test]
    fn missing_orchestrator_is_a_start_error() {
        let dir = tempfile::tempdir().unwrap();
        let compose = Compose::new(&["autostack-no-such-orchestrator".to_owned()]);

        let err = compose.start(dir.path()).unwrap_err();

        assert!(matches!(err, Error::Start { ref program, .. } if program == "autostack-no-such-orchestrator"));
    }
}
