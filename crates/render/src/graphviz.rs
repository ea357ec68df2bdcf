use crate::error::{RenderError, Result};
use crate::style::LayoutHints;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A Graphviz layout program invoked as a subprocess
pub struct Graphviz {
    program: String,
    executable: PathBuf,
    format: String,
}

impl Graphviz {
    pub fn new(hints: &LayoutHints) -> Self {
        let executable = match &hints.binary_dir {
            Some(dir) => dir.join(&hints.program),
            None => PathBuf::from(&hints.program),
        };
        Self {
            program: hints.program.clone(),
            executable,
            format: hints.format.clone(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Make sure the layout program can be started. Returns its version line.
    pub fn check_available(&self) -> Result<String> {
        let output = Command::new(&self.executable)
            .arg("-V")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.unavailable(source))?;

        // Graphviz prints its version on stderr
        let version = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(RenderError::LayoutFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: version,
            });
        }

        log::debug!("Using {}", version);
        Ok(version)
    }

    /// Lay out `dot` source and write the drawing to `output`
    pub fn render(&self, dot: &str, output: &Path) -> Result<()> {
        if output.as_os_str().is_empty() {
            return Err(RenderError::InvalidOutput(output.to_path_buf()));
        }
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut child = Command::new(&self.executable)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.unavailable(source))?;

        // Exit status takes precedence over a failed stdin write
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output()?;
        if !result.status.success() {
            return Err(RenderError::LayoutFailed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        written?;

        log::info!("Figure saved to {}", output.display());
        Ok(())
    }

    fn unavailable(&self, source: std::io::Error) -> RenderError {
        RenderError::GraphvizUnavailable {
            program: self.program.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_program() -> LayoutHints {
        LayoutHints {
            program: "refnet-no-such-layout-program".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn executable_honours_binary_dir() {
        let hints = LayoutHints {
            binary_dir: Some(PathBuf::from("/opt/graphviz/bin")),
            ..Default::default()
        };
        assert_eq!(
            Graphviz::new(&hints).executable(),
            Path::new("/opt/graphviz/bin/sfdp")
        );
    }

    #[test]
    fn missing_program_fails_capability_check() {
        let err = Graphviz::new(&missing_program()).check_available().unwrap_err();
        assert!(matches!(err, RenderError::GraphvizUnavailable { .. }));
    }

    #[test]
    fn missing_program_fails_render() {
        let temp = tempfile::tempdir().unwrap();
        let err = Graphviz::new(&missing_program())
            .render("digraph {}", &temp.path().join("out.svg"))
            .unwrap_err();
        assert!(matches!(err, RenderError::GraphvizUnavailable { .. }));
    }

    #[test]
    fn unavailable_error_names_the_program() {
        let hints = LayoutHints {
            binary_dir: Some(PathBuf::from("/nonexistent/graphviz/bin")),
            ..Default::default()
        };
        let err = Graphviz::new(&hints).check_available().unwrap_err();
        match err {
            RenderError::GraphvizUnavailable { program, .. } => assert_eq!(program, "sfdp"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn early_exit_reports_layout_failure() {
        // `false` exits without reading stdin, so a large input hits a closed pipe
        let hints = LayoutHints {
            program: "false".to_string(),
            ..Default::default()
        };
        let temp = tempfile::tempdir().unwrap();
        let dot = format!("digraph {{ {} }}", "\"node\";".repeat(200_000));

        let err = Graphviz::new(&hints)
            .render(&dot, &temp.path().join("out.svg"))
            .unwrap_err();
        assert!(
            matches!(&err, RenderError::LayoutFailed { program, .. } if program == "false"),
            "{err}"
        );
    }
}
