//! Country history templating
//!
//! Rewrites every country history file under a directory to its first
//! line (the capital declaration, which is per-country) followed by a
//! shared template body. Used to reset a whole roster of countries to a
//! common starting setup.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Summary of a template application run.
#[derive(Debug, Clone)]
pub struct TemplateReport {
    /// Files rewritten.
    pub rewritten: usize,
    /// Files that could not be read or written; each failure is also
    /// logged. Nothing is rolled back.
    pub failed: Vec<(PathBuf, String)>,
}

/// Apply `template` to every `.txt` file under `countries_dir`
/// (recursive). Each file keeps only its first line, then gets the
/// template body appended.
pub fn apply_country_template(countries_dir: &Path, template: &Path) -> Result<TemplateReport> {
    let body = fs::read_to_string(template)?;

    let mut paths: Vec<PathBuf> = WalkDir::new(countries_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    let mut report = TemplateReport {
        rewritten: 0,
        failed: Vec::new(),
    };
    for path in paths {
        match rewrite_file(&path, &body) {
            Ok(()) => report.rewritten += 1,
            Err(e) => {
                tracing::warn!("failed to template {}: {e}", path.display());
                report.failed.push((path, e.to_string()));
            }
        }
    }
    Ok(report)
}

fn rewrite_file(path: &Path, body: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let first_line = content.lines().next().unwrap_or_default();

    let mut out = String::with_capacity(first_line.len() + 1 + body.len());
    out.push_str(first_line);
    out.push('\n');
    out.push_str(body);
    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_line_and_appends_template() {
        let dir = tempfile::tempdir().unwrap();
        let countries = dir.path().join("countries");
        fs::create_dir(&countries).unwrap();
        fs::write(
            countries.join("JAP - Japan.txt"),
            "capital = 282\noob = \"JAP_1936\"\nset_research_slots = 4\n",
        )
        .unwrap();
        fs::write(countries.join("GER - Germany.txt"), "capital = 64\n").unwrap();

        let template = dir.path().join("template.txt");
        fs::write(&template, "set_politics = {\n\truling_party = neutrality\n}\n").unwrap();

        let report = apply_country_template(&countries, &template).unwrap();
        assert_eq!(report.rewritten, 2);
        assert!(report.failed.is_empty());

        let japan = fs::read_to_string(countries.join("JAP - Japan.txt")).unwrap();
        assert_eq!(
            japan,
            "capital = 282\nset_politics = {\n\truling_party = neutrality\n}\n"
        );
    }
}
