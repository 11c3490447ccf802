//! `statekit convert` - the stand-alone converters

use std::path::Path;

use clauser::converter::{
    apply_country_template, write_localization_file, write_startup_script,
};

pub fn loc(
    input: &Path,
    output: &Path,
    language: &str,
    tag_column: &str,
    text_column: &str,
) -> anyhow::Result<()> {
    let converted =
        write_localization_file(input, output, language, tag_column, text_column)?;
    println!(
        "Wrote {} localisation entries ({} rows) to {}",
        converted * 2,
        converted,
        output.display()
    );
    Ok(())
}

pub fn startup(
    input: &Path,
    output: &Path,
    tag_column: &str,
    cosmetic_column: &str,
) -> anyhow::Result<()> {
    let converted = write_startup_script(input, output, tag_column, cosmetic_column)?;
    println!(
        "Wrote startup script for {} countries to {}",
        converted,
        output.display()
    );
    Ok(())
}

pub fn country_template(dir: &Path, template: &Path) -> anyhow::Result<()> {
    let report = apply_country_template(dir, template)?;
    println!("Rewrote {} country files", report.rewritten);
    for (path, message) in &report.failed {
        println!("  FAILED {}: {}", path.display(), message);
    }
    Ok(())
}
