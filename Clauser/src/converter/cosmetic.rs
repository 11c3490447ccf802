//! Cosmetic tag converters
//!
//! Takes a spreadsheet of country tags and cosmetic tags and produces the
//! two files the game wants: a localisation `.yml` naming each cosmetic
//! tag (plus its `_DEF` definite form), and a `startup_cosmetic_tag`
//! script snippet assigning the tags at game start.

use std::fs;
use std::path::Path;

use super::tsv::TsvTable;
use crate::error::Result;
use crate::formats::localization::write_localization;

/// Generate a localisation file from a TSV export.
///
/// Each row with both cells present contributes a `TAG: "text"` and a
/// `TAG_DEF: "text"` entry; rows with a blank cell are skipped. Returns
/// the number of rows converted.
pub fn write_localization_file(
    tsv_path: &Path,
    output: &Path,
    language: &str,
    tag_column: &str,
    text_column: &str,
) -> Result<usize> {
    let table = TsvTable::read(tsv_path)?;
    let tag_index = table.column(tag_column)?;
    let text_index = table.column(text_column)?;

    let mut entries = Vec::new();
    let mut converted = 0;
    for row in table.rows() {
        let (Some(tag), Some(text)) = (table.cell(row, tag_index), table.cell(row, text_index))
        else {
            continue;
        };
        entries.push((tag.to_string(), text.to_string()));
        entries.push((format!("{tag}_DEF"), text.to_string()));
        converted += 1;
    }

    write_localization(output, language, &entries)?;
    Ok(converted)
}

/// Generate a `startup_cosmetic_tag` script snippet from a TSV export.
///
/// Returns the number of rows converted.
pub fn write_startup_script(
    tsv_path: &Path,
    output: &Path,
    tag_column: &str,
    cosmetic_column: &str,
) -> Result<usize> {
    let table = TsvTable::read(tsv_path)?;
    let tag_index = table.column(tag_column)?;
    let cosmetic_index = table.column(cosmetic_column)?;

    let mut out = String::from("startup_cosmetic_tag = {\n");
    let mut converted = 0;
    for row in table.rows() {
        let (Some(tag), Some(cosmetic)) =
            (table.cell(row, tag_index), table.cell(row, cosmetic_index))
        else {
            continue;
        };
        out.push_str(&format!("    {tag} = {{\n"));
        out.push_str(&format!("        set_cosmetic_tag = {cosmetic}\n"));
        out.push_str("    }\n");
        converted += 1;
    }
    out.push_str("}\n");

    fs::write(output, out)?;
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::formats::localization::parse_localization;

    const TSV: &str = "tag\tcosmetic_tag\tlocalisation\nJAP\tJAP_empire\tEmpire of Japan\nGER\tGER_reich\t\nMAN\tMAN_state\tManchukuo\n";

    #[test]
    fn localization_file_gets_tag_and_def_entries() {
        let dir = tempfile::tempdir().unwrap();
        let tsv = dir.path().join("input.tsv");
        let output = dir.path().join("cosmetic_l_english.yml");
        fs::write(&tsv, TSV).unwrap();

        let converted = write_localization_file(
            &tsv,
            &output,
            "english",
            "cosmetic_tag",
            "localisation",
        )
        .unwrap();
        assert_eq!(converted, 2);

        let table = parse_localization(&fs::read_to_string(&output).unwrap());
        assert_eq!(table.get("JAP_empire"), Some("Empire of Japan"));
        assert_eq!(table.get("JAP_empire_DEF"), Some("Empire of Japan"));
        assert_eq!(table.get("MAN_state"), Some("Manchukuo"));
        // The row with a blank localisation cell is skipped entirely.
        assert_eq!(table.get("GER_reich"), None);
    }

    #[test]
    fn startup_script_matches_game_shape() {
        let dir = tempfile::tempdir().unwrap();
        let tsv = dir.path().join("input.tsv");
        let output = dir.path().join("startup_cosmetic_tag.txt");
        fs::write(&tsv, TSV).unwrap();

        let converted =
            write_startup_script(&tsv, &output, "tag", "cosmetic_tag").unwrap();
        assert_eq!(converted, 3);

        let expected = "\
startup_cosmetic_tag = {
    JAP = {
        set_cosmetic_tag = JAP_empire
    }
    GER = {
        set_cosmetic_tag = GER_reich
    }
    MAN = {
        set_cosmetic_tag = MAN_state
    }
}
";
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }
}
