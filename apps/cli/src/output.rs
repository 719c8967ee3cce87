//! Output path derivation and overwrite confirmation.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// `<stem><suffix><ext>` next to the input. JSON output always gets `.json`.
pub fn derive_output_path(input: &Path, suffix: &str, json: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = if json {
        Some("json".to_string())
    } else {
        input.extension().map(|e| e.to_string_lossy().into_owned())
    };

    let name = match ext {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

/// Ask before replacing `path`. Only `y`/`yes` (any case) confirms.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    mut input: R,
    mut prompt: W,
) -> io::Result<bool> {
    writeln!(prompt, "Output file '{}' already exists.", path.display())?;
    write!(prompt, "Do you want to overwrite it? (y/N): ")?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(
            derive_output_path(Path::new("/tmp/deck.txt"), "-CLEANED", false),
            PathBuf::from("/tmp/deck-CLEANED.txt")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(
            derive_output_path(Path::new("deck"), "-CLEANED", false),
            PathBuf::from("deck-CLEANED")
        );
    }

    #[test]
    fn json_replaces_extension() {
        assert_eq!(
            derive_output_path(Path::new("dir/deck.txt"), "-CLEANED", true),
            PathBuf::from("dir/deck-CLEANED.json")
        );
    }

    #[test]
    fn only_yes_confirms() {
        let path = Path::new("out.txt");
        for (answer, expected) in [
            ("y\n", true),
            ("YES\n", true),
            (" yes \n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("yep\n", false),
        ] {
            let mut prompt = Vec::new();
            let confirmed = confirm_overwrite(path, answer.as_bytes(), &mut prompt).unwrap();
            assert_eq!(confirmed, expected, "answer {:?}", answer);
            assert!(String::from_utf8(prompt).unwrap().contains("out.txt"));
        }
    }
}
