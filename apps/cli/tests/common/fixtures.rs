//! Test fixtures and factory functions for creating export content.

/// Header block as Anki writes it on export.
pub const EXPORT_HEADERS: &str = "#separator:tab\n#html:true\n#guid column:1\n#notetype column:2\n#deck column:3\n#tags column:7\n";

/// One complete single-line record.
pub fn record(id: &str, front: &str, back: &str, audio: &str) -> String {
    format!(
        "{}\t\"Basic (and reversed card)\"\tCroatian\t<td>{}</td>\t<td>{}</td>\t[sound:{}]\tvocab",
        id, front, back, audio
    )
}

/// Generate an export with `num_records` complete records.
pub fn sample_export(num_records: usize) -> String {
    let body = (0..num_records)
        .map(|i| {
            record(
                &format!("guid{}", i + 1),
                &format!("riječ {}", i + 1),
                &format!("word {}", i + 1),
                &format!("w{}.mp3", i + 1),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{}\n", EXPORT_HEADERS, body)
}
