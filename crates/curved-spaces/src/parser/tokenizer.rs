//! BOM/comment stripping and float-stream tokenizing for generator files.

use super::ParseError;

const MIRRORED_RIGHT_ANGLED_DODECAHEDRON: &str = "#\tMirrored Right-Angled Dodecahedron";
const SEIFERT_WEBER_DODECAHEDRAL_SPACE: &str = "#\tSeifert-Weber Dodecahedral Space";

/// Strips a leading UTF-8 BOM, validates 7-bit ASCII, strips `#`-to-end-of-line
/// comments, and reports whether a magic "large volume" comment was seen.
pub(super) fn strip_comments(raw: &[u8]) -> Result<(String, bool), ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::MatrixFileWrongUnicode)?;
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    if let Some(position) = text.find(|c: char| !c.is_ascii()) {
        return Err(ParseError::MatrixFileBadCharacter { position });
    }

    let mut code = String::with_capacity(text.len());
    let mut large_volume_hint = false;

    for line in text.split_inclusive('\n') {
        match line.find('#') {
            Some(hash) => {
                let comment = line[hash..].trim_end_matches(['\r', '\n']);
                if comment == MIRRORED_RIGHT_ANGLED_DODECAHEDRON || comment == SEIFERT_WEBER_DODECAHEDRAL_SPACE {
                    large_volume_hint = true;
                }
                code.push_str(&line[..hash]);
                code.push(' ');
            }
            None => code.push_str(line),
        }
    }

    if let Some(position) = code.find(|c: char| !(c.is_ascii_digit() || "+-.eE \t\r\n".contains(c))) {
        return Err(ParseError::MatrixFileBadCharacter { position });
    }

    Ok((code, large_volume_hint))
}

/// Splits whitespace-separated decimal tokens into floats.
pub(super) fn tokenize_floats(code: &str) -> Result<Vec<f64>, ParseError> {
    code.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| ParseError::MatrixFileMalformed {
                detail: "a token is not a valid decimal number",
            })
        })
        .collect()
}
