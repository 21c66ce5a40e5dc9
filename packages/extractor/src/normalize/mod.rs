//! Line normalizer for raw legal text.
//!
//! Turns the plain-text body of a published act into clean logical lines:
//! soft wraps are folded, glued words are split apart, page furniture is
//! dropped, and lines broken mid-sentence are joined back.

mod cleanup;
mod join;
mod segment;

pub use cleanup::{clean_line, fix_comma_spacing};
pub use join::{decide_join, join_lines};
pub use segment::{fold_segments, segment, split_concatenations, Boundary, Segment};

/// Normalize raw text into logical lines.
///
/// Never fails; text with no usable content yields an empty vector.
///
/// # Examples
/// ```
/// use legisbr_extractor::normalize::normalize;
///
/// let lines = normalize("Art. 1º Esta Lei dispõe sobre \nregistro de armas.\n\nArt. 2º Revoga-se.");
/// assert_eq!(
///     lines,
///     vec!["Art. 1º Esta Lei dispõe sobre registro de armas.", "Art. 2º Revoga-se."]
/// );
/// ```
#[must_use]
pub fn normalize(raw_text: &str) -> Vec<String> {
    let folded = fold_segments(segment(raw_text));
    join_lines(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "Texto compilado\r\n\nLEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003.\n\n\
        Dispõe sobre registro, posse e comercialização de armas de fogo e munição, \n\
        sobre o Sistema Nacional de Armas\u{a0}\u{2013} Sinarm.\n\n\
        Art. 1º O Sistema Nacional de Armas \u{2013} Sinarm, instituído no Ministério da Justiça,\n\
        no âmbito da Polícia Federal, tem circunscrição em todo o território nacional.\n\
        Art. 2º Ao Sinarm compete:\n\
        I \u{2013} identificar as características e a propriedade de armas de fogo;\n\
        II \u{2013} cadastrar as armas de fogo produzidas,\n\
        importadas e vendidas no País;\n";

    #[test]
    fn test_normalize_document() {
        assert_eq!(
            normalize(RAW),
            vec![
                "LEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003.",
                "Dispõe sobre registro, posse e comercialização de armas de fogo e munição, sobre o Sistema Nacional de Armas \u{2013} Sinarm.",
                "Art. 1º O Sistema Nacional de Armas \u{2013} Sinarm, instituído no Ministério da Justiça, no âmbito da Polícia Federal, tem circunscrição em todo o território nacional.",
                "Art. 2º Ao Sinarm compete:",
                "I \u{2013} identificar as características e a propriedade de armas de fogo;",
                "II \u{2013} cadastrar as armas de fogo produzidas, importadas e vendidas no País;",
            ]
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(RAW);
        let twice = normalize(&once.join("\n"));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize(" \n\u{a0}\n\t").is_empty());
    }
}
