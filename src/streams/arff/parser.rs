use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};
use std::io::{BufRead, Error, ErrorKind, Seek};
use tracing::{trace, warn};

const MISSING: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RowMode {
    /// Every value, label included, must be declared in its attribute's domain.
    Training,
    /// Attribute values may fall outside their domain and the label may be `?`.
    Query,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) struct ParsedRow {
    pub values: Vec<String>,
    pub label: Option<String>,
}

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('%')
}

fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.trim_start()
        .get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
}

/// Reads `@relation` and `@attribute` lines up to `@data`. Returns the header
/// and the byte offset of the first data line.
pub(super) fn parse_header<R: BufRead + Seek>(
    reader: &mut R,
) -> Result<(InstanceHeader, u64), Error> {
    let mut relation: Option<String> = None;
    let mut attributes: Vec<NominalAttribute> = Vec::new();
    let mut line = String::new();

    let data_start_pos = loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "ARFF file ended before @data",
            ));
        }
        if is_comment_or_empty(&line) {
            continue;
        }

        if starts_with_keyword(&line, "@relation") {
            let raw = line.trim()["@relation".len()..].trim();
            relation = Some(strip_surrounding_quotes(raw).to_string());
        } else if starts_with_keyword(&line, "@attribute") {
            let (name, values) = parse_attribute_line(&line)?;
            let attribute = NominalAttribute::with_values(name, values);
            trace!(declaration = %attribute.arff_representation(), "declared attribute");
            attributes.push(attribute);
        } else if starts_with_keyword(&line, "@data") {
            break reader.stream_position()?;
        } else {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Unsupported header directive: {}", line.trim()),
            ));
        }
    };

    let header = InstanceHeader::new(
        relation.unwrap_or_else(|| "unnamed_relation".to_string()),
        attributes,
    )
    .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    Ok((header, data_start_pos))
}

/// Parses `@attribute name {v1, v2, ...}`. Only nominal attributes are accepted.
pub(super) fn parse_attribute_line(line: &str) -> Result<(String, Vec<String>), Error> {
    if !starts_with_keyword(line, "@attribute") {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "Line is not '@attribute'",
        ));
    }
    let rest = line.trim()["@attribute".len()..].trim();

    let (name, after_name) = match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let end = rest[1..].find(quote).map(|i| i + 1).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidData,
                    "Attribute name without closing quote marks",
                )
            })?;
            (rest[1..end].to_string(), rest[end + 1..].trim())
        }
        _ => {
            let (name, after) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Attribute without a type"))?;
            (name.to_string(), after.trim())
        }
    };

    if name.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "Empty attribute name"));
    }

    let Some(inside) = after_name.strip_prefix('{') else {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Attribute kind not supported for '{name}': {after_name} (nominal only)"),
        ));
    };
    let close = inside
        .rfind('}')
        .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Nominal set without closing '}'"))?;

    let values: Vec<String> = split_csv_preserving_quotes(&inside[..close])
        .iter()
        .map(|s| strip_surrounding_quotes(s.trim()).to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if values.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "Empty nominal domain"));
    }
    if values.iter().any(|v| v == MISSING) {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("'?' cannot be declared as a value of '{name}'"),
        ));
    }

    Ok((name, values))
}

pub(super) fn parse_row(
    header: &InstanceHeader,
    line: &str,
    mode: RowMode,
) -> Result<ParsedRow, Error> {
    let tokens = split_csv_preserving_quotes(line);
    if tokens.len() != header.number_of_attributes() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Number of columns ({}) differs from number of attributes ({})",
                tokens.len(),
                header.number_of_attributes()
            ),
        ));
    }

    let class_index = header.class_index();
    let mut values = Vec::with_capacity(class_index);
    let mut label = None;

    for (idx, (raw, attr)) in tokens.iter().zip(header.attributes()).enumerate() {
        let raw = raw.trim();
        let is_class = idx == class_index;

        if raw == MISSING {
            if is_class && mode == RowMode::Query {
                continue;
            }
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Missing value for attribute '{}'", attr.name()),
            ));
        }

        let value = strip_surrounding_quotes(raw);
        if !attr.contains_value(value) {
            match mode {
                RowMode::Training => {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!(
                            "Nominal value '{value}' not found in domain of attribute '{}'",
                            attr.name()
                        ),
                    ));
                }
                RowMode::Query => {
                    warn!(attribute = attr.name(), value, "value outside declared domain");
                }
            }
        }

        if is_class {
            label = Some(value.to_string());
        } else {
            values.push(value.to_string());
        }
    }

    Ok(ParsedRow { values, label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind};

    fn header() -> InstanceHeader {
        InstanceHeader::new(
            "r".into(),
            vec![
                NominalAttribute::with_values("Brand".into(), vec!["Oppo".into(), "Xiaomi".into()]),
                NominalAttribute::with_values("Beli".into(), vec!["Ya".into(), "Tidak".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn parse_attribute_line_reads_name_and_domain() {
        let (name, values) =
            parse_attribute_line("@attribute Harga {Murah, Sedang, Mahal}").unwrap();
        assert_eq!(name, "Harga");
        assert_eq!(values, vec!["Murah", "Sedang", "Mahal"]);
    }

    #[test]
    fn parse_attribute_line_quoted_name_and_values() {
        let (name, values) =
            parse_attribute_line("@ATTRIBUTE 'screen size' {'5, small', \"6 inch\"}").unwrap();
        assert_eq!(name, "screen size");
        assert_eq!(values, vec!["5, small", "6 inch"]);
    }

    #[test]
    fn parse_attribute_line_trailing_comma_nominal_domain() {
        let (_, values) = parse_attribute_line("@attribute a {x, }").unwrap();
        assert_eq!(values, vec!["x"]);
    }

    #[test]
    fn parse_attribute_line_rejections() {
        for line in [
            "@attribute outlook",
            "@attribute 'bad {x, y}",
            "@relation r",
            "@attribute a {}",
            "@attribute a {   }",
            "@attribute a {x, y",
            "@attribute temperature numeric",
            "@attribute note string",
            "@attribute a {x, ?}",
        ] {
            let err = parse_attribute_line(line).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{line}");
        }
    }

    #[test]
    fn parse_header_stops_after_data() {
        let text = "% comment
@relation 'phones'

@attribute Brand {Oppo}
@attribute Beli {Ya}
@data
Oppo,Ya
";
        let mut cursor = Cursor::new(text.as_bytes());
        let (h, pos) = parse_header(&mut cursor).unwrap();
        assert_eq!(h.relation_name(), "phones");
        assert_eq!(h.class_attribute().name(), "Beli");
        assert_eq!(&text[pos as usize..], "Oppo,Ya\n");
    }

    #[test]
    fn parse_header_rejects_duplicates_and_headerless_files() {
        let mut dup = Cursor::new("@attribute a {x}\n@attribute a {y}\n@data\n".as_bytes());
        let err = parse_header(&mut dup).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("'a' is declared more than once"));

        let mut none = Cursor::new("@relation r\n@data\n".as_bytes());
        assert_eq!(parse_header(&mut none).unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn training_rows_must_stay_in_domain() {
        let h = header();
        let row = parse_row(&h, "Oppo, 'Ya'", RowMode::Training).unwrap();
        assert_eq!(row.values, vec!["Oppo"]);
        assert_eq!(row.label.as_deref(), Some("Ya"));

        for line in ["Nokia,Ya", "Oppo,?", "?,Ya", "Oppo"] {
            let err = parse_row(&h, line, RowMode::Training).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{line}");
        }
    }

    #[test]
    fn query_rows_accept_unseen_values_and_missing_label() {
        let h = header();
        let row = parse_row(&h, "Nokia,?", RowMode::Query).unwrap();
        assert_eq!(row.values, vec!["Nokia"]);
        assert_eq!(row.label, None);

        let err = parse_row(&h, "?,Ya", RowMode::Query).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
