use anyhow::Result;
use docket_core::ingest::RawRow;

/// Column roles recognized in the header row. Matching is case-insensitive
/// and tolerant of the space/underscore variants spreadsheets export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Category,
    Priority,
    Input,
    ExpectedOutput,
    Ignored,
}

fn column_role(header: &str) -> Column {
    match header.trim().to_ascii_lowercase().replace(' ', "_").as_str() {
        "name" => Column::Name,
        "category" => Column::Category,
        "priority" => Column::Priority,
        "input" => Column::Input,
        "expected_output" | "expectedoutput" | "expected" => Column::ExpectedOutput,
        _ => Column::Ignored,
    }
}

/// Parses delimited text (comma or tab) into raw rows. The first record is
/// the header; blank records are skipped; columns outside the known set
/// are ignored.
pub fn parse(text: &str, delimiter: char) -> Result<Vec<RawRow>> {
    let mut records = split_records(text, delimiter)?.into_iter();

    let header = match records.next() {
        Some(h) => h,
        None => return Ok(Vec::new()),
    };
    let roles: Vec<Column> = header.iter().map(|h| column_role(h)).collect();
    if !roles.contains(&Column::Name)
        || !roles.contains(&Column::Category)
        || !roles.contains(&Column::Input)
    {
        anyhow::bail!(
            "header row must contain Name, Category and Input columns (got: {})",
            header.join(", ")
        );
    }

    let mut rows = Vec::new();
    for fields in records {
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::default();
        for (i, value) in fields.into_iter().enumerate() {
            match roles.get(i).copied().unwrap_or(Column::Ignored) {
                Column::Name => row.name = value,
                Column::Category => row.category = value,
                Column::Priority => row.priority = value,
                Column::Input => row.input = value,
                Column::ExpectedOutput => row.expected_output = value,
                Column::Ignored => {}
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Splits delimited text into records of fields. Fields may be quoted with
/// double quotes; a doubled quote inside a quoted field is an escaped
/// quote, and newlines inside quoted fields belong to the field. Unquoted
/// fields are trimmed.
fn split_records(text: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut field_quoted = false;
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() && !field_quoted => {
                    in_quotes = true;
                    field_quoted = true;
                }
                c if c == delimiter => {
                    fields.push(finish_field(&mut field, &mut field_quoted));
                }
                '\r' => {
                    // CRLF is handled at the '\n'
                }
                '\n' => {
                    fields.push(finish_field(&mut field, &mut field_quoted));
                    records.push(std::mem::take(&mut fields));
                }
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        anyhow::bail!("unterminated quoted field");
    }
    if !field.is_empty() || field_quoted || !fields.is_empty() {
        fields.push(finish_field(&mut field, &mut field_quoted));
        records.push(fields);
    }

    Ok(records)
}

fn finish_field(field: &mut String, quoted: &mut bool) -> String {
    let raw = std::mem::take(field);
    let value = if *quoted {
        raw
    } else {
        raw.trim().to_string()
    };
    *quoted = false;
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_by_header_name() {
        let text = "Name,Category,Priority,Input,Expected Output\n\
                    Product Inquiry,Sales,medium,What does the premium plan include?,Analytics and support\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Product Inquiry");
        assert_eq!(rows[0].category, "Sales");
        assert_eq!(rows[0].priority, "medium");
        assert_eq!(rows[0].input, "What does the premium plan include?");
        assert_eq!(rows[0].expected_output, "Analytics and support");
    }

    #[test]
    fn header_order_does_not_matter() {
        let text = "input,name,category\nhow do I pay?,Billing Question,Billing\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows[0].name, "Billing Question");
        assert_eq!(rows[0].input, "how do I pay?");
        assert_eq!(rows[0].category, "Billing");
        assert_eq!(rows[0].priority, "");
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_escaped_quotes() {
        let text = "Name,Category,Input\n\
                    \"Refund, please\",Billing,\"She said \"\"no refunds\"\" twice\"\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows[0].name, "Refund, please");
        assert_eq!(rows[0].input, "She said \"no refunds\" twice");
    }

    #[test]
    fn quoted_fields_may_contain_newlines() {
        let text = "Name,Category,Input\nCase,Support,\"line one\nline two\"\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows[0].input, "line one\nline two");
    }

    #[test]
    fn unquoted_fields_are_trimmed_and_crlf_tolerated() {
        let text = "Name,Category,Input\r\n  Spaced Name  , Billing ,  question  \r\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows[0].name, "Spaced Name");
        assert_eq!(rows[0].category, "Billing");
        assert_eq!(rows[0].input, "question");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "Name,Category,Input\n\na,b,c\n\n";
        let rows = parse(text, ',').unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn missing_required_headers_fail() {
        let err = parse("Name,Priority\nx,high\n", ',').unwrap_err();
        assert!(err.to_string().contains("header row"));
    }

    #[test]
    fn unterminated_quote_fails() {
        let err = parse("Name,Category,Input\n\"open,Billing,q\n", ',').unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn tab_delimited_works() {
        let text = "Name\tCategory\tInput\na\tb\tc\n";
        let rows = parse(text, '\t').unwrap();
        assert_eq!(rows[0].category, "b");
    }
}
