//! Gettext .po file parser
//!
//! Reads the subset of the `.po` format the console ships: comments,
//! `msgctxt`, `msgid`, `msgstr` and multi-line continuation strings.
//! Plural entries are rejected.

use crate::MessageCatalog;
use std::io::{BufRead, BufReader};

/// Errors that can occur during .po file parsing
#[derive(Debug, thiserror::Error)]
pub enum PoParseError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Parse error at line {line}: {message}")]
	Parse { line: usize, message: String },
	#[error("Unsupported entry at line {line}: {feature}")]
	Unsupported { line: usize, feature: &'static str },
}

/// Entry in a .po file
#[derive(Debug, Clone, Default)]
struct PoEntry {
	msgctxt: Option<String>,
	msgid: Option<String>,
	msgstr: Option<String>,
}

/// Which string the next continuation line extends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
	None,
	Context,
	Id,
	Str,
}

impl PoEntry {
	fn has_started(&self) -> bool {
		self.msgctxt.is_some() || self.msgid.is_some()
	}
}

/// Parse a .po file from a reader
///
/// # Examples
///
/// ```
/// use admin_console_i18n::po_parser::parse_po_file;
///
/// let po = "msgid \"Required field\"\nmsgstr \"必須入力項目です\"\n";
/// let catalog = parse_po_file(po.as_bytes(), "ja").unwrap();
/// assert_eq!(catalog.get("Required field"), Some("必須入力項目です"));
/// ```
pub fn parse_po_file<R: std::io::Read>(
	reader: R,
	locale: &str,
) -> Result<MessageCatalog, PoParseError> {
	let buf_reader = BufReader::new(reader);
	let mut catalog = MessageCatalog::new(locale);
	let mut current_entry = PoEntry::default();
	let mut segment = Segment::None;
	let mut line_no = 0;

	for line in buf_reader.lines() {
		line_no += 1;
		let line = line?;
		let trimmed = line.trim();

		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}

		if trimmed.starts_with("msgid_plural") || trimmed.starts_with("msgstr[") {
			return Err(PoParseError::Unsupported {
				line: line_no,
				feature: "plural forms",
			});
		}

		if let Some(value) = parse_keyword(trimmed, "msgctxt") {
			flush_entry(&mut catalog, &mut current_entry, line_no)?;
			current_entry.msgctxt = Some(unescape_string(&value));
			segment = Segment::Context;
		} else if let Some(value) = parse_keyword(trimmed, "msgid") {
			if current_entry.msgid.is_some() {
				flush_entry(&mut catalog, &mut current_entry, line_no)?;
			}
			current_entry.msgid = Some(unescape_string(&value));
			segment = Segment::Id;
		} else if let Some(value) = parse_keyword(trimmed, "msgstr") {
			if current_entry.msgid.is_none() {
				return Err(PoParseError::Parse {
					line: line_no,
					message: "msgstr without a preceding msgid".to_string(),
				});
			}
			current_entry.msgstr = Some(unescape_string(&value));
			segment = Segment::Str;
		} else if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
			let value = unescape_string(&trimmed[1..trimmed.len() - 1]);
			let target = match segment {
				Segment::Context => current_entry.msgctxt.as_mut(),
				Segment::Id => current_entry.msgid.as_mut(),
				Segment::Str => current_entry.msgstr.as_mut(),
				Segment::None => None,
			};
			match target {
				Some(existing) => existing.push_str(&value),
				None => {
					return Err(PoParseError::Parse {
						line: line_no,
						message: "continuation string outside of an entry".to_string(),
					});
				}
			}
		} else {
			return Err(PoParseError::Parse {
				line: line_no,
				message: format!("unrecognized line: {}", trimmed),
			});
		}
	}

	flush_entry(&mut catalog, &mut current_entry, line_no)?;
	Ok(catalog)
}

/// Parse a keyword and its quoted value from a line
fn parse_keyword(line: &str, keyword: &str) -> Option<String> {
	let rest = line.strip_prefix(keyword)?;
	// `msgid` must not match `msgid_plural` and friends
	if !rest.starts_with(char::is_whitespace) {
		return None;
	}
	let rest = rest.trim();
	if rest.len() < 2 || !rest.starts_with('"') || !rest.ends_with('"') {
		return None;
	}

	Some(rest[1..rest.len() - 1].to_string())
}

/// Unescape a string (handle \n, \t, \r, \", \\)
fn unescape_string(s: &str) -> String {
	let mut result = String::with_capacity(s.len());
	let mut chars = s.chars();

	while let Some(ch) = chars.next() {
		if ch == '\\' {
			match chars.next() {
				Some('n') => result.push('\n'),
				Some('t') => result.push('\t'),
				Some('r') => result.push('\r'),
				Some('"') => result.push('"'),
				Some('\\') => result.push('\\'),
				Some(other) => {
					result.push('\\');
					result.push(other);
				}
				None => result.push('\\'),
			}
		} else {
			result.push(ch);
		}
	}

	result
}

/// Move a completed entry into the catalog and reset it
fn flush_entry(
	catalog: &mut MessageCatalog,
	entry: &mut PoEntry,
	line: usize,
) -> Result<(), PoParseError> {
	if !entry.has_started() {
		return Ok(());
	}
	let finished = std::mem::take(entry);

	let (Some(msgid), Some(msgstr)) = (finished.msgid, finished.msgstr) else {
		return Err(PoParseError::Parse {
			line,
			message: "entry is missing msgid or msgstr".to_string(),
		});
	};

	// Header entry and untranslated entries carry nothing to look up
	if msgid.is_empty() || msgstr.is_empty() {
		return Ok(());
	}

	match finished.msgctxt {
		Some(context) => catalog.add_context(context, msgid, msgstr),
		None => catalog.add_translation(msgid, msgstr),
	}
	Ok(())
}
