//! i3bar streaming JSON protocol.
//!
//! Output is a header object, then one never-closed array whose elements
//! are the per-cycle block arrays, one cycle per line.

use crate::icons::Icon;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

#[derive(Serialize)]
struct Header {
    version: u32,
}

/// One JSON object of a cycle. Field order is the order the bar receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_block_width: Option<u32>,
    pub separator: bool,
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

impl Block {
    /// Icon-only block glued to the text block that follows it.
    pub fn icon(icon: Icon, icon_dir: &Path, color: &str) -> Self {
        Block {
            separator_block_width: Some(0),
            separator: false,
            full_text: String::new(),
            icon: Some(icon.path(icon_dir)),
            color: color.to_string(),
            icon_color: Some(color.to_string()),
        }
    }

    /// Text block; a trailing space keeps it off the next icon.
    pub fn text(text: &str, color: &str) -> Self {
        Block {
            separator_block_width: None,
            separator: false,
            full_text: format!("{} ", text),
            icon: None,
            color: color.to_string(),
            icon_color: None,
        }
    }
}

/// Write the protocol header and open the infinite array.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &Header { version: 1 })?;
    out.write_all(b"\n[\n")?;
    out.flush()
}

/// Write one cycle as an array element and flush it to the bar.
pub fn write_cycle<W: Write>(out: &mut W, blocks: &[Block]) -> io::Result<()> {
    serde_json::to_writer(&mut *out, blocks)?;
    out.write_all(b",\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_block_json() {
        let block = Block::icon(Icon::Clock, Path::new("/icons"), "#dddd00");
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r##"{"separator_block_width":0,"separator":false,"full_text":"","icon":"/icons/clock2.xbm","color":"#dddd00","icon_color":"#dddd00"}"##
        );
    }

    #[test]
    fn test_text_block_json() {
        let block = Block::text("42", "#ff0000");
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r##"{"separator":false,"full_text":"42 ","color":"#ff0000"}"##
        );
    }

    #[test]
    fn test_text_is_json_escaped() {
        let block = Block::text("back\\slash\ttab\u{1}", "#555555");
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""full_text":"back\\slash\ttab\u0001 ""#));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["full_text"], "back\\slash\ttab\u{1} ");
    }

    #[test]
    fn test_stream_layout() {
        let mut out = Vec::new();
        write_header(&mut out).unwrap();
        write_cycle(&mut out, &[Block::text("a", "#000000")]).unwrap();
        write_cycle(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\"version\":1}\n[\n[{\"separator\":false,\"full_text\":\"a \",\"color\":\"#000000\"}],\n[],\n"
        );
    }
}
