//! `.FP1` document rendering.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use fp1_model::Profile;

use crate::layout::{APPLICATION, application_version, resolve_fields};

const ROOT_ELEMENT: &str = "ConversionProfile";
const GROUP_ELEMENT: &str = "PropertyGroup";

/// Prefix written before every element line.
const LINE_PREFIX: &str = " ";
/// Indent per nesting level.
const INDENT: &str = "  ";

/// Renders `profile` as an `.FP1` document.
///
/// The layout matches what X RAW Studio writes: every element line carries a
/// one-space prefix plus two spaces per nesting level, empty values render as
/// `<Tag></Tag>`, and there is no trailing newline.
pub fn render_profile(profile: &Profile) -> Result<String> {
    let fields = resolve_fields(profile)
        .with_context(|| format!("resolve profile fields for {}", profile.label))?;

    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("application", APPLICATION));
    root.push_attribute(("version", application_version(profile)));
    write_line_start(&mut xml, 0);
    xml.write_event(Event::Start(root))?;

    let mut group = BytesStart::new(GROUP_ELEMENT);
    group.push_attribute(("device", profile.device.as_str()));
    group.push_attribute(("version", profile.device_tag.as_str()));
    group.push_attribute(("label", profile.label.as_str()));
    write_line_start(&mut xml, 1);
    xml.write_event(Event::Start(group))?;

    for (name, value) in &fields {
        write_line_start(&mut xml, 2);
        xml.write_event(Event::Start(BytesStart::new(*name)))?;
        let text = value.to_string();
        if !text.is_empty() {
            xml.write_event(Event::Text(BytesText::new(&text)))?;
        }
        xml.write_event(Event::End(BytesEnd::new(*name)))?;
    }

    write_line_start(&mut xml, 1);
    xml.write_event(Event::End(BytesEnd::new(GROUP_ELEMENT)))?;
    write_line_start(&mut xml, 0);
    xml.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(xml.into_inner()).context("profile document is not valid UTF-8")
}

fn write_line_start(xml: &mut Writer<Vec<u8>>, depth: usize) {
    let out = xml.get_mut();
    out.push(b'\n');
    out.extend_from_slice(LINE_PREFIX.as_bytes());
    for _ in 0..depth {
        out.extend_from_slice(INDENT.as_bytes());
    }
}
